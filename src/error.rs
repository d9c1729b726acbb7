// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! Spell error types

use thiserror::Error;

/// Errors surfaced by mesh spells.
///
/// Every variant is detected before any array is written back to the
/// document, so a failed operation leaves the host blocks untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpellError {
    /// The mesh has no vertices at all.
    #[error("no vertices")]
    EmptyMesh,

    /// A parallel attribute array disagrees with the vertex count.
    #[error("{array} array size differs: expected {expected}, got {actual}")]
    ArrayLengthMismatch {
        array: String,
        expected: usize,
        actual: usize,
    },

    /// The stored vertex count field disagrees with the vertex array.
    #[error("declared vertex count {declared} differs from vertex array size {actual}")]
    DeclaredCountMismatch { declared: usize, actual: usize },

    /// An external snapshot's record count disagrees with the vertex count.
    #[error("snapshot holds {actual} records but the mesh has {expected} vertices")]
    CountMismatch { expected: usize, actual: usize },

    /// The snapshot text is not a well-formed record array.
    #[error("malformed vertex snapshot: {0}")]
    MalformedSnapshot(String),

    /// A topology reference points past the end of the vertex array.
    #[error("vertex index {index} out of bounds for vertex count {limit}")]
    IndexOutOfBounds { index: usize, limit: usize },

    /// A block is missing an array the operation requires.
    #[error("block has no usable '{name}' array")]
    MissingArray { name: &'static str },

    /// A spell was cast on a block its predicate rejects.
    #[error("'{spell}' is not applicable to this block")]
    NotApplicable { spell: &'static str },

    /// No spell registered under the requested name.
    #[error("no spell named '{0}'")]
    UnknownSpell(String),
}
