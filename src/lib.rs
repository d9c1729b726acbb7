// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! Meshspell
//!
//! Mesh vertex compaction and topology remapping over a block-graph
//! document. Spells detect unused and duplicated vertices, compact every
//! parallel attribute array in lockstep, and rewrite triangles, strips and
//! skin weights so the mesh stays topologically valid; a UV-driven
//! transplant copies positions in from an external vertex snapshot.

pub mod cli;
pub mod compact;
pub mod document;
pub mod error;
pub mod geometry;
pub mod snapshot;
pub mod spells;
pub mod transplant;

pub use compact::{compact, compact_unused, find_duplicates, Compaction, DuplicateMap, IndexMap};
pub use document::{Block, BlockModel, BlockRef, Document, TypedArray};
pub use error::SpellError;
pub use geometry::{
    BoneWeights, BoundSphere, Color4, Topology, Triangle, VertexAttributes, VertexWeight,
};
pub use snapshot::VertexRecord;
pub use spells::{
    cast_by_name, registry, remove_duplicate_vertices, remove_unused_vertices, Outcome,
    RemovalReport, Spell,
};
pub use transplant::{transplant, TransplantReport, DEFAULT_UV_TOLERANCE};
