// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! Compaction module - usage analysis, duplicate detection and remapping

mod compactor;
mod duplicates;
mod remap;

pub use compactor::{compact, compact_unused, Compaction};
pub use duplicates::{find_duplicates, DuplicateMap};
pub use remap::IndexMap;
