// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! Vertex compaction over parallel attribute arrays

use super::IndexMap;
use crate::error::SpellError;
use crate::geometry::{Topology, VertexAttributes};

/// Result of a compaction pass, ready for write-back.
#[derive(Debug, Clone, PartialEq)]
pub struct Compaction {
    pub attributes: VertexAttributes,
    pub topology: Topology,
    pub map: IndexMap,
}

impl Compaction {
    pub fn removed_count(&self) -> usize {
        self.map.removed_count()
    }

    pub fn new_vertex_count(&self) -> usize {
        self.map.kept_count()
    }
}

/// Compact a mesh through per-vertex keep flags.
///
/// Validates the attribute bundle and the topology before touching anything,
/// then filters every parallel array in lockstep and rewrites every index
/// array through the dense renumbering. The inputs are borrowed and the
/// outputs owned, so a validation failure can never leave partial state.
pub fn compact(
    attributes: &VertexAttributes,
    topology: &Topology,
    kept: &[bool],
) -> Result<Compaction, SpellError> {
    attributes.validate()?;
    topology.validate(attributes.vertex_count())?;
    debug_assert_eq!(kept.len(), attributes.vertex_count());

    let map = IndexMap::from_kept(kept);
    let attributes = attributes.retain_kept(kept);

    let mut topology = topology.clone();
    map.remap_topology(&mut topology);

    Ok(Compaction {
        attributes,
        topology,
        map,
    })
}

/// Compact away every vertex referenced by no triangle corner or strip
/// element.
pub fn compact_unused(
    attributes: &VertexAttributes,
    topology: &Topology,
) -> Result<Compaction, SpellError> {
    attributes.validate()?;
    topology.validate(attributes.vertex_count())?;

    let kept = topology.used_vertices(attributes.vertex_count());
    compact(attributes, topology, &kept)
}
