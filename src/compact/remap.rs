// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! Dense old-to-new vertex renumbering

use crate::geometry::{BoneWeights, Topology, VertexWeight};

/// Old-to-new vertex index table produced by a compaction pass.
///
/// New indices are assigned by scanning old indices in ascending order and
/// incrementing a counter only for kept vertices, so survivors preserve their
/// relative order and the new index space is dense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexMap {
    table: Vec<Option<u16>>,
    kept: usize,
}

impl IndexMap {
    pub fn from_kept(kept: &[bool]) -> Self {
        let mut table = Vec::with_capacity(kept.len());
        let mut next: u16 = 0;

        for &keep in kept {
            if keep {
                table.push(Some(next));
                next += 1;
            } else {
                table.push(None);
            }
        }

        Self {
            table,
            kept: next as usize,
        }
    }

    pub fn old_count(&self) -> usize {
        self.table.len()
    }

    pub fn kept_count(&self) -> usize {
        self.kept
    }

    pub fn removed_count(&self) -> usize {
        self.table.len() - self.kept
    }

    /// New index for a kept vertex, or `None` when it was removed.
    pub fn new_index(&self, old: u16) -> Option<u16> {
        self.table.get(old as usize).copied().flatten()
    }

    pub fn is_kept(&self, old: u16) -> bool {
        self.new_index(old).is_some()
    }

    /// Rewrite every triangle corner and strip element through the table.
    ///
    /// References to removed vertices are left untouched; the removal
    /// pipelines guarantee none remain by the time this runs.
    pub fn remap_topology(&self, topology: &mut Topology) {
        for triangle in &mut topology.triangles {
            for corner in &mut triangle.indices {
                if let Some(new) = self.new_index(*corner) {
                    *corner = new;
                }
            }
        }

        for strip in &mut topology.strips {
            for point in strip {
                if let Some(new) = self.new_index(*point) {
                    *point = new;
                }
            }
        }
    }

    /// Drop influences on removed vertices and renumber the survivors,
    /// preserving their relative order. The bone's stored count follows the
    /// surviving length.
    pub fn remap_bone(&self, bone: &BoneWeights) -> BoneWeights {
        let weights: Vec<VertexWeight> = bone
            .weights
            .iter()
            .filter_map(|w| self.new_index(w.index).map(|index| VertexWeight::new(index, w.weight)))
            .collect();

        BoneWeights::new(weights)
    }
}
