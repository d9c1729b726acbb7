// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! Duplicate vertex detection

use crate::geometry::{Topology, VertexAttributes};
use std::collections::BTreeMap;

/// Mapping from a duplicate vertex index to its representative.
///
/// Built in a single ascending pass with a first-match rule, so every
/// representative is the lowest-indexed member of its equivalence chain and
/// is itself never a duplicate of anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateMap {
    map: BTreeMap<u16, u16>,
}

impl DuplicateMap {
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The representative a duplicate collapses onto, if `index` is one.
    pub fn representative(&self, index: u16) -> Option<u16> {
        self.map.get(&index).copied()
    }

    /// Point every topology reference to a duplicate at its representative.
    ///
    /// After this pass nothing references the duplicates directly, so the
    /// unused-vertex removal pipeline garbage-collects them.
    pub fn alias_topology(&self, topology: &mut Topology) {
        for triangle in &mut topology.triangles {
            for corner in &mut triangle.indices {
                if let Some(rep) = self.representative(*corner) {
                    *corner = rep;
                }
            }
        }

        for strip in &mut topology.strips {
            for point in strip {
                if let Some(rep) = self.representative(*point) {
                    *point = rep;
                }
            }
        }
    }
}

/// Detect vertices whose whole attribute tuple matches an earlier vertex.
///
/// Two vertices are duplicates iff their positions are exactly equal, their
/// normals are absent or exactly equal, their colors are absent or exactly
/// equal, and every UV set agrees at both indices. Comparison is exact
/// floating-point equality on purpose; an epsilon would change which vertices
/// collapse. O(n²) in the vertex count.
pub fn find_duplicates(attributes: &VertexAttributes) -> DuplicateMap {
    let count = attributes.vertex_count();
    let mut map = BTreeMap::new();

    for a in 1..count {
        for b in 0..a {
            if attributes.positions[a] != attributes.positions[b] {
                continue;
            }

            if attributes.has_normals() && attributes.normals[a] != attributes.normals[b] {
                continue;
            }

            if attributes.has_colors() && attributes.colors[a] != attributes.colors[b] {
                continue;
            }

            if attributes.uv_sets.iter().any(|uv| uv[a] != uv[b]) {
                continue;
            }

            // First match wins: the earliest equal vertex is the
            // representative.
            map.insert(a as u16, b as u16);
            break;
        }
    }

    DuplicateMap { map }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Triangle;
    use nalgebra::{Point3, Vector2, Vector3};

    fn attributes_with_positions(positions: Vec<Point3<f32>>) -> VertexAttributes {
        let declared_count = positions.len() as u32;
        VertexAttributes {
            positions,
            normals: Vec::new(),
            colors: Vec::new(),
            uv_sets: Vec::new(),
            declared_count,
        }
    }

    #[test]
    fn test_duplicate_maps_onto_earliest_index() {
        let attributes = attributes_with_positions(vec![
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(9.0, 9.0, 9.0),
        ]);

        let duplicates = find_duplicates(&attributes);

        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates.representative(1), Some(0));
        assert_eq!(duplicates.representative(2), None);
    }

    #[test]
    fn test_chain_collapses_onto_one_representative() {
        let attributes = attributes_with_positions(vec![
            Point3::origin(),
            Point3::origin(),
            Point3::origin(),
        ]);

        let duplicates = find_duplicates(&attributes);

        // Both later copies map straight to index 0, never to each other.
        assert_eq!(duplicates.representative(1), Some(0));
        assert_eq!(duplicates.representative(2), Some(0));
    }

    #[test]
    fn test_differing_normals_block_the_match() {
        let mut attributes = attributes_with_positions(vec![Point3::origin(), Point3::origin()]);
        attributes.normals = vec![Vector3::z(), Vector3::x()];

        assert!(find_duplicates(&attributes).is_empty());
    }

    #[test]
    fn test_differing_uv_blocks_the_match() {
        let mut attributes = attributes_with_positions(vec![Point3::origin(), Point3::origin()]);
        attributes.uv_sets = vec![vec![Vector2::new(0.0, 0.0), Vector2::new(0.5, 0.0)]];

        assert!(find_duplicates(&attributes).is_empty());
    }

    #[test]
    fn test_exact_equality_no_epsilon() {
        let attributes = attributes_with_positions(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1e-7, 0.0, 0.0),
        ]);

        assert!(find_duplicates(&attributes).is_empty());
    }

    #[test]
    fn test_alias_topology_points_at_representatives() {
        let attributes = attributes_with_positions(vec![
            Point3::origin(),
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
        ]);
        let duplicates = find_duplicates(&attributes);

        let mut topology = Topology {
            triangles: vec![Triangle::new([0, 1, 2])],
            strips: vec![vec![1, 2]],
        };
        duplicates.alias_topology(&mut topology);

        assert_eq!(topology.triangles[0].indices, [0, 0, 2]);
        assert_eq!(topology.strips[0], vec![0, 2]);
    }
}
