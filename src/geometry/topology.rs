// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! Triangle and strip index arrays

use crate::error::SpellError;
use serde::{Deserialize, Serialize};

/// Triangle defined by three vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    pub indices: [u16; 3],
}

impl Triangle {
    pub fn new(indices: [u16; 3]) -> Self {
        Self { indices }
    }

    /// Reverse the winding by swapping the second and third corner.
    pub fn flip(&mut self) {
        self.indices.swap(1, 2);
    }

    /// True when two corners coincide.
    pub fn is_degenerate(&self) -> bool {
        let [a, b, c] = self.indices;
        a == b || b == c || c == a
    }

    /// True when `other` is the same corner cycle with the same winding.
    pub fn same_cycle(&self, other: &Triangle) -> bool {
        let [a, b, c] = self.indices;
        let [x, y, z] = other.indices;
        [a, b, c] == [x, y, z] || [a, b, c] == [y, z, x] || [a, b, c] == [z, x, y]
    }
}

/// Every index array that references vertices: a triangle list plus zero or
/// more triangle strips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    pub triangles: Vec<Triangle>,
    pub strips: Vec<Vec<u16>>,
}

impl Topology {
    /// Check that every reference is below `vertex_count`.
    pub fn validate(&self, vertex_count: usize) -> Result<(), SpellError> {
        let check = |index: u16| {
            if index as usize >= vertex_count {
                Err(SpellError::IndexOutOfBounds {
                    index: index as usize,
                    limit: vertex_count,
                })
            } else {
                Ok(())
            }
        };

        for triangle in &self.triangles {
            for &corner in &triangle.indices {
                check(corner)?;
            }
        }

        for strip in &self.strips {
            for &point in strip {
                check(point)?;
            }
        }

        Ok(())
    }

    /// Mark every vertex referenced by a triangle corner or strip element.
    ///
    /// Pure scan over the index arrays; an empty topology yields an all-false
    /// set, meaning every vertex is unused.
    pub fn used_vertices(&self, vertex_count: usize) -> Vec<bool> {
        let mut used = vec![false; vertex_count];

        for triangle in &self.triangles {
            for &corner in &triangle.indices {
                used[corner as usize] = true;
            }
        }

        for strip in &self.strips {
            for &point in strip {
                used[point as usize] = true;
            }
        }

        used
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty() && self.strips.is_empty()
    }
}
