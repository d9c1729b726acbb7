// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! Parallel per-vertex attribute arrays

use crate::error::SpellError;
use nalgebra::{Point3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// RGBA vertex color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color4 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color4 {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// The parallel attribute arrays of one mesh.
///
/// Positions are mandatory; normals, colors and UV sets are optional but,
/// when populated, must run in lockstep with the position array. The declared
/// count mirrors the host block's stored vertex count field and is
/// cross-checked rather than trusted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VertexAttributes {
    pub positions: Vec<Point3<f32>>,
    pub normals: Vec<Vector3<f32>>,
    pub colors: Vec<Color4>,
    pub uv_sets: Vec<Vec<Vector2<f32>>>,
    pub declared_count: u32,
}

impl VertexAttributes {
    /// Actual vertex count, taken from the position array.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    pub fn has_colors(&self) -> bool {
        !self.colors.is_empty()
    }

    /// Cross-check every parallel array against the position array.
    ///
    /// Runs before any mutation; a failure aborts the whole operation with
    /// the document untouched.
    pub fn validate(&self) -> Result<(), SpellError> {
        if self.positions.is_empty() {
            return Err(SpellError::EmptyMesh);
        }

        let expected = self.positions.len();

        if self.has_normals() && self.normals.len() != expected {
            return Err(SpellError::ArrayLengthMismatch {
                array: "normals".into(),
                expected,
                actual: self.normals.len(),
            });
        }

        if self.has_colors() && self.colors.len() != expected {
            return Err(SpellError::ArrayLengthMismatch {
                array: "colors".into(),
                expected,
                actual: self.colors.len(),
            });
        }

        for (set, uv) in self.uv_sets.iter().enumerate() {
            if uv.len() != expected {
                return Err(SpellError::ArrayLengthMismatch {
                    array: format!("uv set {set}"),
                    expected,
                    actual: uv.len(),
                });
            }
        }

        if self.declared_count as usize != expected {
            return Err(SpellError::DeclaredCountMismatch {
                declared: self.declared_count as usize,
                actual: expected,
            });
        }

        Ok(())
    }

    /// Filter every populated array in lockstep, keeping element `i` iff
    /// `kept[i]`. The declared count follows the surviving length.
    pub fn retain_kept(&self, kept: &[bool]) -> VertexAttributes {
        fn filter<T: Clone>(values: &[T], kept: &[bool]) -> Vec<T> {
            values
                .iter()
                .zip(kept)
                .filter(|(_, &keep)| keep)
                .map(|(v, _)| v.clone())
                .collect()
        }

        let positions = filter(&self.positions, kept);
        let declared_count = positions.len() as u32;

        VertexAttributes {
            positions,
            normals: filter(&self.normals, kept),
            colors: filter(&self.colors, kept),
            uv_sets: self.uv_sets.iter().map(|uv| filter(uv, kept)).collect(),
            declared_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point3, Vector2, Vector3};

    fn sample() -> VertexAttributes {
        VertexAttributes {
            positions: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            normals: vec![Vector3::z(); 3],
            colors: Vec::new(),
            uv_sets: vec![vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(1.0, 0.0),
                Vector2::new(0.0, 1.0),
            ]],
            declared_count: 3,
        }
    }

    #[test]
    fn test_validate_accepts_consistent_arrays() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_mesh() {
        let attributes = VertexAttributes::default();
        assert_eq!(attributes.validate(), Err(SpellError::EmptyMesh));
    }

    #[test]
    fn test_validate_rejects_short_normals() {
        let mut attributes = sample();
        attributes.normals.pop();
        assert!(matches!(
            attributes.validate(),
            Err(SpellError::ArrayLengthMismatch { expected: 3, actual: 2, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_uv_set_mismatch() {
        let mut attributes = sample();
        attributes.uv_sets[0].push(Vector2::new(0.5, 0.5));
        assert!(matches!(
            attributes.validate(),
            Err(SpellError::ArrayLengthMismatch { expected: 3, actual: 4, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_stale_declared_count() {
        let mut attributes = sample();
        attributes.declared_count = 7;
        assert_eq!(
            attributes.validate(),
            Err(SpellError::DeclaredCountMismatch { declared: 7, actual: 3 })
        );
    }

    #[test]
    fn test_retain_kept_filters_in_lockstep() {
        let attributes = sample();
        let kept = attributes.retain_kept(&[true, false, true]);

        assert_eq!(kept.vertex_count(), 2);
        assert_eq!(kept.declared_count, 2);
        assert_eq!(kept.positions[1], Point3::new(0.0, 1.0, 0.0));
        assert_eq!(kept.normals.len(), 2);
        assert_eq!(kept.uv_sets[0].len(), 2);
        assert_eq!(kept.uv_sets[0][1], Vector2::new(0.0, 1.0));
        assert!(kept.validate().is_ok());
    }
}
