// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! Nearest-match vertex transplant

use crate::error::SpellError;
use crate::snapshot::VertexRecord;
use nalgebra::{Point3, Vector2};

/// UV distance below which a vertex and an external sample match.
pub const DEFAULT_UV_TOLERANCE: f32 = 1e-5;

/// Result of a transplant pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransplantReport {
    /// Vertices whose position was overwritten by a matched sample.
    pub modified: usize,
    /// Vertices no unused sample matched, with the position they kept.
    pub unmatched: Vec<(usize, Point3<f32>)>,
}

/// Copy sample positions onto the vertices they match by UV proximity.
///
/// For each vertex in index order, samples are scanned in order and the
/// first unused one whose UV differs by strictly less than `tolerance` in
/// both components is taken; a difference of exactly `tolerance` on either
/// axis does not match. Unmatched vertices keep their position and are
/// reported, not failed.
///
/// This is a greedy first-fit assignment, not an optimal bipartite match: a
/// vertex can miss a sample an earlier vertex already claimed. UVs are
/// expected to be near-unique per vertex, which keeps the greedy answer
/// correct in practice.
pub fn transplant(
    positions: &mut [Point3<f32>],
    uvs: &[Vector2<f32>],
    samples: &[VertexRecord],
    tolerance: f32,
) -> Result<TransplantReport, SpellError> {
    if samples.len() != positions.len() {
        return Err(SpellError::CountMismatch {
            expected: positions.len(),
            actual: samples.len(),
        });
    }
    debug_assert_eq!(uvs.len(), positions.len());

    let mut used = vec![false; samples.len()];
    let mut report = TransplantReport::default();

    for (i, position) in positions.iter_mut().enumerate() {
        let uv = uvs[i];
        let matched = samples.iter().enumerate().find(|(j, sample)| {
            if used[*j] {
                return false;
            }
            let du = uv.x - sample.uv[0];
            let dv = uv.y - sample.uv[1];
            du > -tolerance && du < tolerance && dv > -tolerance && dv < tolerance
        });

        match matched {
            Some((j, sample)) => {
                *position = Point3::new(sample.vertex[0], sample.vertex[1], sample.vertex[2]);
                used[j] = true;
                report.modified += 1;
            }
            None => report.unmatched.push((i, *position)),
        }
    }

    Ok(report)
}
