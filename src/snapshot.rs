// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! Vertex snapshot text format

use crate::error::SpellError;
use crate::geometry::VertexAttributes;
use serde::{Deserialize, Serialize};

/// One serialized vertex: position, optional normal and the first UV set.
///
/// The `normal` field is present exactly when the source mesh stores
/// normals. Records are order-preserving, one per vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub vertex: [f32; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<[f32; 3]>,
    pub uv: [f32; 2],
}

/// Build one record per vertex from an attribute bundle.
///
/// Requires the first UV set; the attribute bundle is expected to be
/// validated by the caller.
pub fn snapshot_records(attributes: &VertexAttributes) -> Result<Vec<VertexRecord>, SpellError> {
    let uv = attributes
        .uv_sets
        .first()
        .ok_or(SpellError::MissingArray { name: "uv_sets" })?;
    let with_normals = attributes.has_normals();

    let records = attributes
        .positions
        .iter()
        .enumerate()
        .map(|(i, position)| VertexRecord {
            vertex: [position.x, position.y, position.z],
            normal: with_normals.then(|| {
                let n = attributes.normals[i];
                [n.x, n.y, n.z]
            }),
            uv: [uv[i].x, uv[i].y],
        })
        .collect();

    Ok(records)
}

/// Serialize records as a human-diffable JSON array.
pub fn to_text(records: &[VertexRecord]) -> String {
    // Serialization of these flat records cannot fail.
    serde_json::to_string_pretty(records).expect("vertex records serialize")
}

/// Parse a snapshot produced by [`to_text`] (or any structurally equal
/// record array).
pub fn from_text(text: &str) -> Result<Vec<VertexRecord>, SpellError> {
    serde_json::from_str(text).map_err(|e| SpellError::MalformedSnapshot(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point3, Vector2, Vector3};

    fn attributes(with_normals: bool) -> VertexAttributes {
        VertexAttributes {
            positions: vec![Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 5.0, 6.0)],
            normals: if with_normals {
                vec![Vector3::z(), Vector3::x()]
            } else {
                Vec::new()
            },
            colors: Vec::new(),
            uv_sets: vec![vec![Vector2::new(0.1, 0.2), Vector2::new(0.3, 0.4)]],
            declared_count: 2,
        }
    }

    #[test]
    fn test_records_round_trip_through_text() {
        let records = snapshot_records(&attributes(true)).unwrap();
        let restored = from_text(&to_text(&records)).unwrap();
        assert_eq!(records, restored);
    }

    #[test]
    fn test_normal_field_present_only_when_stored() {
        let with = snapshot_records(&attributes(true)).unwrap();
        assert_eq!(with[1].normal, Some([1.0, 0.0, 0.0]));

        let without = snapshot_records(&attributes(false)).unwrap();
        assert_eq!(without[0].normal, None);
        assert!(!to_text(&without).contains("normal"));
    }

    #[test]
    fn test_missing_uv_set_is_an_error() {
        let mut attrs = attributes(false);
        attrs.uv_sets.clear();
        assert_eq!(
            snapshot_records(&attrs),
            Err(SpellError::MissingArray { name: "uv_sets" })
        );
    }

    #[test]
    fn test_malformed_text_is_rejected() {
        assert!(matches!(
            from_text("{\"not\": \"an array\"}"),
            Err(SpellError::MalformedSnapshot(_))
        ));
        assert!(matches!(
            from_text("[{\"vertex\": [0, 0]}]"),
            Err(SpellError::MalformedSnapshot(_))
        ));
    }
}
