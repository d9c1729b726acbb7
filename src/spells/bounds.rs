// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! Bounding sphere update spells

use crate::document::{
    block_types, fields, find_mesh_data, BlockModel, BlockRef, TypedArray, VOLATILE_FLAG,
};
use crate::error::SpellError;
use crate::geometry::BoundSphere;

/// Recompute and store a mesh block's bounding sphere.
///
/// Volatile meshes (consistency flag bit set) use the min/max box midpoint
/// as the center; everything else uses the vertex average.
pub fn update_bounds(model: &mut dyn BlockModel, block: BlockRef) -> Result<BoundSphere, SpellError> {
    let data = find_mesh_data(model, block).ok_or(SpellError::NotApplicable {
        spell: "update_bounds",
    })?;
    let vertices = match model.array(data, fields::VERTICES) {
        Some(TypedArray::Vector3(v)) => v.clone(),
        _ => {
            return Err(SpellError::MissingArray {
                name: fields::VERTICES,
            })
        }
    };
    if vertices.is_empty() {
        return Err(SpellError::EmptyMesh);
    }

    let volatile = model
        .count(data, fields::CONSISTENCY_FLAGS)
        .is_some_and(|flags| flags & VOLATILE_FLAG != 0);

    let sphere = if volatile {
        BoundSphere::from_points_box_center(&vertices)
    } else {
        BoundSphere::from_points(&vertices)
    };

    model.set_array(data, fields::CENTER, TypedArray::Vector3(vec![sphere.center]));
    model.set_float(data, fields::RADIUS, sphere.radius);

    Ok(sphere)
}

/// Update bounds on every mesh-data block in the document. Returns how many
/// blocks were updated.
pub fn update_all_bounds(model: &mut dyn BlockModel) -> usize {
    // Collect targets first; casting mutates the model.
    let targets: Vec<BlockRef> = model
        .blocks()
        .into_iter()
        .filter(|&block| model.block_type(block) == Some(block_types::MESH_DATA))
        .collect();

    let mut updated = 0;
    for data in targets {
        if update_bounds(model, data).is_ok() {
            updated += 1;
        }
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Block, Document};
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn mesh_block(points: Vec<Point3<f32>>) -> Block {
        Block::new(block_types::MESH_DATA).with_array(fields::VERTICES, TypedArray::Vector3(points))
    }

    #[test]
    fn test_update_bounds_writes_center_and_radius() {
        let mut doc = Document::new();
        let data = doc.insert(mesh_block(vec![
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ]));

        let sphere = update_bounds(&mut doc, data).unwrap();

        assert_relative_eq!(sphere.center.x, 0.0);
        assert_relative_eq!(sphere.radius, 1.0);
        assert_eq!(
            doc.array(data, fields::CENTER),
            Some(&TypedArray::Vector3(vec![sphere.center]))
        );
        assert_eq!(doc.float(data, fields::RADIUS), Some(1.0));
    }

    #[test]
    fn test_volatile_flag_selects_box_center() {
        let skewed = vec![
            Point3::origin(),
            Point3::origin(),
            Point3::origin(),
            Point3::new(4.0, 0.0, 0.0),
        ];

        let mut doc = Document::new();
        let data = doc.insert(
            mesh_block(skewed).with_count(fields::CONSISTENCY_FLAGS, VOLATILE_FLAG),
        );

        let sphere = update_bounds(&mut doc, data).unwrap();
        assert_relative_eq!(sphere.center.x, 2.0);
        assert_relative_eq!(sphere.radius, 2.0);
    }

    #[test]
    fn test_update_all_bounds_covers_every_mesh_block() {
        let mut doc = Document::new();
        doc.insert(mesh_block(vec![Point3::origin()]));
        doc.insert(Block::new(block_types::SKIN_PARTITION));
        doc.insert(mesh_block(vec![Point3::new(1.0, 1.0, 1.0)]));
        // An empty mesh block is skipped, not fatal.
        doc.insert(mesh_block(Vec::new()));

        assert_eq!(update_all_bounds(&mut doc), 2);
    }
}
