// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! Triangle and UV editing spells

use crate::document::{fields, find_mesh_data, BlockModel, BlockRef, TypedArray};
use crate::error::SpellError;
use crate::geometry::Triangle;
use nalgebra::Vector2;

/// Drop degenerate triangles and cyclic-rotation duplicates.
///
/// A triangle with a repeated corner is degenerate; two triangles that are
/// rotations of the same corner cycle describe the same face with the same
/// winding, and only the first is kept. Returns the number removed.
pub fn prune_redundant_triangles(
    model: &mut dyn BlockModel,
    block: BlockRef,
) -> Result<usize, SpellError> {
    let data = find_mesh_data(model, block).ok_or(SpellError::NotApplicable {
        spell: "prune_triangles",
    })?;
    let triangles = match model.array(data, fields::TRIANGLES) {
        Some(TypedArray::Triangle(v)) => v.clone(),
        _ => {
            return Err(SpellError::MissingArray {
                name: fields::TRIANGLES,
            })
        }
    };
    let before = triangles.len();

    let mut pruned: Vec<Triangle> = Vec::with_capacity(before);
    for triangle in triangles {
        if triangle.is_degenerate() {
            continue;
        }
        if pruned.iter().any(|kept| kept.same_cycle(&triangle)) {
            continue;
        }
        pruned.push(triangle);
    }

    let removed = before - pruned.len();
    if removed > 0 {
        model.set_count(data, fields::NUM_TRIANGLES, pruned.len() as u32);
        model.set_count(data, fields::NUM_TRIANGLE_POINTS, (pruned.len() * 3) as u32);
        model.set_array(data, fields::TRIANGLES, TypedArray::Triangle(pruned));
    }

    Ok(removed)
}

/// Reverse the winding of every triangle. Returns how many were flipped.
pub fn flip_faces(model: &mut dyn BlockModel, block: BlockRef) -> Result<usize, SpellError> {
    let data = find_mesh_data(model, block).ok_or(SpellError::NotApplicable {
        spell: "flip_faces",
    })?;
    let mut triangles = match model.array(data, fields::TRIANGLES) {
        Some(TypedArray::Triangle(v)) => v.clone(),
        _ => {
            return Err(SpellError::MissingArray {
                name: fields::TRIANGLES,
            })
        }
    };

    for triangle in &mut triangles {
        triangle.flip();
    }

    let flipped = triangles.len();
    model.set_array(data, fields::TRIANGLES, TypedArray::Triangle(triangles));
    Ok(flipped)
}

/// How to rewrite texture coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipMode {
    /// u = 1 - u
    MirrorU,
    /// v = 1 - v
    MirrorV,
    /// u <=> v
    Swap,
}

impl FlipMode {
    fn apply(self, uv: &mut Vector2<f32>) {
        match self {
            FlipMode::MirrorU => uv.x = 1.0 - uv.x,
            FlipMode::MirrorV => uv.y = 1.0 - uv.y,
            FlipMode::Swap => {
                let u = uv.x;
                uv.x = uv.y;
                uv.y = u;
            }
        }
    }
}

/// Rewrite every coordinate of every UV set. Returns how many coordinates
/// were touched.
pub fn flip_uv(
    model: &mut dyn BlockModel,
    block: BlockRef,
    mode: FlipMode,
) -> Result<usize, SpellError> {
    let data = find_mesh_data(model, block).ok_or(SpellError::NotApplicable { spell: "flip_uv" })?;
    let mut uv_sets = match model.array(data, fields::UV_SETS) {
        Some(TypedArray::Vector2List(v)) => v.clone(),
        _ => {
            return Err(SpellError::MissingArray {
                name: fields::UV_SETS,
            })
        }
    };

    let mut touched = 0;
    for set in &mut uv_sets {
        for uv in set.iter_mut() {
            mode.apply(uv);
            touched += 1;
        }
    }

    model.set_array(data, fields::UV_SETS, TypedArray::Vector2List(uv_sets));
    Ok(touched)
}
