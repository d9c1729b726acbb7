// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! Document module - the block-graph host model spells are written against

mod block;
mod store;

pub use block::{Block, BlockRef, TypedArray};
pub use store::Document;

/// Well-known block type tags.
pub mod block_types {
    pub const SHAPE: &str = "Shape";
    pub const MESH_DATA: &str = "MeshData";
    pub const SKIN_INSTANCE: &str = "SkinInstance";
    pub const SKIN_DATA: &str = "SkinData";
    pub const SKIN_PARTITION: &str = "SkinPartition";
}

/// Well-known field names shared by the mesh block family.
pub mod fields {
    pub const VERTICES: &str = "vertices";
    pub const NORMALS: &str = "normals";
    pub const COLORS: &str = "colors";
    pub const UV_SETS: &str = "uv_sets";
    pub const TRIANGLES: &str = "triangles";
    pub const STRIPS: &str = "strips";
    pub const BONES: &str = "bones";
    pub const CENTER: &str = "center";
    pub const RADIUS: &str = "radius";
    pub const NUM_VERTICES: &str = "num_vertices";
    pub const NUM_TRIANGLES: &str = "num_triangles";
    pub const NUM_TRIANGLE_POINTS: &str = "num_triangle_points";
    pub const CONSISTENCY_FLAGS: &str = "consistency_flags";
    pub const DATA: &str = "data";
    pub const SKIN: &str = "skin";
    pub const PARTITION: &str = "partition";
}

/// Consistency flag bit marking a mesh as volatile; volatile meshes use the
/// box-center bounds rule.
pub const VOLATILE_FLAG: u32 = 0x8000;

/// Capability surface the spells are written against.
///
/// Anything that can resolve links, read and write typed arrays and scalar
/// fields, and delete blocks can host the spells; nothing in the core assumes
/// a concrete graph representation.
pub trait BlockModel {
    /// Every live block, in a stable order.
    fn blocks(&self) -> Vec<BlockRef>;
    fn block_type(&self, block: BlockRef) -> Option<&str>;
    /// Follow a named link; a link to a deleted block resolves to nothing.
    fn resolve_link(&self, block: BlockRef, field: &str) -> Option<BlockRef>;
    fn array(&self, block: BlockRef, name: &str) -> Option<&TypedArray>;
    fn set_array(&mut self, block: BlockRef, name: &str, data: TypedArray);
    fn count(&self, block: BlockRef, name: &str) -> Option<u32>;
    fn set_count(&mut self, block: BlockRef, name: &str, value: u32);
    fn float(&self, block: BlockRef, name: &str) -> Option<f32>;
    fn set_float(&mut self, block: BlockRef, name: &str, value: f32);
    /// Delete a block; every link in the document that pointed at it must
    /// resolve to nothing afterwards.
    fn remove_block(&mut self, block: BlockRef);
}

/// Find the shape that owns triangle geometry at or around `block`.
///
/// Accepts either the shape itself or its mesh-data block; in the latter case
/// the document is scanned for the owning shape. Returns the shape only when
/// its data link resolves to an actual mesh-data block.
pub fn find_shape(model: &dyn BlockModel, block: BlockRef) -> Option<BlockRef> {
    let candidate = if model.block_type(block) == Some(block_types::MESH_DATA) {
        model.blocks().into_iter().find(|&shape| {
            model.block_type(shape) == Some(block_types::SHAPE)
                && model.resolve_link(shape, fields::DATA) == Some(block)
        })?
    } else {
        block
    };

    if model.block_type(candidate) != Some(block_types::SHAPE) {
        return None;
    }

    let data = model.resolve_link(candidate, fields::DATA)?;
    if model.block_type(data) == Some(block_types::MESH_DATA) {
        Some(candidate)
    } else {
        None
    }
}

/// Find the mesh-data block for a shape, or `block` itself when it already
/// is one.
pub fn find_mesh_data(model: &dyn BlockModel, block: BlockRef) -> Option<BlockRef> {
    if model.block_type(block) == Some(block_types::MESH_DATA) {
        return Some(block);
    }

    let shape = find_shape(model, block)?;
    model.resolve_link(shape, fields::DATA)
}
