// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! In-memory block store

use super::{Block, BlockModel, BlockRef, TypedArray};
use serde::{Deserialize, Serialize};

/// In-memory block graph; the reference implementation of [`BlockModel`].
///
/// Deletion tombstones the slot so every outstanding [`BlockRef`] keeps its
/// meaning. The serde form exists so the CLI and tests can round-trip a
/// document as JSON; it is not a designed interchange format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    blocks: Vec<Option<Block>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block and return its stable reference.
    pub fn insert(&mut self, block: Block) -> BlockRef {
        self.blocks.push(Some(block));
        BlockRef(self.blocks.len() - 1)
    }

    pub fn block(&self, block: BlockRef) -> Option<&Block> {
        self.blocks.get(block.0).and_then(|slot| slot.as_ref())
    }

    pub fn block_mut(&mut self, block: BlockRef) -> Option<&mut Block> {
        self.blocks.get_mut(block.0).and_then(|slot| slot.as_mut())
    }

    /// Number of live (non-deleted) blocks.
    pub fn live_count(&self) -> usize {
        self.blocks.iter().flatten().count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BlockRef, &Block)> {
        self.blocks
            .iter()
            .enumerate()
            .filter_map(|(n, slot)| slot.as_ref().map(|block| (BlockRef(n), block)))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

impl BlockModel for Document {
    fn blocks(&self) -> Vec<BlockRef> {
        self.iter().map(|(block, _)| block).collect()
    }

    fn block_type(&self, block: BlockRef) -> Option<&str> {
        self.block(block).map(|b| b.block_type.as_str())
    }

    fn resolve_link(&self, block: BlockRef, field: &str) -> Option<BlockRef> {
        let target = *self.block(block)?.links.get(field)?;
        // A link to a tombstoned slot resolves to nothing.
        self.block(target).map(|_| target)
    }

    fn array(&self, block: BlockRef, name: &str) -> Option<&TypedArray> {
        self.block(block)?.arrays.get(name)
    }

    fn set_array(&mut self, block: BlockRef, name: &str, data: TypedArray) {
        if let Some(b) = self.block_mut(block) {
            b.arrays.insert(name.to_owned(), data);
        }
    }

    fn count(&self, block: BlockRef, name: &str) -> Option<u32> {
        self.block(block)?.counts.get(name).copied()
    }

    fn set_count(&mut self, block: BlockRef, name: &str, value: u32) {
        if let Some(b) = self.block_mut(block) {
            b.counts.insert(name.to_owned(), value);
        }
    }

    fn float(&self, block: BlockRef, name: &str) -> Option<f32> {
        self.block(block)?.floats.get(name).copied()
    }

    fn set_float(&mut self, block: BlockRef, name: &str, value: f32) {
        if let Some(b) = self.block_mut(block) {
            b.floats.insert(name.to_owned(), value);
        }
    }

    fn remove_block(&mut self, block: BlockRef) {
        if let Some(slot) = self.blocks.get_mut(block.0) {
            *slot = None;
        }
        for other in self.blocks.iter_mut().flatten() {
            other.links.retain(|_, target| *target != block);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{block_types, fields};

    #[test]
    fn test_insert_assigns_sequential_refs() {
        let mut doc = Document::new();
        let a = doc.insert(Block::new("A"));
        let b = doc.insert(Block::new("B"));

        assert_eq!(a, BlockRef(0));
        assert_eq!(b, BlockRef(1));
        assert_eq!(doc.block_type(b), Some("B"));
    }

    #[test]
    fn test_remove_block_nulls_inbound_links_and_keeps_ids() {
        let mut doc = Document::new();
        let data = doc.insert(Block::new(block_types::MESH_DATA));
        let shape = doc.insert(Block::new(block_types::SHAPE).with_link(fields::DATA, data));

        doc.remove_block(data);

        assert!(doc.block(data).is_none());
        assert_eq!(doc.resolve_link(shape, fields::DATA), None);
        // The surviving block keeps its original reference.
        assert_eq!(doc.block_type(shape), Some(block_types::SHAPE));
        assert_eq!(doc.live_count(), 1);
    }

    #[test]
    fn test_json_round_trip() {
        let mut doc = Document::new();
        let data = doc
            .insert(Block::new(block_types::MESH_DATA).with_count(fields::NUM_VERTICES, 4));
        doc.insert(Block::new(block_types::SHAPE).with_link(fields::DATA, data));

        let text = doc.to_json().unwrap();
        let restored = Document::from_json(&text).unwrap();
        assert_eq!(doc, restored);
    }
}
