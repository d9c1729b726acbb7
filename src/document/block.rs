// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! Typed blocks and their array payloads

use crate::geometry::{BoneWeights, Color4, Triangle};
use nalgebra::{Point3, Vector2, Vector3};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable reference to a block slot in a document.
///
/// Slots are tombstoned on deletion, never shifted, so a reference stays
/// valid for the lifetime of the document (resolving a deleted slot yields
/// nothing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockRef(pub usize);

impl std::fmt::Display for BlockRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Typed array payloads a block can store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum TypedArray {
    Vector3(Vec<Point3<f32>>),
    Normal(Vec<Vector3<f32>>),
    Vector2(Vec<Vector2<f32>>),
    Color4(Vec<Color4>),
    Triangle(Vec<Triangle>),
    Index(Vec<u16>),
    /// One index sequence per triangle strip.
    IndexList(Vec<Vec<u16>>),
    /// One coordinate sequence per UV set.
    Vector2List(Vec<Vec<Vector2<f32>>>),
    /// One weight list per bone.
    BoneList(Vec<BoneWeights>),
}

impl TypedArray {
    /// Number of top-level elements.
    pub fn len(&self) -> usize {
        match self {
            TypedArray::Vector3(v) => v.len(),
            TypedArray::Normal(v) => v.len(),
            TypedArray::Vector2(v) => v.len(),
            TypedArray::Color4(v) => v.len(),
            TypedArray::Triangle(v) => v.len(),
            TypedArray::Index(v) => v.len(),
            TypedArray::IndexList(v) => v.len(),
            TypedArray::Vector2List(v) => v.len(),
            TypedArray::BoneList(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One typed block: scalar counts, typed arrays and links, all addressed by
/// field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub block_type: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub counts: BTreeMap<String, u32>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub floats: BTreeMap<String, f32>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub arrays: BTreeMap<String, TypedArray>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub links: BTreeMap<String, BlockRef>,
}

impl Block {
    pub fn new(block_type: &str) -> Self {
        Self {
            block_type: block_type.to_owned(),
            ..Self::default()
        }
    }

    pub fn with_count(mut self, name: &str, value: u32) -> Self {
        self.counts.insert(name.to_owned(), value);
        self
    }

    pub fn with_array(mut self, name: &str, data: TypedArray) -> Self {
        self.arrays.insert(name.to_owned(), data);
        self
    }

    pub fn with_link(mut self, name: &str, target: BlockRef) -> Self {
        self.links.insert(name.to_owned(), target);
        self
    }
}
