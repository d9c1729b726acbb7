// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! Skin weight tables

use serde::{Deserialize, Serialize};

/// A single vertex influence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VertexWeight {
    pub index: u16,
    pub weight: f32,
}

impl VertexWeight {
    pub fn new(index: u16, weight: f32) -> Self {
        Self { index, weight }
    }
}

/// One bone's ordered vertex influence list.
///
/// `num_vertices` mirrors the stored count field of the host block and must
/// track the length of `weights` after every compaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoneWeights {
    pub num_vertices: u32,
    pub weights: Vec<VertexWeight>,
}

impl BoneWeights {
    pub fn new(weights: Vec<VertexWeight>) -> Self {
        Self {
            num_vertices: weights.len() as u32,
            weights,
        }
    }
}
