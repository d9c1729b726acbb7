// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! Geometry module - vertex attributes, topology, skin tables and bounds

mod attributes;
mod bounds;
mod skin;
mod topology;

pub use attributes::{Color4, VertexAttributes};
pub use bounds::BoundSphere;
pub use skin::{BoneWeights, VertexWeight};
pub use topology::{Topology, Triangle};
