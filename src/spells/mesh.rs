// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! Vertex removal and snapshot spells
//!
//! Every operation here reads owned working copies of the block arrays,
//! validates, computes the full result, and only then writes back, so a
//! failure can never leave the document with arrays at inconsistent lengths.
//! Deleting a stale skin partition is the last step of a commit, after every
//! numeric rewrite has landed.

use crate::compact::{compact_unused, find_duplicates, Compaction, IndexMap};
use crate::document::{block_types, fields, find_mesh_data, find_shape, BlockModel, BlockRef, TypedArray};
use crate::error::SpellError;
use crate::geometry::{BoneWeights, Topology, VertexAttributes};
use crate::snapshot;
use crate::transplant::{transplant, TransplantReport};

/// What a removal spell did to the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalReport {
    pub removed: usize,
    pub new_vertex_count: usize,
    /// True when an associated skin partition was deleted and must be
    /// regenerated. Advisory, not an error.
    pub partition_removed: bool,
}

/// Owned working copy of one mesh-data block's arrays.
pub(crate) struct MeshBuffers {
    pub attributes: VertexAttributes,
    pub topology: Topology,
}

impl MeshBuffers {
    pub fn read(model: &dyn BlockModel, data: BlockRef) -> Result<Self, SpellError> {
        let positions = match model.array(data, fields::VERTICES) {
            Some(TypedArray::Vector3(v)) => v.clone(),
            _ => {
                return Err(SpellError::MissingArray {
                    name: fields::VERTICES,
                })
            }
        };

        let normals = match model.array(data, fields::NORMALS) {
            Some(TypedArray::Normal(v)) => v.clone(),
            _ => Vec::new(),
        };
        let colors = match model.array(data, fields::COLORS) {
            Some(TypedArray::Color4(v)) => v.clone(),
            _ => Vec::new(),
        };
        let uv_sets = match model.array(data, fields::UV_SETS) {
            Some(TypedArray::Vector2List(v)) => v.clone(),
            _ => Vec::new(),
        };
        let triangles = match model.array(data, fields::TRIANGLES) {
            Some(TypedArray::Triangle(v)) => v.clone(),
            _ => Vec::new(),
        };
        let strips = match model.array(data, fields::STRIPS) {
            Some(TypedArray::IndexList(v)) => v.clone(),
            _ => Vec::new(),
        };

        // A missing count field reads as zero and fails the cross-check.
        let declared_count = model.count(data, fields::NUM_VERTICES).unwrap_or(0);

        Ok(Self {
            attributes: VertexAttributes {
                positions,
                normals,
                colors,
                uv_sets,
                declared_count,
            },
            topology: Topology { triangles, strips },
        })
    }

    /// Write every array back together with the refreshed counts.
    pub fn write(&self, model: &mut dyn BlockModel, data: BlockRef) {
        model.set_count(
            data,
            fields::NUM_VERTICES,
            self.attributes.vertex_count() as u32,
        );
        model.set_array(
            data,
            fields::VERTICES,
            TypedArray::Vector3(self.attributes.positions.clone()),
        );

        if self.attributes.has_normals() {
            model.set_array(
                data,
                fields::NORMALS,
                TypedArray::Normal(self.attributes.normals.clone()),
            );
        }
        if self.attributes.has_colors() {
            model.set_array(
                data,
                fields::COLORS,
                TypedArray::Color4(self.attributes.colors.clone()),
            );
        }
        if !self.attributes.uv_sets.is_empty() {
            model.set_array(
                data,
                fields::UV_SETS,
                TypedArray::Vector2List(self.attributes.uv_sets.clone()),
            );
        }

        if !self.topology.triangles.is_empty() {
            model.set_count(
                data,
                fields::NUM_TRIANGLES,
                self.topology.triangles.len() as u32,
            );
            model.set_array(
                data,
                fields::TRIANGLES,
                TypedArray::Triangle(self.topology.triangles.clone()),
            );
        }
        if !self.topology.strips.is_empty() {
            model.set_array(
                data,
                fields::STRIPS,
                TypedArray::IndexList(self.topology.strips.clone()),
            );
        }
    }
}

/// Remove every vertex no triangle corner or strip element references.
///
/// Accepts a shape or its mesh-data block. Compacts all parallel attribute
/// arrays, rewrites the topology, re-syncs skin weights and drops any stale
/// skin partition.
pub fn remove_unused_vertices(
    model: &mut dyn BlockModel,
    block: BlockRef,
) -> Result<RemovalReport, SpellError> {
    let shape = find_shape(model, block).ok_or(SpellError::NotApplicable {
        spell: "remove_unused_vertices",
    })?;
    let data = model
        .resolve_link(shape, fields::DATA)
        .ok_or(SpellError::NotApplicable {
            spell: "remove_unused_vertices",
        })?;

    let buffers = MeshBuffers::read(model, data)?;
    commit_compaction(model, shape, data, &buffers)
}

/// Collapse duplicated vertices onto their lowest-indexed representative,
/// then garbage-collect them through the unused-vertex pipeline.
///
/// Two vertices are duplicates when their whole attribute tuple is exactly
/// equal. Topology references are aliased at the representative first, which
/// leaves the duplicates unreferenced; the shared removal pipeline then drops
/// them (and anything else unused).
pub fn remove_duplicate_vertices(
    model: &mut dyn BlockModel,
    block: BlockRef,
) -> Result<RemovalReport, SpellError> {
    let shape = find_shape(model, block).ok_or(SpellError::NotApplicable {
        spell: "remove_duplicate_vertices",
    })?;
    let data = model
        .resolve_link(shape, fields::DATA)
        .ok_or(SpellError::NotApplicable {
            spell: "remove_duplicate_vertices",
        })?;

    let mut buffers = MeshBuffers::read(model, data)?;
    buffers.attributes.validate()?;
    buffers
        .topology
        .validate(buffers.attributes.vertex_count())?;

    let duplicates = find_duplicates(&buffers.attributes);
    duplicates.alias_topology(&mut buffers.topology);

    commit_compaction(model, shape, data, &buffers)
}

/// Shared removal path: compact away unused vertices and commit.
fn commit_compaction(
    model: &mut dyn BlockModel,
    shape: BlockRef,
    data: BlockRef,
    buffers: &MeshBuffers,
) -> Result<RemovalReport, SpellError> {
    let compaction = compact_unused(&buffers.attributes, &buffers.topology)?;
    let removed = compaction.removed_count();
    let new_vertex_count = compaction.new_vertex_count();

    if removed == 0 {
        return Ok(RemovalReport {
            removed: 0,
            new_vertex_count,
            partition_removed: false,
        });
    }

    let Compaction {
        attributes,
        topology,
        map,
    } = compaction;
    MeshBuffers {
        attributes,
        topology,
    }
    .write(model, data);

    let partition_removed = synchronize_skin(model, shape, &map);

    Ok(RemovalReport {
        removed,
        new_vertex_count,
        partition_removed,
    })
}

/// Re-sync skin weights through the renumbering and drop the partition.
///
/// The partition encodes vertex-index sets opaquely, so it is never repaired
/// in place; it is deleted and the caller warned to regenerate it. Returns
/// whether a partition was deleted.
fn synchronize_skin(model: &mut dyn BlockModel, shape: BlockRef, map: &IndexMap) -> bool {
    let Some(skin) = model.resolve_link(shape, fields::SKIN) else {
        return false;
    };
    if model.block_type(skin) != Some(block_types::SKIN_INSTANCE) {
        return false;
    }

    let skin_data = model
        .resolve_link(skin, fields::DATA)
        .filter(|&d| model.block_type(d) == Some(block_types::SKIN_DATA));

    if let Some(data) = skin_data {
        let synced: Option<Vec<BoneWeights>> = match model.array(data, fields::BONES) {
            Some(TypedArray::BoneList(bones)) => {
                Some(bones.iter().map(|bone| map.remap_bone(bone)).collect())
            }
            _ => None,
        };
        if let Some(bones) = synced {
            model.set_array(data, fields::BONES, TypedArray::BoneList(bones));
        }
    }

    // The partition may hang off the instance or the skin data.
    let partition = model
        .resolve_link(skin, fields::PARTITION)
        .or_else(|| skin_data.and_then(|d| model.resolve_link(d, fields::PARTITION)))
        .filter(|&p| model.block_type(p) == Some(block_types::SKIN_PARTITION));

    match partition {
        Some(p) => {
            model.remove_block(p);
            true
        }
        None => false,
    }
}

/// Serialize one snapshot record per vertex of a mesh block.
pub fn export_snapshot(model: &dyn BlockModel, block: BlockRef) -> Result<String, SpellError> {
    let data = find_mesh_data(model, block).ok_or(SpellError::NotApplicable {
        spell: "export_snapshot",
    })?;

    let buffers = MeshBuffers::read(model, data)?;
    buffers.attributes.validate()?;

    let records = snapshot::snapshot_records(&buffers.attributes)?;
    Ok(snapshot::to_text(&records))
}

/// Transplant positions from a snapshot onto a mesh block by UV proximity.
///
/// The snapshot must hold exactly one record per current vertex. Unmatched
/// vertices keep their position and are listed in the report.
pub fn import_snapshot(
    model: &mut dyn BlockModel,
    block: BlockRef,
    text: &str,
    tolerance: f32,
) -> Result<TransplantReport, SpellError> {
    let data = find_mesh_data(model, block).ok_or(SpellError::NotApplicable {
        spell: "import_snapshot",
    })?;

    let buffers = MeshBuffers::read(model, data)?;
    buffers.attributes.validate()?;

    let records = snapshot::from_text(text)?;
    let uv = buffers
        .attributes
        .uv_sets
        .first()
        .ok_or(SpellError::MissingArray { name: "uv_sets" })?;

    let mut positions = buffers.attributes.positions.clone();
    let report = transplant(&mut positions, uv, &records, tolerance)?;

    model.set_array(data, fields::VERTICES, TypedArray::Vector3(positions));
    Ok(report)
}
