// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! Spells module - named operations over the block model

mod bounds;
mod edit;
mod mesh;

pub use bounds::{update_all_bounds, update_bounds};
pub use edit::{flip_faces, flip_uv, prune_redundant_triangles, FlipMode};
pub use mesh::{
    export_snapshot, import_snapshot, remove_duplicate_vertices, remove_unused_vertices,
    RemovalReport,
};

use crate::document::{find_mesh_data, find_shape, BlockModel, BlockRef};
use crate::error::SpellError;

/// What a cast did, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub message: String,
    pub warnings: Vec<String>,
}

impl Outcome {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            warnings: Vec::new(),
        }
    }

    pub fn warn(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

/// A named operation over the block model.
///
/// Spells are plain predicate/apply function pairs over the capability
/// interface; the registry is a table, not a type hierarchy.
pub struct Spell {
    pub name: &'static str,
    pub page: &'static str,
    pub is_applicable: fn(&dyn BlockModel, BlockRef) -> bool,
    pub cast: fn(&mut dyn BlockModel, BlockRef) -> Result<Outcome, SpellError>,
}

fn applicable_shape(model: &dyn BlockModel, block: BlockRef) -> bool {
    find_shape(model, block).is_some()
}

fn applicable_mesh_data(model: &dyn BlockModel, block: BlockRef) -> bool {
    find_mesh_data(model, block).is_some()
}

fn removal_outcome(report: RemovalReport) -> Outcome {
    let outcome = Outcome::new(format!(
        "removed {} vertices, {} remain",
        report.removed, report.new_vertex_count
    ));
    if report.partition_removed {
        outcome.warn("the skin partition was removed, please regenerate it")
    } else {
        outcome
    }
}

/// Every registered spell, grouped by page.
pub fn registry() -> Vec<Spell> {
    vec![
        Spell {
            name: "remove_unused_vertices",
            page: "mesh",
            is_applicable: applicable_shape,
            cast: |model, block| remove_unused_vertices(model, block).map(removal_outcome),
        },
        Spell {
            name: "remove_duplicate_vertices",
            page: "mesh",
            is_applicable: applicable_shape,
            cast: |model, block| remove_duplicate_vertices(model, block).map(removal_outcome),
        },
        Spell {
            name: "prune_triangles",
            page: "mesh",
            is_applicable: applicable_mesh_data,
            cast: |model, block| {
                prune_redundant_triangles(model, block)
                    .map(|removed| Outcome::new(format!("removed {removed} triangles")))
            },
        },
        Spell {
            name: "flip_faces",
            page: "mesh",
            is_applicable: applicable_mesh_data,
            cast: |model, block| {
                flip_faces(model, block)
                    .map(|flipped| Outcome::new(format!("flipped {flipped} faces")))
            },
        },
        Spell {
            name: "mirror_uv_u",
            page: "mesh",
            is_applicable: applicable_mesh_data,
            cast: |model, block| {
                flip_uv(model, block, FlipMode::MirrorU)
                    .map(|n| Outcome::new(format!("mirrored U on {n} coordinates")))
            },
        },
        Spell {
            name: "mirror_uv_v",
            page: "mesh",
            is_applicable: applicable_mesh_data,
            cast: |model, block| {
                flip_uv(model, block, FlipMode::MirrorV)
                    .map(|n| Outcome::new(format!("mirrored V on {n} coordinates")))
            },
        },
        Spell {
            name: "swap_uv",
            page: "mesh",
            is_applicable: applicable_mesh_data,
            cast: |model, block| {
                flip_uv(model, block, FlipMode::Swap)
                    .map(|n| Outcome::new(format!("swapped U and V on {n} coordinates")))
            },
        },
        Spell {
            name: "update_bounds",
            page: "mesh",
            is_applicable: applicable_mesh_data,
            cast: |model, block| {
                update_bounds(model, block).map(|sphere| {
                    Outcome::new(format!(
                        "center ({:.4}, {:.4}, {:.4}), radius {:.4}",
                        sphere.center.x, sphere.center.y, sphere.center.z, sphere.radius
                    ))
                })
            },
        },
        Spell {
            name: "update_all_bounds",
            page: "batch",
            is_applicable: |_, _| true,
            cast: |model, _| {
                let updated = update_all_bounds(model);
                Ok(Outcome::new(format!("updated bounds on {updated} blocks")))
            },
        },
    ]
}

/// Cast a registered spell by name, checking its predicate first.
pub fn cast_by_name(
    model: &mut dyn BlockModel,
    name: &str,
    block: BlockRef,
) -> Result<Outcome, SpellError> {
    let spell = registry()
        .into_iter()
        .find(|spell| spell.name == name)
        .ok_or_else(|| SpellError::UnknownSpell(name.to_owned()))?;

    if !(spell.is_applicable)(model, block) {
        return Err(SpellError::NotApplicable { spell: spell.name });
    }

    (spell.cast)(model, block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{block_types, Block, Document};

    #[test]
    fn test_registry_names_are_unique() {
        let spells = registry();
        for (i, spell) in spells.iter().enumerate() {
            assert!(
                spells[i + 1..].iter().all(|other| other.name != spell.name),
                "duplicate spell name {}",
                spell.name
            );
        }
    }

    #[test]
    fn test_cast_by_name_rejects_unknown_and_inapplicable() {
        let mut doc = Document::new();
        let partition = doc.insert(Block::new(block_types::SKIN_PARTITION));

        assert_eq!(
            cast_by_name(&mut doc, "summon_mesh", partition),
            Err(SpellError::UnknownSpell("summon_mesh".into()))
        );
        assert_eq!(
            cast_by_name(&mut doc, "remove_unused_vertices", partition),
            Err(SpellError::NotApplicable {
                spell: "remove_unused_vertices"
            })
        );
    }
}
