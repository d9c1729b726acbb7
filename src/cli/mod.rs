// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! CLI subsystem for Meshspell

mod reporter;

pub use reporter::Reporter;

use crate::document::Document;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a document from its JSON form.
pub fn load_document(path: &Path) -> Result<Document> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Document::from_json(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Save a document back as JSON.
pub fn save_document(document: &Document, path: &Path) -> Result<()> {
    let text = document.to_json().context("Failed to serialize document")?;
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}
