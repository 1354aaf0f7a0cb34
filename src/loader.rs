//! Overlay Loader
//!
//! Loads additional attribute entries from JSON overlay files.

use crate::attribute::{AttributeCategory, AttributeEntry};
use crate::error::{ResolverError, Result};
use crate::table::{AttributeTable, BUILTIN_TABLE};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// JSON representation of a single overlay entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeJson {
    pub short_name: String,
    pub long_name: String,
    /// "universal", "common", "custom" or "unspecified". Defaults to "custom".
    #[serde(default)]
    pub category: Option<String>,
}

/// Overlay file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayJson {
    pub attributes: Vec<AttributeJson>,
}

/// Parse overlay entries from JSON
pub fn load_from_json(json_str: &str) -> Result<Vec<AttributeEntry>> {
    let overlay: OverlayJson = serde_json::from_str(json_str)
        .map_err(|e| ResolverError::Overlay(format!("Failed to parse overlay JSON: {}", e)))?;

    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(overlay.attributes.len());

    for attribute in overlay.attributes {
        if attribute.short_name.is_empty() {
            return Err(ResolverError::Overlay(format!(
                "Empty shortName for longName '{}'",
                attribute.long_name
            )));
        }
        if attribute.long_name.is_empty() {
            return Err(ResolverError::Overlay(format!(
                "Empty longName for shortName '{}'",
                attribute.short_name
            )));
        }
        if !seen.insert(attribute.short_name.clone()) {
            return Err(ResolverError::Overlay(format!(
                "Duplicate shortName in overlay: {}",
                attribute.short_name
            )));
        }

        let category = match attribute.category.as_deref() {
            Some(tag) => tag.parse::<AttributeCategory>()?,
            None => AttributeCategory::default(),
        };

        entries.push(AttributeEntry::new(
            attribute.short_name,
            attribute.long_name,
            category,
        ));
    }

    debug!("Parsed {} overlay entries", entries.len());
    Ok(entries)
}

/// Load overlay entries from file
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Vec<AttributeEntry>> {
    let path = path.as_ref();
    debug!("Loading overlay from {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    load_from_json(&contents)
}

/// Built-in table, extended by the overlay at `overlay_path` if given
pub fn build_table(overlay_path: Option<&Path>) -> Result<AttributeTable> {
    match overlay_path {
        Some(path) => {
            let entries = load_from_file(path)?;
            Ok(BUILTIN_TABLE.with_overlay(entries))
        }
        None => Ok(BUILTIN_TABLE.clone()),
    }
}
