//! Label overrides from TOML
//!
//! A labels file is a flat table of `key = "text"` pairs named after the
//! [`Labels`] fields. Keys left out keep the base language's wording.
//!
//! ```toml
//! group_general = "Basics"
//! not_controlled = "-"
//! ```

use crate::errors::{io_error, labels_error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use viewtmpl_core::{Labels, Language};

/// Load a labels file on top of `base`
///
/// # Errors
/// * `Io` - the file cannot be read
/// * `InvalidInput` - not a flat string table, or a key names no label
pub fn load_labels_file(path: &Path, base: Language) -> Result<Labels> {
    let content = fs::read_to_string(path).map_err(|e| io_error("labels_read", path, e))?;
    parse_labels_str(&content, base)
}

/// Apply TOML label overrides to the `base` vocabulary
///
/// # Errors
/// * `InvalidInput` - not TOML, or a key that names no label
pub fn parse_labels_str(content: &str, base: Language) -> Result<Labels> {
    let overrides: BTreeMap<String, String> = toml::from_str(content)
        .map_err(|e| labels_error(&format!("TOML parse error: {}", e)))?;

    let mut value = serde_json::to_value(base.labels())
        .map_err(|e| labels_error(&format!("Failed to encode base labels: {}", e)))?;
    let table = value
        .as_object_mut()
        .ok_or_else(|| labels_error("Base labels are not a table"))?;

    for (key, text) in overrides {
        match table.get_mut(&key) {
            Some(slot) => *slot = serde_json::Value::String(text),
            None => return Err(labels_error(&format!("Unknown label key: {}", key))),
        }
    }

    serde_json::from_value(value)
        .map_err(|e| labels_error(&format!("Invalid labels: {}", e)))
}
