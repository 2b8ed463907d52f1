//! Snapshot parser with validation
//!
//! Parses YAML (or JSON) and validates schema version, id uniqueness and
//! category references.

use crate::errors::{io_error, snapshot_validation, unsupported_schema, Result, SnapshotIssue};
use crate::snapshot::format_v1::{SnapshotV1, SCHEMA_VERSION};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use viewtmpl_core::errors::TemplateError;

/// Parse a snapshot file from a path
///
/// # Errors
/// * `Io` - the file cannot be read
/// * see [`parse_snapshot_str`]
pub fn parse_snapshot_file(path: &Path) -> Result<SnapshotV1> {
    let content = fs::read_to_string(path).map_err(|e| io_error("snapshot_read", path, e))?;
    parse_snapshot_str(&content)
}

/// Parse a snapshot from a string
///
/// # Errors
/// * `InvalidSnapshot` - malformed text, duplicate ids or unknown category references
/// * `UnsupportedSchema` - `schema_version` is not 1
pub fn parse_snapshot_str(content: &str) -> Result<SnapshotV1> {
    let snapshot: SnapshotV1 = serde_yaml::from_str(content)
        .map_err(|e| snapshot_validation(&format!("YAML parse error: {}", e)))?;

    validate_snapshot(&snapshot)?;

    Ok(snapshot)
}

/// Validate a parsed snapshot
///
/// Filters applied by a template but missing from the catalog are accepted;
/// the comparison drops them.
fn validate_snapshot(snapshot: &SnapshotV1) -> Result<()> {
    if snapshot.schema_version != SCHEMA_VERSION {
        return Err(unsupported_schema(snapshot.schema_version, SCHEMA_VERSION));
    }

    let mut element_ids = HashSet::new();
    for element in &snapshot.elements {
        if !element_ids.insert(element.id) {
            return Err(SnapshotIssue::DuplicateElementId {
                id: element.id.value(),
            }
            .into());
        }
    }

    let mut category_ids = HashSet::new();
    for category in &snapshot.categories {
        if !category_ids.insert(category.id) {
            return Err(SnapshotIssue::DuplicateCategoryId {
                id: category.id.value(),
            }
            .into());
        }
    }

    let mut template_ids = HashSet::new();
    for template in &snapshot.templates {
        if !template_ids.insert(template.id) {
            return Err(TemplateError::DuplicateTemplateId {
                id: template.id.value(),
            }
            .into());
        }

        let mut seen = HashSet::new();
        for entry in &template.categories {
            if !category_ids.contains(&entry.category) {
                return Err(TemplateError::UnknownCategory {
                    template: template.name.clone(),
                    category_id: entry.category.value(),
                }
                .into());
            }
            if !seen.insert(entry.category) {
                return Err(SnapshotIssue::RepeatedCategoryEntry {
                    template: template.name.clone(),
                    category_id: entry.category.value(),
                }
                .into());
            }
        }
    }

    Ok(())
}
