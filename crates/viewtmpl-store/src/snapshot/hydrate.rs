//! Hydration layer - builds the in-memory host model from a snapshot

use crate::errors::{io_error, Result};
use crate::snapshot::digest::snapshot_digest;
use crate::snapshot::format_v1::{SnapshotTemplate, SnapshotV1};
use crate::snapshot::parser::parse_snapshot_str;
use std::fs;
use std::path::Path;
use std::time::Instant;
use viewtmpl_core::{log_op_end, log_op_error, log_op_start};
use viewtmpl_core::{MemoryDocument, MemoryTemplate};

/// A hydrated document with the digest of the text it came from
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub document: MemoryDocument,
    pub digest: String,
}

/// Read, parse, validate and hydrate a snapshot file
///
/// # Errors
/// * `Io` - the file cannot be read
/// * `InvalidSnapshot` / `UnsupportedSchema` - see [`parse_snapshot_str`]
pub fn load_document(path: &Path) -> Result<LoadedDocument> {
    let start = Instant::now();
    log_op_start!("load_document", path = %path.display());

    let loaded = fs::read_to_string(path)
        .map_err(|e| io_error("snapshot_read", path, e))
        .and_then(|content| {
            let snapshot = parse_snapshot_str(&content)?;
            let document = hydrate_document(&snapshot)?;
            Ok(LoadedDocument {
                document,
                digest: snapshot_digest(&content),
            })
        });

    let duration_ms = start.elapsed().as_millis() as u64;
    match &loaded {
        Ok(doc) => {
            log_op_end!(
                "load_document",
                duration_ms = duration_ms,
                template_count = doc.document.templates().len() as u64,
                digest = doc.digest.as_str()
            );
        }
        Err(err) => {
            log_op_error!("load_document", err.clone(), duration_ms = duration_ms);
        }
    }
    loaded
}

/// Build a [`MemoryDocument`] from a validated snapshot
///
/// # Errors
/// * `InvalidSnapshot` - two templates share an id
pub fn hydrate_document(snapshot: &SnapshotV1) -> Result<MemoryDocument> {
    let mut doc = MemoryDocument::new(snapshot.document.name.clone());

    for element in &snapshot.elements {
        doc.add_element(element.id, element.name.clone());
    }
    for category in &snapshot.categories {
        doc.add_category(category.clone());
    }
    for filter in &snapshot.filters {
        doc.add_filter(filter.clone());
    }
    for template in &snapshot.templates {
        doc.add_template(hydrate_template(template))?;
    }

    Ok(doc)
}

fn hydrate_template(source: &SnapshotTemplate) -> MemoryTemplate {
    let mut template = MemoryTemplate::new(source.id, source.name.clone(), source.view_kind);
    if let Some(allowed) = source.allows_graphics_overrides {
        template = template.allow_graphics_overrides(allowed);
    }
    for field in &source.controlled {
        template = template.control(*field);
    }
    for (field, value) in &source.values {
        template = template.with_value(*field, value.clone());
    }
    for entry in &source.categories {
        template = template.with_category_overrides(entry.category, entry.overrides.clone());
        if entry.hidden {
            template = template.hide_category(entry.category);
        }
    }
    for entry in &source.filters {
        template = template.apply_filter(entry.filter, entry.overrides.clone(), entry.hidden);
    }
    if let Some(range) = source.view_range {
        template = template.with_plan_range(range);
    }
    template
}
