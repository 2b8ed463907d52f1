//! Snapshot Format v1 schema
//!
//! A document exported from the authoring host: referenced elements, the
//! category and filter catalogs, and every view template with the fields it
//! controls.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use viewtmpl_core::model::{
    Category, ElementId, FieldId, FieldValue, NamedFilter, OverrideRecord, PlanRange, ViewKind,
};

pub const SCHEMA_VERSION: u32 = 1;

/// Top-level snapshot structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotV1 {
    /// Schema version (must be 1 for this format)
    pub schema_version: u32,

    pub document: SnapshotDocument,

    /// Elements that template fields may reference by id
    #[serde(default)]
    pub elements: Vec<SnapshotElement>,

    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub filters: Vec<NamedFilter>,

    #[serde(default)]
    pub templates: Vec<SnapshotTemplate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotDocument {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotElement {
    pub id: ElementId,
    pub name: String,
}

/// One view template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotTemplate {
    pub id: ElementId,
    pub name: String,
    pub view_kind: ViewKind,

    /// Defaults to `true` for every kind except schedules
    #[serde(default)]
    pub allows_graphics_overrides: Option<bool>,

    /// Fields the template controls
    #[serde(default)]
    pub controlled: Vec<FieldId>,

    /// Stored values, controlled or not
    #[serde(default)]
    pub values: BTreeMap<FieldId, FieldValue>,

    #[serde(default)]
    pub categories: Vec<SnapshotCategoryEntry>,

    #[serde(default)]
    pub filters: Vec<SnapshotFilterEntry>,

    #[serde(default)]
    pub view_range: Option<PlanRange>,
}

/// Per-template settings of one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotCategoryEntry {
    pub category: ElementId,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub overrides: OverrideRecord,
}

/// A filter applied by a template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotFilterEntry {
    pub filter: ElementId,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub overrides: OverrideRecord,
}
