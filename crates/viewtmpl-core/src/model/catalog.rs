use super::ids::ElementId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Model,
    Annotation,
}

/// An entry of the document's category catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: ElementId,
    pub name: String,
    pub kind: CategoryKind,
    /// Only categories that accept bound parameters take part in comparison
    #[serde(default = "default_true")]
    pub allows_bound_parameters: bool,
}

fn default_true() -> bool {
    true
}

impl Category {
    pub fn new(id: ElementId, name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            allows_bound_parameters: true,
        }
    }

    pub fn without_bound_parameters(mut self) -> Self {
        self.allows_bound_parameters = false;
        self
    }
}

/// A rule-based filter defined once in the document and applied per template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedFilter {
    pub id: ElementId,
    pub name: String,
}

impl NamedFilter {
    pub fn new(id: ElementId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
