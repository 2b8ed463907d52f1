use super::ids::ElementId;
use serde::{Deserialize, Serialize};

/// A comparable field of a template
///
/// The first four are scalar display settings; the rest are the fields that
/// decide whether a template controls a whole group of settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    ViewScale,
    DetailLevel,
    GraphicsStyle,
    Discipline,
    ModelCategoryOverrides,
    AnnotationCategoryOverrides,
    Filters,
    ViewRange,
}

impl FieldId {
    pub const ALL: [FieldId; 8] = [
        FieldId::ViewScale,
        FieldId::DetailLevel,
        FieldId::GraphicsStyle,
        FieldId::Discipline,
        FieldId::ModelCategoryOverrides,
        FieldId::AnnotationCategoryOverrides,
        FieldId::Filters,
        FieldId::ViewRange,
    ];
}

/// Raw value of a field, tagged by how the host stores it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// Reference to another element, displayed by that element's name
    Element(ElementId),
    /// Plain string, displayed as stored
    Text(String),
    /// Any other storage (integers, doubles, enumerations)
    Other {
        /// Locale/unit-aware display string, when the host can produce one
        #[serde(default, skip_serializing_if = "Option::is_none")]
        display: Option<String>,
        /// Raw string form of the stored value
        #[serde(default, skip_serializing_if = "Option::is_none")]
        raw: Option<String>,
    },
}

impl FieldValue {
    pub fn element(id: ElementId) -> Self {
        FieldValue::Element(id)
    }

    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn display(value: impl Into<String>) -> Self {
        FieldValue::Other {
            display: Some(value.into()),
            raw: None,
        }
    }

    pub fn raw(value: impl Into<String>) -> Self {
        FieldValue::Other {
            display: None,
            raw: Some(value.into()),
        }
    }
}
