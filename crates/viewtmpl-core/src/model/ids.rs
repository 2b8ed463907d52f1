use serde::{Deserialize, Serialize};

/// Identifier of an element in the host document
///
/// Negative values never name a real element; [`ElementId::INVALID`] is the
/// host's explicit "no element" marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub i64);

impl ElementId {
    pub const INVALID: ElementId = ElementId(-1);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }

    pub fn is_invalid(self) -> bool {
        self == Self::INVALID
    }
}

impl From<i64> for ElementId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
