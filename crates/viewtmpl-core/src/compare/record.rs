use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// One row of comparison output
///
/// Whether the row is a difference is always derived from the two values,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiffRecord {
    pub group_name: String,
    pub parameter_name: String,
    pub value1: String,
    pub value2: String,
}

impl DiffRecord {
    pub fn new(
        group_name: impl Into<String>,
        parameter_name: impl Into<String>,
        value1: impl Into<String>,
        value2: impl Into<String>,
    ) -> Self {
        Self {
            group_name: group_name.into(),
            parameter_name: parameter_name.into(),
            value1: value1.into(),
            value2: value2.into(),
        }
    }

    pub fn is_different(&self) -> bool {
        self.value1 != self.value2
    }
}

// Serialized output carries the derived flag for downstream consumers;
// deserialization ignores it and recomputes.
impl Serialize for DiffRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DiffRecord", 5)?;
        state.serialize_field("group_name", &self.group_name)?;
        state.serialize_field("parameter_name", &self.parameter_name)?;
        state.serialize_field("value1", &self.value1)?;
        state.serialize_field("value2", &self.value2)?;
        state.serialize_field("is_different", &self.is_different())?;
        state.end()
    }
}
