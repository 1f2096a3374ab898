use serde::{Deserialize, Serialize};

/// A single property of a mapping: its field name and ElasticSearch type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

impl FieldRecord {
    /// Creates a new `FieldRecord`.
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
        }
    }
}

impl From<(&str, &str)> for FieldRecord {
    fn from((name, field_type): (&str, &str)) -> Self {
        Self::new(name, field_type)
    }
}
