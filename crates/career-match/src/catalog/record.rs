use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Identifier as it appears in the catalog source; numeric ids are the norm.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CareerId {
    Number(i64),
    Text(String),
}

impl fmt::Display for CareerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CareerId::Number(id) => write!(f, "{id}"),
            CareerId::Text(id) => f.write_str(id),
        }
    }
}

/// One career entry. Everything besides the identity and display fields is
/// kept as an attribute, including keys no scorer knows about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecord {
    pub id: CareerId,
    pub name: String,
    #[serde(default)]
    pub detail: String,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl CareerRecord {
    /// Numeric value of an attribute; absent or non-numeric values yield `None`.
    pub fn attribute(&self, key: &str) -> Option<f64> {
        self.attributes.get(key).and_then(Value::as_f64)
    }

    pub fn attribute_keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }
}
