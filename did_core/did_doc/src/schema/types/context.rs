use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of a JSON-LD `@context`: either a context URI or an inline context definition.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ContextEntry {
    Uri(String),
    Embedded(Map<String, Value>),
}

impl ContextEntry {
    pub fn as_uri(&self) -> Option<&str> {
        match self {
            ContextEntry::Uri(uri) => Some(uri),
            ContextEntry::Embedded(_) => None,
        }
    }
}

impl From<String> for ContextEntry {
    fn from(uri: String) -> Self {
        ContextEntry::Uri(uri)
    }
}

impl From<&str> for ContextEntry {
    fn from(uri: &str) -> Self {
        ContextEntry::Uri(uri.to_string())
    }
}

impl Display for ContextEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContextEntry::Uri(uri) => write!(f, "{}", uri),
            ContextEntry::Embedded(map) => write!(f, "{}", Value::Object(map.clone())),
        }
    }
}

impl PartialEq<str> for ContextEntry {
    fn eq(&self, other: &str) -> bool {
        self.as_uri() == Some(other)
    }
}

impl PartialEq<&str> for ContextEntry {
    fn eq(&self, other: &&str) -> bool {
        self.as_uri() == Some(*other)
    }
}

impl PartialEq<String> for ContextEntry {
    fn eq(&self, other: &String) -> bool {
        self.as_uri() == Some(other.as_str())
    }
}
