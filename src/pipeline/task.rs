//! Core task descriptor type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Dependencies of a task: a single key or a list of keys.
///
/// Serialized untagged, so one dependency is written as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Uses {
    /// Exactly one upstream task.
    One(String),
    /// Several upstream tasks, in declaration order.
    Many(Vec<String>),
}

impl Uses {
    /// Iterates the referenced task keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        let keys: &[String] = match self {
            Self::One(key) => std::slice::from_ref(key),
            Self::Many(keys) => keys,
        };
        keys.iter().map(String::as_str)
    }
}

impl From<&str> for Uses {
    fn from(key: &str) -> Self {
        Self::One(key.to_string())
    }
}

impl From<String> for Uses {
    fn from(key: String) -> Self {
        Self::One(key)
    }
}

impl From<Vec<String>> for Uses {
    fn from(keys: Vec<String>) -> Self {
        Self::Many(keys)
    }
}

/// One step of the generated CI pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    /// Unique task identifier.
    pub key: String,
    /// Tasks that must complete before this one runs.
    #[serde(rename = "use")]
    pub uses: Uses,
    /// Shell script executed by the CI runner.
    pub run: String,
    /// Environment bindings for the script, omitted when empty.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}
