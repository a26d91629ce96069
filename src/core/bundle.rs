use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from module id to that module's ordered message templates.
///
/// This is the payload of an entry-point bundle: one physical resource
/// serving many logical modules.
pub type BundledStrings = BTreeMap<String, Vec<String>>;

/// Message templates for a module, as fetched from a `.nls` resource.
///
/// JSON arrays deserialize to [`MessageBundle::Flat`], JSON objects to
/// [`MessageBundle::Nested`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageBundle {
    /// Templates of a single module, addressed by index.
    Flat(Vec<String>),
    /// Templates of several modules sharing one resource.
    Nested(BundledStrings),
}

impl MessageBundle {
    /// Template slice belonging to `module_id`.
    ///
    /// A flat bundle belongs entirely to whoever loaded it. A nested bundle
    /// without an entry for `module_id` yields an empty slice.
    pub fn slice_for(&self, module_id: &str) -> &[String] {
        match self {
            MessageBundle::Flat(messages) => messages,
            MessageBundle::Nested(modules) => modules
                .get(module_id)
                .map(Vec::as_slice)
                .unwrap_or_default(),
        }
    }
}

/// One entry of a module's companion key list.
///
/// Key lists are positionally aligned with the module's messages: entry `i`
/// names the template at index `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizeKey {
    /// Raw numeric index.
    Index(usize),
    /// Bare symbolic key.
    Key(String),
    /// Symbolic key with translator comments.
    Info {
        key: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        comment: Vec<String>,
    },
}

impl LocalizeKey {
    /// Symbolic key, if this entry has one.
    pub fn key(&self) -> Option<&str> {
        match self {
            LocalizeKey::Index(_) => None,
            LocalizeKey::Key(key) | LocalizeKey::Info { key, .. } => Some(key),
        }
    }
}

/// Symbolic keys of one module inside a host key map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleKeys {
    #[serde(default)]
    pub keys: Vec<String>,
}

/// Contents of a `.nls.keys` resource as consumed by the host string service:
/// module key to its ordered symbolic sub-keys.
pub type HostKeyMap = BTreeMap<String, ModuleKeys>;
