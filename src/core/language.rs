//! Language selection for module resources.
//!
//! A [`LanguageMap`] maps module ids (or the `*` wildcard) to language tags.
//! The resolved tag decides which physical resource a module's strings are
//! fetched from: `<module>.nls` or `<module>.nls.<tag>`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reserved tag meaning "the untranslated default resource".
pub const DEFAULT_TAG: &str = "i-default";

/// Key in a [`LanguageMap`] that applies to every module without its own entry.
pub const WILDCARD: &str = "*";

/// Mapping from module id (or [`WILDCARD`]) to language tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageMap(BTreeMap<String, String>);

impl LanguageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map every module to `tag`.
    pub fn wildcard(tag: impl Into<String>) -> Self {
        let mut map = Self::new();
        map.insert(WILDCARD, tag);
        map
    }

    pub fn insert(&mut self, module_id: impl Into<String>, tag: impl Into<String>) {
        self.0.insert(module_id.into(), tag.into());
    }

    /// Language for `module_id`: exact entry first, then the wildcard.
    ///
    /// Empty tags count as absent. An empty `module_id` resolves to `None`.
    pub fn language_for(&self, module_id: &str) -> Option<&str> {
        if module_id.is_empty() {
            return None;
        }
        self.non_empty(module_id)
            .or_else(|| self.non_empty(WILDCARD))
    }

    fn non_empty(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .filter(|tag| !tag.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LanguageMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Resolve the effective language tag for `module_id`.
///
/// An absent map or an empty module id resolves to `None`, as does a map with
/// neither an exact nor a wildcard entry.
pub fn resolve_language<'a>(map: Option<&'a LanguageMap>, module_id: &str) -> Option<&'a str> {
    map.and_then(|map| map.language_for(module_id))
}

/// Resource suffix for a resolved language: `.nls` or `.nls.<tag>`.
///
/// [`DEFAULT_TAG`] and `None` both select the untagged resource.
pub fn resource_suffix(language: Option<&str>) -> String {
    match language {
        Some(tag) if tag != DEFAULT_TAG => format!(".nls.{}", tag),
        _ => ".nls".to_string(),
    }
}

/// Name of the untagged messages resource for `module_id`.
pub fn messages_resource(module_id: &str) -> String {
    format!("{}.nls", module_id)
}

/// Name of the companion key resource for `module_id`.
pub fn keys_resource(module_id: &str) -> String {
    format!("{}.nls.keys", module_id)
}
