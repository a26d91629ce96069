//! Build-time aggregation of captured module strings.
//!
//! A [`BuildSession`] lives for exactly one build invocation. Module loads
//! running in build-capture mode record their messages and keys into it,
//! the write phase records which modules belong to which entry point, and
//! the emit phase drains it into per-entry-point bundles and the manifest.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::bundle::{BundledStrings, LocalizeKey};

/// Everything captured during a build session.
///
/// Serialized as `nls.metadata.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildManifest {
    /// Module id to its companion key list.
    pub keys: BTreeMap<String, Vec<LocalizeKey>>,
    /// Module id to its message templates.
    pub messages: BTreeMap<String, Vec<String>>,
    /// Entry point to the modules written against it, in write order.
    pub bundles: BTreeMap<String, Vec<String>>,
}

/// Shared accumulator for one build invocation.
#[derive(Debug, Default)]
pub struct BuildSession {
    state: Mutex<BuildManifest>,
}

impl BuildSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, BuildManifest> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record the messages and keys of `module_id`.
    ///
    /// Only the first capture of a module is kept. Capturing identical data
    /// again is a no-op; conflicting data is ignored with a warning.
    pub fn capture(
        &self,
        module_id: &str,
        messages: Vec<String>,
        keys: Vec<LocalizeKey>,
    ) -> Result<()> {
        if messages.len() != keys.len() {
            bail!(
                "Module {} has {} messages but {} keys",
                module_id,
                messages.len(),
                keys.len()
            );
        }

        let mut state = self.state();
        if let Some(existing) = state.messages.get(module_id) {
            if *existing != messages || state.keys.get(module_id) != Some(&keys) {
                warn!(module_id, "conflicting re-capture ignored, keeping first capture");
            }
            return Ok(());
        }

        debug!(module_id, count = messages.len(), "captured module strings");
        state.messages.insert(module_id.to_string(), messages);
        state.keys.insert(module_id.to_string(), keys);
        Ok(())
    }

    /// Append `module_id` to the dependents of `entry_point`.
    ///
    /// Repeated calls append duplicates.
    pub fn record_entry_point_dependency(&self, entry_point: &str, module_id: &str) {
        self.state()
            .bundles
            .entry(entry_point.to_string())
            .or_default()
            .push(module_id.to_string());
    }

    pub fn is_entry_point(&self, module_id: &str) -> bool {
        self.state().bundles.contains_key(module_id)
    }

    /// Captured messages of `module_id`, if it was captured.
    pub fn messages(&self, module_id: &str) -> Option<Vec<String>> {
        self.state().messages.get(module_id).cloned()
    }

    /// Bundle contents for `entry_point`: each dependent's captured messages.
    ///
    /// `None` when nothing was recorded for `entry_point`. Dependents that were
    /// never captured are left out.
    pub fn emit_bundle(&self, entry_point: &str) -> Option<BundledStrings> {
        let state = self.state();
        let Some(dependents) = state.bundles.get(entry_point) else {
            debug!(entry_point, "no recorded dependents, skipping bundle");
            return None;
        };

        let mut data = BundledStrings::new();
        for module_id in dependents {
            match state.messages.get(module_id) {
                Some(messages) => {
                    data.insert(module_id.clone(), messages.clone());
                }
                None => debug!(
                    entry_point,
                    module_id = %module_id,
                    "dependent has no captured strings"
                ),
            }
        }
        Some(data)
    }

    /// Snapshot of everything captured so far.
    pub fn finalize(&self) -> BuildManifest {
        self.state().clone()
    }
}
