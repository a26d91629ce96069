//! Host-resource mode: strings are owned by a native lookup service.

use std::fmt;
use std::sync::Arc;

use super::bundle::HostKeyMap;

/// Native string-lookup capability offered by some hosts.
///
/// `key` is `<moduleKey>_<subKey>`; `args` are the caller's positional
/// arguments, which the host formats itself.
pub trait HostStringService: Send + Sync {
    fn get_string(&self, key: &str, args: &[&str]) -> String;
}

/// Localizer that routes `(moduleKey, index)` through a fetched key map to the host.
#[derive(Clone)]
pub struct HostLocalizer {
    keys: HostKeyMap,
    service: Arc<dyn HostStringService>,
}

impl HostLocalizer {
    pub fn new(keys: HostKeyMap, service: Arc<dyn HostStringService>) -> Self {
        Self { keys, service }
    }

    /// Look up string `index` of `module_key`.
    ///
    /// Unknown module keys and indices produce diagnostic text instead of an error.
    pub fn localize(&self, module_key: &str, index: usize, args: &[&str]) -> String {
        let Some(module) = self.keys.get(module_key) else {
            return format!("NLS error: unknown key {}", module_key);
        };
        let Some(sub_key) = module.keys.get(index) else {
            return format!("NLS error unknown index {}", index);
        };
        let key = format!("{}_{}", module_key, sub_key);
        self.service.get_string(&key, args)
    }

    pub fn keys(&self) -> &HostKeyMap {
        &self.keys
    }
}

impl fmt::Debug for HostLocalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostLocalizer")
            .field("keys", &self.keys)
            .finish_non_exhaustive()
    }
}
