//! Resource loaders: the boundary to whatever actually fetches `.nls` resources.
//!
//! A loader turns a resource name such as `vs/editor/editor.nls.de` into a JSON
//! value. Fetch failures are the loader's concern and surface as errors.

use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use tracing::debug;

/// Asynchronous fetch of a named resource.
pub trait ResourceLoader: Send + Sync {
    fn fetch(&self, resource: &str) -> impl Future<Output = Result<Value>> + Send;
}

/// Loads resources from JSON files below a root directory.
///
/// Resource `vs/editor/editor.nls.de` maps to `<root>/vs/editor/editor.nls.de.json`.
#[derive(Debug, Clone)]
pub struct FsLoader {
    root: PathBuf,
}

impl FsLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resource_path(&self, resource: &str) -> PathBuf {
        self.root.join(format!("{}.json", resource))
    }
}

impl ResourceLoader for FsLoader {
    async fn fetch(&self, resource: &str) -> Result<Value> {
        let path = self.resource_path(resource);
        debug!(resource, path = %path.display(), "fetching resource");

        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| {
                format!("Failed to read resource {}: {}", resource, path.display())
            })?;
        serde_json::from_str(&content).with_context(|| {
            format!("Failed to parse resource {}: {}", resource, path.display())
        })
    }
}

/// In-memory loader, handy for embedding and for tests.
///
/// Records every requested resource name in request order.
#[derive(Debug, Default)]
pub struct MemoryLoader {
    resources: HashMap<String, Value>,
    requests: Mutex<Vec<String>>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, resource: impl Into<String>, value: Value) -> Self {
        self.resources.insert(resource.into(), value);
        self
    }

    /// Resource names requested so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ResourceLoader for MemoryLoader {
    async fn fetch(&self, resource: &str) -> Result<Value> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(resource.to_string());

        self.resources
            .get(resource)
            .cloned()
            .ok_or_else(|| anyhow!("Resource not found: {}", resource))
    }
}
