use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use super::super::args::CommonArgs;
use crate::config::{Config, load_config, load_config_file};

/// Loaded project configuration with resolved paths.
pub struct ProjectContext {
    pub config: Config,
    pub resource_root: PathBuf,
    pub base_dir: PathBuf,
}

impl ProjectContext {
    pub fn load(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read current directory")?;
        let loaded = match &common.config {
            Some(path) => load_config_file(&cwd.join(path))?,
            None => load_config(&cwd)?,
        };
        debug!(
            from_file = loaded.from_file,
            base_dir = %loaded.base_dir.display(),
            "loaded configuration"
        );

        let resource_root = match &common.resource_root {
            Some(root) => cwd.join(root),
            None => resolve(&loaded.base_dir, &loaded.config.resource_root),
        };

        Ok(Self {
            config: loaded.config,
            resource_root,
            base_dir: loaded.base_dir,
        })
    }

    /// Output directory: the override relative to the working directory,
    /// otherwise the configured one relative to the config file.
    pub fn out_dir(&self, overridden: Option<&Path>) -> Result<PathBuf> {
        match overridden {
            Some(dir) => Ok(env::current_dir()
                .context("Failed to read current directory")?
                .join(dir)),
            None => Ok(resolve(&self.base_dir, &self.config.out_dir)),
        }
    }
}

fn resolve(base_dir: &Path, path: &str) -> PathBuf {
    base_dir.join(path)
}

/// Single-threaded runtime driving module loads.
pub fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}
