use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::LanguageMap;

pub const CONFIG_FILE_NAME: &str = ".nlsrc.json";

/// Reserved namespace of the plugin's settings inside a loader config object.
pub const PLUGIN_NAMESPACE: &str = "vs/nls";

/// Settings the NLS plugin reads from the loader configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_languages: Option<LanguageMap>,
    #[serde(default)]
    pub is_build: bool,
}

impl PluginConfig {
    /// Extract the plugin settings from a whole loader config object.
    ///
    /// Settings live under [`PLUGIN_NAMESPACE`]. A top-level `isBuild: true`
    /// also switches on build mode, since loaders set the flag there.
    pub fn from_loader_config(config: &Value) -> Result<Self> {
        let mut plugin_config = match config.get(PLUGIN_NAMESPACE) {
            Some(section) => Self::deserialize(section)
                .with_context(|| format!("Invalid '{}' configuration", PLUGIN_NAMESPACE))?,
            None => Self::default(),
        };

        if config.get("isBuild").and_then(Value::as_bool) == Some(true) {
            plugin_config.is_build = true;
        }

        Ok(plugin_config)
    }

    /// Copy of this config with build mode switched on.
    pub fn building(&self) -> Self {
        Self {
            is_build: true,
            ..self.clone()
        }
    }
}

/// Project configuration for the `nlsbundle` command.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_resource_root")]
    pub resource_root: String,
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
    /// Entry point to the modules bundled with it.
    #[serde(default)]
    pub entry_points: BTreeMap<String, Vec<String>>,
    #[serde(default, rename = "vs/nls")]
    pub nls: PluginConfig,
}

fn default_resource_root() -> String {
    "./nls".to_string()
}

fn default_out_dir() -> String {
    "./out".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resource_root: default_resource_root(),
            out_dir: default_out_dir(),
            entry_points: BTreeMap::new(),
            nls: PluginConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for empty entry point or module ids.
    pub fn validate(&self) -> Result<()> {
        for (entry_point, modules) in &self.entry_points {
            if entry_point.trim().is_empty() {
                bail!("Invalid 'entryPoints': entry point name must not be empty");
            }
            if modules.iter().any(|module| module.trim().is_empty()) {
                bail!(
                    "Invalid 'entryPoints': empty module id under \"{}\"",
                    entry_point
                );
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative paths in the config resolve against.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config_file(path: &Path) -> Result<ConfigLoadResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;

    let base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    Ok(ConfigLoadResult {
        config,
        base_dir,
        from_file: true,
    })
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => load_config_file(&path),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
