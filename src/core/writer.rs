//! Sinks for build output.
//!
//! The write phase hands synthetic module definitions to a [`BuildWriter`]
//! and whole artifacts to a [`FileWriter`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Receives synthetic module definitions while modules are written against an entry point.
pub trait BuildWriter {
    /// Entry point the module currently being written belongs to.
    fn entry_point(&self) -> &str;

    /// Emit a module named `name` with JavaScript `source`.
    fn as_module(&mut self, name: &str, source: &str) -> Result<()>;
}

/// Receives finished build artifacts.
pub trait FileWriter {
    fn write_file(&mut self, file_name: &str, contents: &str) -> Result<()>;
}

/// A module definition produced during the write phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticModule {
    pub name: String,
    pub source: String,
}

/// Collects the synthetic modules written against one entry point.
#[derive(Debug, Clone)]
pub struct ModuleCollector {
    entry_point: String,
    modules: Vec<SyntheticModule>,
}

impl ModuleCollector {
    pub fn new(entry_point: impl Into<String>) -> Self {
        Self {
            entry_point: entry_point.into(),
            modules: Vec::new(),
        }
    }

    pub fn modules(&self) -> &[SyntheticModule] {
        &self.modules
    }

    /// All collected sources, CRLF-joined into one script.
    pub fn to_script(&self) -> String {
        self.modules
            .iter()
            .map(|module| module.source.as_str())
            .collect::<Vec<_>>()
            .join("\r\n")
    }
}

impl BuildWriter for ModuleCollector {
    fn entry_point(&self) -> &str {
        &self.entry_point
    }

    fn as_module(&mut self, name: &str, source: &str) -> Result<()> {
        self.modules.push(SyntheticModule {
            name: name.to_string(),
            source: source.to_string(),
        });
        Ok(())
    }
}

/// Writes artifacts below an output directory, creating parents as needed.
#[derive(Debug)]
pub struct DirWriter {
    out_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            written: Vec::new(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Paths written so far, in write order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FileWriter for DirWriter {
    fn write_file(&mut self, file_name: &str, contents: &str) -> Result<()> {
        let path = self.out_dir.join(file_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        self.written.push(path);
        Ok(())
    }
}

/// Serialize `value` as pretty JSON indented with tabs.
pub fn to_tabbed_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value
        .serialize(&mut serializer)
        .context("Failed to serialize JSON")?;
    String::from_utf8(buf).context("Serialized JSON is not valid UTF-8")
}
