use std::path::PathBuf;

use super::super::exit_status::ExitStatus;

#[derive(Debug)]
pub enum CommandSummary {
    Build(BuildSummary),
    Localize(LocalizeSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct BuildSummary {
    /// Number of configured entry points.
    pub entry_point_count: usize,
    /// Number of distinct modules whose strings were captured.
    pub module_count: usize,
    /// Number of synthetic dependent-module definitions written.
    pub synthetic_module_count: usize,
    pub out_dir: PathBuf,
    /// Artifacts written, in write order.
    pub files: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct LocalizeSummary {
    pub module: String,
    pub index: usize,
    /// Formatted message, or a diagnostic when the index is unknown.
    pub text: String,
    /// False when `text` is a diagnostic.
    pub found: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    /// Set when the config file could not be created.
    pub error: Option<String>,
}

/// Result of running nlsbundle commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub status: ExitStatus,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        let status = match &summary {
            CommandSummary::Build(summary) if summary.entry_point_count == 0 => ExitStatus::Failure,
            CommandSummary::Localize(summary) if !summary.found => ExitStatus::Failure,
            CommandSummary::Init(summary) if summary.error.is_some() => ExitStatus::Failure,
            _ => ExitStatus::Success,
        };
        Self { summary, status }
    }
}
