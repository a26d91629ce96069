//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `build`: Capture module strings and write entry-point bundles plus the manifest
//! - `localize`: Resolve and format one message the way a running module would
//! - `init`: Initialize nlsbundle configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Build(cmd)) => cmd.common.verbose,
            Some(Command::Localize(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Configuration file (default: nearest .nlsrc.json)
    #[arg(long, env = "NLSBUNDLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the .nls resources (overrides config file)
    #[arg(long)]
    pub resource_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct BuildCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output directory for bundles and metadata (overrides config file)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct LocalizeCommand {
    /// Module id, e.g. vs/editor/contrib/find
    pub module: String,

    /// Index of the message within the module
    pub index: usize,

    /// Positional arguments substituted for {0}, {1}, ...
    pub args: Vec<String>,

    /// Language tag for every module (overrides availableLanguages)
    #[arg(long)]
    pub language: Option<String>,

    /// Apply pseudo-localization to the result
    #[arg(long)]
    pub pseudo: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Capture module strings and write entry-point NLS bundles
    Build(BuildCommand),
    /// Resolve and format a single message
    Localize(LocalizeCommand),
    /// Initialize a new .nlsrc.json configuration file
    Init,
}
