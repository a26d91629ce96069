use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub use self::args::{Arguments, Command};
pub use self::exit_status::ExitStatus;

pub mod args;
pub mod commands;
mod exit_status;
mod report;
mod run;

/// Environment variable holding the log filter, e.g. `nlsbundle=debug`.
pub const LOG_ENV: &str = "NLSBUNDLE_LOG";

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();
    init_logging(verbose);

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(result.status)
}

/// Log to stderr, filtered by [`LOG_ENV`]; `--verbose` raises the default level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "nlsbundle=debug" } else { "nlsbundle=warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
