/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the command summary and exit status
/// - `Err` if the command fails (e.g., config parse errors, missing resources)
use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{build::build, init::init, localize::localize},
};
use anyhow::Result;

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Build(cmd)) => build(cmd),
        Some(Command::Localize(cmd)) => localize(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
