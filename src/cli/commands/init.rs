use std::{fs, path::Path};

use anyhow::Result;

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(CommandResult::new(CommandSummary::Init(InitSummary {
            error: Some(format!("{} already exists", CONFIG_FILE_NAME)),
        })));
    }

    fs::write(config_path, format!("{}\n", default_config_json()?))?;
    Ok(CommandResult::new(CommandSummary::Init(InitSummary {
        error: None,
    })))
}
