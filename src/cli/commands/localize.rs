use anyhow::{Result, bail};

use super::super::args::LocalizeCommand;
use super::{
    helper::{ProjectContext, runtime},
    {CommandResult, CommandSummary, LocalizeSummary},
};
use crate::{
    config::PluginConfig,
    core::{FsLoader, LanguageMap, Loaded, NlsPlugin},
};

pub fn localize(cmd: LocalizeCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::load(&cmd.common)?;

    // Always resolve the way a running module would, never in build mode.
    let mut config = PluginConfig {
        is_build: false,
        ..ctx.config.nls.clone()
    };
    if let Some(language) = &cmd.language {
        config.available_languages = Some(LanguageMap::wildcard(language.as_str()));
    }

    let plugin = NlsPlugin::new(FsLoader::new(&ctx.resource_root), config);
    if cmd.pseudo {
        plugin.set_pseudo_translation(true);
    }

    let bundle = match runtime()?.block_on(plugin.load(&cmd.module))? {
        Loaded::Runtime(bundle) => bundle,
        Loaded::Root(_) => bail!("Module name must not be empty"),
        Loaded::Host(_) | Loaded::Captured(_) => bail!("Unexpected load mode for localize"),
    };

    let found = cmd.index < bundle.api.localizer().len();
    let text = bundle.localize(cmd.index, "", &cmd.args);

    Ok(CommandResult::new(CommandSummary::Localize(
        LocalizeSummary {
            module: cmd.module,
            index: cmd.index,
            text,
            found,
        },
    )))
}
