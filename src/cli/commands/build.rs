use std::{collections::BTreeSet, path::Path, sync::Arc};

use anyhow::Result;
use futures::future::try_join_all;
use tracing::info;

use super::super::args::BuildCommand;
use super::{
    helper::{ProjectContext, runtime},
    {BuildSummary, CommandResult, CommandSummary},
};
use crate::{
    config::{Config, PLUGIN_NAMESPACE},
    core::{BuildSession, DirWriter, FileWriter, FsLoader, ModuleCollector, NlsPlugin},
};

pub fn build(cmd: BuildCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::load(&cmd.common)?;
    let out_dir = ctx.out_dir(cmd.out_dir.as_deref())?;

    let summary =
        runtime()?.block_on(run_build(&ctx.config, &ctx.resource_root, &out_dir))?;
    Ok(CommandResult::new(CommandSummary::Build(summary)))
}

/// Capture every entry point and configured module, then write bundles,
/// dependent definitions and the manifest.
pub async fn run_build(
    config: &Config,
    resource_root: &Path,
    out_dir: &Path,
) -> Result<BuildSummary> {
    let entry_points = &config.entry_points;
    let mut writer = DirWriter::new(out_dir);
    if entry_points.is_empty() {
        return Ok(summary(0, 0, 0, writer));
    }

    let session = Arc::new(BuildSession::new());
    let plugin = NlsPlugin::new(FsLoader::new(resource_root), config.nls.building())
        .with_session(Arc::clone(&session));

    // Entry points are captured like any other module, so every bundle key
    // has strings of its own. A module shared by several entry points is
    // captured once.
    let modules: BTreeSet<&str> = entry_points
        .keys()
        .chain(entry_points.values().flatten())
        .map(String::as_str)
        .collect();
    info!(
        entry_points = entry_points.len(),
        modules = modules.len(),
        "capturing module strings"
    );
    try_join_all(modules.iter().map(|module| plugin.load(module))).await?;

    let mut synthetic_module_count = 0;
    for (entry_point, dependents) in entry_points {
        let mut collector = ModuleCollector::new(entry_point.as_str());
        plugin.write(PLUGIN_NAMESPACE, entry_point, &mut collector)?;
        for module in dependents.iter().filter(|module| *module != entry_point) {
            plugin.write(PLUGIN_NAMESPACE, module, &mut collector)?;
        }

        if !collector.modules().is_empty() {
            writer.write_file(
                &format!("{}.nls.modules.js", entry_point),
                &collector.to_script(),
            )?;
        }
        synthetic_module_count += collector.modules().len();
    }

    for entry_point in entry_points.keys() {
        plugin.write_file(PLUGIN_NAMESPACE, entry_point, &mut writer)?;
    }
    plugin.finish_build(&mut writer)?;

    info!(files = writer.written().len(), out_dir = %out_dir.display(), "build finished");
    Ok(summary(
        entry_points.len(),
        modules.len(),
        synthetic_module_count,
        writer,
    ))
}

fn summary(
    entry_point_count: usize,
    module_count: usize,
    synthetic_module_count: usize,
    writer: DirWriter,
) -> BuildSummary {
    BuildSummary {
        entry_point_count,
        module_count,
        synthetic_module_count,
        out_dir: writer.out_dir().to_path_buf(),
        files: writer.written().to_vec(),
    }
}
