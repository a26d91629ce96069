//! Report formatting and printing utilities.
//!
//! Separate from command logic so the commands can be used as a library.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use super::commands::{BuildSummary, CommandResult, CommandSummary, InitSummary, LocalizeSummary};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the outcome of a command: results to stdout, problems to stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

pub fn print_to<W: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    match &result.summary {
        CommandSummary::Build(summary) => print_build(summary, verbose, out, err),
        CommandSummary::Localize(summary) => print_localize(summary, out, err),
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
}

fn print_build<W: Write, E: Write>(
    summary: &BuildSummary,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    if summary.entry_point_count == 0 {
        let _ = writeln!(
            err,
            "{} No entry points configured (add \"entryPoints\" to {})",
            FAILURE_MARK.red(),
            CONFIG_FILE_NAME
        );
        return;
    }

    if verbose {
        for file in &summary.files {
            let _ = writeln!(
                out,
                "  {} {}",
                "wrote".cyan(),
                display_relative(file, &summary.out_dir)
            );
        }
    }

    let msg = format!(
        "Bundled {} {} from {} {} into {} ({} {})",
        summary.entry_point_count,
        plural(summary.entry_point_count, "entry point", "entry points"),
        summary.module_count,
        plural(summary.module_count, "module", "modules"),
        summary.out_dir.display(),
        summary.files.len(),
        plural(summary.files.len(), "file", "files"),
    );
    let _ = writeln!(out, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn print_localize<W: Write, E: Write>(summary: &LocalizeSummary, out: &mut W, err: &mut E) {
    if summary.found {
        let _ = writeln!(out, "{}", summary.text);
    } else {
        let _ = writeln!(
            err,
            "{} {} (module {}, index {})",
            FAILURE_MARK.red(),
            summary.text,
            summary.module,
            summary.index
        );
    }
}

fn print_init<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) {
    match &summary.error {
        Some(error) => {
            let _ = writeln!(err, "{} {}", "Error:".bold().red(), error);
        }
        None => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", CONFIG_FILE_NAME).green()
            );
        }
    }
}

fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
