use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["resourceRoot"], "./nls");
    assert_eq!(parsed["outDir"], "./out");
    assert!(
        parsed["entryPoints"].is_object(),
        "Config should have 'entryPoints' object"
    );
    assert_eq!(parsed["vs/nls"]["isBuild"], false);

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .nlsrc.json"));

    assert!(test.root().join(".nlsrc.json").exists());
    let content = test.read_file(".nlsrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".nlsrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".nlsrc.json already exists"));
    assert_eq!(test.read_file(".nlsrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;

    // No entry points yet: nothing to bundle, but the config must parse.
    let output = test.build_command().output()?;
    assert_eq!(
        output.status.code(),
        Some(1),
        "stderr: {}",
        stderr(&output)
    );
    assert!(stderr(&output).contains("No entry points configured"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    assert!(output.status.success());
    let help = stdout(&output);
    for command in ["build", "localize", "init"] {
        assert!(help.contains(command), "help should list {}", command);
    }

    Ok(())
}
