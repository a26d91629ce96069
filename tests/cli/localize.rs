use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

fn project() -> Result<CliTest> {
    let test = CliTest::with_file(
        ".nlsrc.json",
        r#"{
         "vs/nls": { "availableLanguages": { "vs/greeting": "fr", "*": "de" } }
     }"#,
    )?;
    test.write_resource("vs/greeting.nls", r#"["Hello {0}", "Bye"]"#)?;
    test.write_resource("vs/greeting.nls.fr", r#"["Bonjour {0}", "Au revoir"]"#)?;
    test.write_resource("vs/greeting.nls.de", r#"["Hallo {0}", "Tschüss"]"#)?;
    test.write_resource("vs/other.nls.de", r#"["Datei {0} von {1}"]"#)?;
    Ok(test)
}

#[test]
fn test_localize_exact_language() -> Result<()> {
    let test = project()?;

    let output = test
        .localize_command()
        .args(["vs/greeting", "0", "Ana"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Bonjour Ana\n");

    Ok(())
}

#[test]
fn test_localize_wildcard_language() -> Result<()> {
    let test = project()?;

    let output = test
        .localize_command()
        .args(["vs/other", "0", "a.txt", "3"])
        .output()?;
    assert_eq!(stdout(&output), "Datei a.txt von 3\n");

    Ok(())
}

#[test]
fn test_localize_language_override() -> Result<()> {
    let test = project()?;

    let output = test
        .localize_command()
        .args(["vs/greeting", "1", "--language", "i-default"])
        .output()?;
    assert_eq!(stdout(&output), "Bye\n");

    Ok(())
}

#[test]
fn test_localize_missing_argument_stays_literal() -> Result<()> {
    let test = project()?;

    let output = test
        .localize_command()
        .args(["vs/other", "0", "a.txt"])
        .output()?;
    assert_eq!(stdout(&output), "Datei a.txt von {1}\n");

    Ok(())
}

#[test]
fn test_localize_pseudo() -> Result<()> {
    let test = project()?;

    let output = test
        .localize_command()
        .args(["vs/greeting", "0", "Ana", "--language", "i-default", "--pseudo"])
        .output()?;
    assert_eq!(stdout(&output), "\u{FF3B}Heelloo Anaa\u{FF3D}\n");

    Ok(())
}

#[test]
fn test_localize_unknown_index() -> Result<()> {
    let test = project()?;

    let output = test
        .localize_command()
        .args(["vs/greeting", "9"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("NLS error: unknown index 9"));

    Ok(())
}

#[test]
fn test_localize_missing_resource() -> Result<()> {
    let test = project()?;

    let output = test
        .localize_command()
        .args(["vs/missing", "0"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("vs/missing.nls.de"));

    Ok(())
}
