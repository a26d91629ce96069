use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

fn project() -> Result<CliTest> {
    let test = CliTest::with_file(
        ".nlsrc.json",
        r#"{
         "entryPoints": { "vs/main": ["vs/main", "vs/editor", "vs/find"] }
     }"#,
    )?;
    test.write_resource("vs/main.nls", r#"["Ready"]"#)?;
    test.write_resource("vs/main.nls.keys", r#"["ready"]"#)?;
    test.write_resource("vs/editor.nls", r#"["Undo", "Redo {0}"]"#)?;
    test.write_resource(
        "vs/editor.nls.keys",
        r#"["undo", { "key": "redo", "comment": ["{0} is the action"] }]"#,
    )?;
    test.write_resource("vs/find.nls", r#"["{0} of {1}"]"#)?;
    test.write_resource("vs/find.nls.keys", r#"["matchesOf"]"#)?;
    Ok(test)
}

#[test]
fn test_build_writes_bundle_and_manifest() -> Result<()> {
    let test = project()?;

    let output = test.build_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Bundled 1 entry point from 3 modules"));
    assert!(stdout(&output).contains("(3 files)"));

    let bundle = test.read_file("out/vs/main.nls.js")?;
    let lines: Vec<&str> = bundle.split("\r\n").collect();
    assert!(lines[0].starts_with("/*"));
    assert!(lines[3].starts_with("define(\"vs/main.nls\", {"));

    let json_start = bundle.find('{').unwrap_or_default();
    let json_end = bundle.rfind('}').unwrap_or_default();
    let data: Value = serde_json::from_str(&bundle[json_start..=json_end])?;
    assert_eq!(
        data,
        serde_json::json!({
            "vs/editor": ["Undo", "Redo {0}"],
            "vs/find": ["{0} of {1}"],
            "vs/main": ["Ready"]
        })
    );

    let manifest: Value = serde_json::from_str(&test.read_file("out/nls.metadata.json")?)?;
    insta::assert_json_snapshot!(manifest, @r#"
    {
      "keys": {
        "vs/editor": [
          "undo",
          {
            "key": "redo",
            "comment": [
              "{0} is the action"
            ]
          }
        ],
        "vs/find": [
          "matchesOf"
        ],
        "vs/main": [
          "ready"
        ]
      },
      "messages": {
        "vs/editor": [
          "Undo",
          "Redo {0}"
        ],
        "vs/find": [
          "{0} of {1}"
        ],
        "vs/main": [
          "Ready"
        ]
      },
      "bundles": {
        "vs/main": [
          "vs/main",
          "vs/editor",
          "vs/find"
        ]
      }
    }
    "#);

    Ok(())
}

#[test]
fn test_build_writes_dependent_module_definitions() -> Result<()> {
    let test = project()?;

    test.build_command().output()?;

    let modules = test.read_file("out/vs/main.nls.modules.js")?;
    let definitions: Vec<&str> = modules.split("\r\n").collect();
    assert_eq!(
        definitions,
        vec![
            r#"define(["vs/nls", "vs/nls!vs/main"], function(nls, data) { return nls.create("vs/editor", data); });"#,
            r#"define(["vs/nls", "vs/nls!vs/main"], function(nls, data) { return nls.create("vs/find", data); });"#,
        ]
    );

    Ok(())
}

#[test]
fn test_build_captures_entry_point_not_listed_as_module() -> Result<()> {
    let test = CliTest::with_file(
        ".nlsrc.json",
        r#"{ "entryPoints": { "vs/main": ["vs/a"] } }"#,
    )?;
    test.write_resource("vs/main.nls", r#"["Ready"]"#)?;
    test.write_resource("vs/main.nls.keys", r#"["ready"]"#)?;
    test.write_resource("vs/a.nls", r#"["A"]"#)?;
    test.write_resource("vs/a.nls.keys", r#"["a"]"#)?;

    let output = test.build_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("from 2 modules"));

    let manifest: Value = serde_json::from_str(&test.read_file("out/nls.metadata.json")?)?;
    assert_eq!(manifest["bundles"]["vs/main"], serde_json::json!(["vs/main", "vs/a"]));
    assert_eq!(manifest["messages"]["vs/main"], serde_json::json!(["Ready"]));

    Ok(())
}

#[test]
fn test_build_out_dir_override() -> Result<()> {
    let test = project()?;

    let output = test.build_command().args(["--out-dir", "dist"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("dist/nls.metadata.json").exists());
    assert!(!test.root().join("out").exists());

    Ok(())
}

#[test]
fn test_build_verbose_lists_files() -> Result<()> {
    let test = project()?;

    let output = test.build_command().arg("--verbose").output()?;
    let out = stdout(&output);
    assert!(out.contains("wrote vs/main.nls.js"));
    assert!(out.contains("wrote nls.metadata.json"));

    Ok(())
}

#[test]
fn test_build_without_entry_points() -> Result<()> {
    let test = CliTest::with_file(".nlsrc.json", "{}")?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No entry points configured"));

    Ok(())
}

#[test]
fn test_build_missing_resource() -> Result<()> {
    let test = CliTest::with_file(
        ".nlsrc.json",
        r#"{ "entryPoints": { "vs/main": ["vs/ghost"] } }"#,
    )?;
    test.write_resource("vs/main.nls", "[]")?;
    test.write_resource("vs/main.nls.keys", "[]")?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("vs/ghost.nls"));
    assert!(!test.root().join("out/nls.metadata.json").exists());

    Ok(())
}

#[test]
fn test_build_mismatched_keys() -> Result<()> {
    let test = CliTest::with_file(
        ".nlsrc.json",
        r#"{ "entryPoints": { "vs/main": ["vs/a"] } }"#,
    )?;
    test.write_resource("vs/main.nls", "[]")?;
    test.write_resource("vs/main.nls.keys", "[]")?;
    test.write_resource("vs/a.nls", r#"["A", "B"]"#)?;
    test.write_resource("vs/a.nls.keys", r#"["a"]"#)?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Module vs/a has 2 messages but 1 keys"));

    Ok(())
}
