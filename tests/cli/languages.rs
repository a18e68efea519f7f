use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, LANGUAGES_JSON, stdout};

#[test]
fn test_languages_table() -> Result<()> {
    let test = CliTest::with_site()?;
    let output = test.run(&["languages"])?;
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();

    assert!(output.status.success());
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("en  English"));
    assert!(lines[0].ends_with("(default)"));
    assert!(lines[1].starts_with("nl  Nederlands  ltr"));
    Ok(())
}

#[test]
fn test_languages_json_matches_config() -> Result<()> {
    let test = CliTest::with_site()?;
    let output = test.run(&["languages", "--json"])?;

    let printed: Value = serde_json::from_str(&stdout(&output))?;
    let expected: Value = serde_json::from_str(LANGUAGES_JSON)?;

    assert_eq!(printed["defaultLanguage"], "en");
    assert_eq!(printed["languages"], expected["languages"]);
    Ok(())
}

#[test]
fn test_languages_marks_declared_default() -> Result<()> {
    let test = CliTest::with_site()?;
    test.write_messages(
        "config.json",
        r#"{
  "defaultLanguage": "nl",
  "languages": [
    { "code": "en", "nativeName": "English" },
    { "code": "nl", "nativeName": "Nederlands" }
  ]
}"#,
    )?;

    let output = test.run(&["languages"])?;
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();

    assert!(!lines[0].contains("(default)"));
    assert!(lines[1].ends_with("(default)"));
    Ok(())
}

#[test]
fn test_languages_file_flag_missing() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["languages", "--languages-file", "nope.json"])?;

    assert_eq!(output.status.code(), Some(2));
    Ok(())
}

#[test]
fn test_languages_file_read_from_messages_root_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "i18n/config.json",
        r#"{
  "defaultLanguage": "de",
  "languages": [
    { "code": "de", "nativeName": "Deutsch" },
    { "code": "en", "nativeName": "English" }
  ]
}"#,
    )?;

    let output = test.run(&["languages", "--messages-root", "i18n"])?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.lines().next().unwrap_or_default().starts_with("de  Deutsch"));
    assert!(out.contains("(default)"));
    Ok(())
}
