use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["messagesRoot"], "./src/_data/i18n");
    assert_eq!(parsed["languagesFile"], "config.json");
    assert!(
        parsed["ignoreUntranslated"].is_array(),
        "Config should have 'ignoreUntranslated' field"
    );

    // Formatting (2-space indentation)
    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["init"])?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .tolkrc.json"));
    assert!(test.root().join(".tolkrc.json").exists());

    let content = test.read_file(".tolkrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tolkrc.json", "{}")?;

    let output = test.run(&["init"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains(".tolkrc.json already exists"));
    assert_eq!(test.read_file(".tolkrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.run(&["init"])?;

    test.write_messages("en.json", r#"{"title": "Home"}"#)?;
    test.write_messages("nl.json", r#"{"title": "Thuis"}"#)?;

    let output = test.check_command().output()?;
    assert!(
        output.status.success(),
        "Check command should work with initialized config. stderr: {}",
        stderr(&output)
    );

    Ok(())
}
