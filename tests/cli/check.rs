use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_check_clean_catalogs() -> Result<()> {
    let test = CliTest::with_site()?;
    test.write_messages(
        "nl.json",
        r#"{
  "nav": {
    "about": "Over ons",
    "contact": "Neem contact op"
  },
  "greeting": "Hallo {{name}}"
}"#,
    )?;

    let output = test.check_command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Checked 2 catalogs - no issues found"));
    Ok(())
}

#[test]
fn test_check_missing_translation() -> Result<()> {
    let test = CliTest::with_site()?;
    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("error: \"nav.contact\"  missing"));
    assert!(out.contains("--> src/_data/i18n/en.json:4"));
    assert!(out.contains("= note: (\"Contact\") missing in: nl"));
    assert!(out.contains("1 problems (1 error, 0 warnings)"));
    Ok(())
}

#[test]
fn test_check_warnings_only_succeeds() -> Result<()> {
    let test = CliTest::with_site()?;
    test.write_messages(
        "nl.json",
        r#"{
  "nav": {
    "about": "About",
    "contact": "Contact",
    "blog": "Blog"
  },
  "greeting": "Hallo {{name}}"
}"#,
    )?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert!(output.status.success(), "stdout: {}", out);
    assert!(out.contains("warning: \"nav.blog\"  orphan"));
    assert!(out.contains("warning: \"nav.about\"  untranslated"));
    assert!(out.contains("warning: \"nav.contact\"  untranslated"));
    assert!(out.contains("(0 errors, 3 warnings)"));
    Ok(())
}

#[test]
fn test_check_selected_rules() -> Result<()> {
    let test = CliTest::with_site()?;
    let output = test.check_command().arg("orphan").output()?;

    assert!(output.status.success());
    assert!(!stdout(&output).contains("missing"));
    Ok(())
}

#[test]
fn test_check_placeholder_and_type_mismatch() -> Result<()> {
    let test = CliTest::with_site()?;
    test.write_messages(
        "nl.json",
        r#"{
  "nav": "Navigatie",
  "greeting": "Hallo {{naam}}"
}"#,
    )?;

    let output = test
        .check_command()
        .args(["placeholder", "type-mismatch"])
        .output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("error: \"greeting\"  placeholder"));
    assert!(out.contains("nl: missing {{name}}; unexpected {{naam}}"));
    assert!(out.contains("error: \"nav\"  type-mismatch"));
    assert!(out.contains("nl: expected object, found string"));
    Ok(())
}

#[test]
fn test_check_ignore_untranslated_from_config() -> Result<()> {
    let test = CliTest::with_site()?;
    test.write_file(".tolkrc.json", r#"{ "ignoreUntranslated": ["nav.*"] }"#)?;
    test.write_messages(
        "nl.json",
        r#"{
  "nav": {
    "about": "About",
    "contact": "Contact"
  },
  "greeting": "Hallo {{name}}"
}"#,
    )?;

    let output = test.check_command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("no issues found"));
    Ok(())
}

#[test]
fn test_check_invalid_ignore_pattern() -> Result<()> {
    let test = CliTest::with_site()?;
    test.write_file(".tolkrc.json", r#"{ "ignoreUntranslated": ["[nav"] }"#)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid glob pattern"));
    Ok(())
}

#[test]
fn test_check_unreadable_catalog() -> Result<()> {
    let test = CliTest::with_site()?;
    test.remove_messages("nl.json")?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("load-error"));
    assert!(out.contains("--> src/_data/i18n/nl.json"));
    Ok(())
}

#[test]
fn test_check_invalid_language_config() -> Result<()> {
    let test = CliTest::with_site()?;
    test.write_messages("config.json", r#"{ "languages": [] }"#)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Failed to load language config"));
    Ok(())
}
