use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_translate_found() -> Result<()> {
    let test = CliTest::with_site()?;
    let output = test.run(&["t", "nl", "nav.about"])?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output).trim_end(), @"Over ons");
    Ok(())
}

#[test]
fn test_translate_falls_back_to_default_language() -> Result<()> {
    let test = CliTest::with_site()?;
    let output = test.run(&["t", "nl", "nav.contact"])?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output).trim_end(), @"Contact");
    assert!(stderr(&output).contains("WARN"));
    Ok(())
}

#[test]
fn test_translate_missing_sentinel() -> Result<()> {
    let test = CliTest::with_site()?;
    let output = test.run(&["t", "nl", "nav.careers"])?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output).trim_end(), @"[Missing: nav.careers]");
    Ok(())
}

#[test]
fn test_translate_with_vars() -> Result<()> {
    let test = CliTest::with_site()?;
    let output = test.run(&["t", "nl", "greeting", "--var", "name=Ada"])?;

    assert_snapshot!(stdout(&output).trim_end(), @"Hallo Ada");
    Ok(())
}

#[test]
fn test_translate_unmatched_placeholder_left_verbatim() -> Result<()> {
    let test = CliTest::with_site()?;
    let output = test.run(&["t", "en", "greeting"])?;

    assert_snapshot!(stdout(&output).trim_end(), @"Hello {{name}}");
    Ok(())
}

#[test]
fn test_translate_unconfigured_language() -> Result<()> {
    let test = CliTest::with_site()?;
    let output = test.run(&["t", "fr", "nav.about"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "About");
    Ok(())
}

#[test]
fn test_translate_structured_value_as_json() -> Result<()> {
    let test = CliTest::with_site()?;
    let output = test.run(&["t", "en", "nav"])?;

    assert_eq!(
        stdout(&output).trim_end(),
        r#"{"about":"About","contact":"Contact"}"#
    );
    Ok(())
}

#[test]
fn test_translate_unreadable_catalog_uses_fallback() -> Result<()> {
    let test = CliTest::with_site()?;
    test.write_messages("nl.json", "{ not json")?;

    let output = test.run(&["t", "nl", "nav.about"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "About");
    assert!(stderr(&output).contains("catalog unavailable"));
    Ok(())
}

#[test]
fn test_translate_messages_root_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/en.json", r#"{"title": "Home"}"#)?;

    let output = test.run(&["t", "en", "title", "--messages-root", "i18n"])?;

    assert_eq!(stdout(&output).trim_end(), "Home");
    Ok(())
}

#[test]
fn test_translate_bad_var_is_usage_error() -> Result<()> {
    let test = CliTest::with_site()?;
    let output = test.run(&["t", "nl", "greeting", "--var", "name"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("expected NAME=VALUE"));
    Ok(())
}

#[test]
fn test_translate_structured_value_keeps_catalog_order() -> Result<()> {
    let test = CliTest::with_site()?;
    test.write_messages("en.json", r#"{"footer": {"zeta": "Z", "alpha": "A"}}"#)?;

    let output = test.run(&["t", "en", "footer"])?;

    assert_eq!(stdout(&output).trim_end(), r#"{"zeta":"Z","alpha":"A"}"#);
    Ok(())
}

#[test]
fn test_translate_default_language_does_not_fall_back() -> Result<()> {
    let test = CliTest::with_site()?;
    test.write_messages("en.json", "{}")?;

    let output = test.run(&["t", "en", "greeting"])?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output).trim_end(), @"[Missing: greeting]");
    Ok(())
}

#[test]
fn test_translate_var_with_non_ascii_name() -> Result<()> {
    let test = CliTest::with_site()?;
    test.write_messages("nl.json", r#"{"greeting": "Hallo {{prénom}}"}"#)?;

    let output = test.run(&["t", "nl", "greeting", "--var", "prénom=Ada"])?;

    assert_snapshot!(stdout(&output).trim_end(), @"Hallo Ada");
    Ok(())
}
