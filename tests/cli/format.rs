use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_format_number() -> Result<()> {
    let test = CliTest::with_site()?;

    let en = test.run(&["format", "number", "1234.5", "en"])?;
    let nl = test.run(&["format", "number", "1234.5", "nl"])?;

    assert_snapshot!(stdout(&en).trim_end(), @"1,234.5");
    assert_snapshot!(stdout(&nl).trim_end(), @"1.234,5");
    Ok(())
}

#[test]
fn test_format_currency() -> Result<()> {
    let test = CliTest::with_site()?;

    let en = test.run(&["format", "currency", "99", "en"])?;
    let nl = test.run(&["format", "currency", "-1250.5", "nl"])?;

    assert_eq!(stdout(&en).trim_end(), "$99.00");
    assert_eq!(stdout(&nl).trim_end(), "€\u{a0}-1.250,50");
    Ok(())
}

#[test]
fn test_format_date() -> Result<()> {
    let test = CliTest::with_site()?;

    let en = test.run(&["format", "date", "2025-01-05", "en"])?;
    let nl = test.run(&["format", "date", "2025-01-05", "nl"])?;
    let short = test.run(&["format", "date", "2025-01-05", "nl", "--style", "short"])?;
    let iso = test.run(&["format", "date", "2025-01-05", "nl", "--style", "iso"])?;

    assert_snapshot!(stdout(&en).trim_end(), @"January 5, 2025");
    assert_snapshot!(stdout(&nl).trim_end(), @"5 januari 2025");
    assert_snapshot!(stdout(&short).trim_end(), @"5 jan 2025");
    assert_snapshot!(stdout(&iso).trim_end(), @"2025-01-05T00:00:00.000Z");
    Ok(())
}

#[test]
fn test_format_unknown_language_uses_fallback_profile() -> Result<()> {
    let test = CliTest::with_site()?;
    let output = test.run(&["format", "number", "1234.5", "ar"])?;

    assert_eq!(stdout(&output).trim_end(), "1,234.5");
    Ok(())
}

#[test]
fn test_format_without_language_config() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["format", "number", "1234.5", "nl"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "1.234,5");
    Ok(())
}

#[test]
fn test_format_invalid_date() -> Result<()> {
    let test = CliTest::with_site()?;
    let output = test.run(&["format", "date", "05/01/2025", "en"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("invalid date '05/01/2025'"));
    Ok(())
}
