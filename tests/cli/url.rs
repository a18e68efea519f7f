use anyhow::Result;

use crate::{CliTest, stdout};

#[test]
fn test_url_localize() -> Result<()> {
    let test = CliTest::with_site()?;

    let nl = test.run(&["url", "localize", "/about/", "nl"])?;
    let en = test.run(&["url", "localize", "/about/", "en"])?;

    assert_eq!(stdout(&nl).trim_end(), "/nl/about/");
    assert_eq!(stdout(&en).trim_end(), "/about/");
    Ok(())
}

#[test]
fn test_url_alternate() -> Result<()> {
    let test = CliTest::with_site()?;
    let output = test.run(&["url", "alternate", "/nl/about/", "en"])?;

    assert_eq!(stdout(&output).trim_end(), "/about/");
    Ok(())
}

#[test]
fn test_url_detect() -> Result<()> {
    let test = CliTest::with_site()?;

    let nl = test.run(&["url", "detect", "/nl/contact/"])?;
    let en = test.run(&["url", "detect", "/contact/"])?;

    assert_eq!(stdout(&nl).trim_end(), "nl");
    assert_eq!(stdout(&en).trim_end(), "en");
    Ok(())
}
