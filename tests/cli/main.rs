use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod format;
mod init;
mod languages;
mod translate;
mod url;

const BIN_NAME: &str = "tolk";

/// Catalog directory used when no `.tolkrc.json` overrides it.
pub const MESSAGES_ROOT: &str = "src/_data/i18n";

pub const LANGUAGES_JSON: &str = r#"{
  "defaultLanguage": "en",
  "languages": [
    {
      "code": "en",
      "name": "English",
      "nativeName": "English",
      "dir": "ltr",
      "default": true,
      "dateFormat": { "locale": "en-US", "options": { "year": "numeric", "month": "long", "day": "numeric" } },
      "numberFormat": { "locale": "en-US", "currency": "USD" }
    },
    {
      "code": "nl",
      "name": "Dutch",
      "nativeName": "Nederlands",
      "dir": "ltr",
      "dateFormat": { "locale": "nl-NL", "options": { "year": "numeric", "month": "long", "day": "numeric" } },
      "numberFormat": { "locale": "nl-NL", "currency": "EUR" }
    }
  ]
}"#;

pub const EN_JSON: &str = r#"{
  "nav": {
    "about": "About",
    "contact": "Contact"
  },
  "greeting": "Hello {{name}}"
}"#;

pub const NL_JSON: &str = r#"{
  "nav": {
    "about": "Over ons"
  },
  "greeting": "Hallo {{name}}"
}"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config discovery at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with the language config and the `en`/`nl` catalogs above.
    pub fn with_site() -> Result<Self> {
        let test = Self::new()?;
        test.write_messages("config.json", LANGUAGES_JSON)?;
        test.write_messages("en.json", EN_JSON)?;
        test.write_messages("nl.json", NL_JSON)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    /// Write a file into the default catalog directory.
    pub fn write_messages(&self, name: &str, content: &str) -> Result<()> {
        self.write_file(&format!("{}/{}", MESSAGES_ROOT, name), content)
    }

    pub fn remove_messages(&self, name: &str) -> Result<()> {
        let path = self.project_dir.join(MESSAGES_ROOT).join(name);
        fs::remove_file(&path).with_context(|| format!("Failed to remove: {}", path.display()))
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    /// Run `tolk` with `args` and capture its output.
    pub fn run(&self, args: &[&str]) -> Result<Output> {
        self.command()
            .args(args)
            .output()
            .context("Failed to run tolk")
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&[])?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage: tolk"));
    Ok(())
}

#[test]
fn test_unknown_flag_is_usage_error() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["t", "--bogus"])?;

    assert_eq!(output.status.code(), Some(2));
    Ok(())
}
