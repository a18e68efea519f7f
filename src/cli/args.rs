//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `t`: resolve one translation key
//! - `format`: format a number, currency amount or date for a language
//! - `languages`: list the configured languages
//! - `url`: localize, alternate or detect language-prefixed URLs
//! - `check`: validate every catalog against the default catalog
//! - `init`: initialize a tolk configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;
use crate::format::DateStyle;

#[derive(Debug, Parser)]
#[command(name = "tolk", author, version, about, long_about = None)]
pub struct Arguments {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        self.common.verbose
    }
}

/// Arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Catalog directory (overrides config file)
    #[arg(long, global = true, env = "TOLK_MESSAGES_ROOT")]
    pub messages_root: Option<PathBuf>,

    /// Language config file (overrides config file)
    #[arg(long, global = true)]
    pub languages_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Language code, e.g. `nl`
    pub language: String,

    /// Dotted key path, e.g. `nav.about`
    pub key: String,

    /// Interpolation value, repeatable: --var name=Ada
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,
}

fn parse_var(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got `{}`", raw)),
    }
}

#[derive(Debug, Args)]
pub struct FormatCommand {
    #[command(subcommand)]
    pub kind: FormatKind,
}

#[derive(Debug, Subcommand)]
pub enum FormatKind {
    /// Format a number with the language's separators
    Number {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        language: String,
    },
    /// Format an amount in the language's currency
    Currency {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        language: String,
    },
    /// Format a date (YYYY-MM-DD or RFC 3339)
    Date {
        date: String,
        language: String,
        /// Overrides the language's date options
        #[arg(long, value_enum)]
        style: Option<DateStyle>,
    },
}

#[derive(Debug, Args)]
pub struct LanguagesCommand {
    /// Print the resolved language config as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct UrlCommand {
    #[command(subcommand)]
    pub action: UrlAction,
}

#[derive(Debug, Subcommand)]
pub enum UrlAction {
    /// Prefix a URL with a language segment
    Localize { url: String, language: String },
    /// The same page in another language
    Alternate { url: String, target: String },
    /// The language a URL belongs to
    Detect { url: String },
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub rules: Vec<CheckRule>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a translation key for a language
    T(TranslateCommand),
    /// Format numbers, currency amounts and dates for a language
    Format(FormatCommand),
    /// List the configured languages
    Languages(LanguagesCommand),
    /// Language-prefixed URL helpers
    Url(UrlCommand),
    /// Check catalogs for missing, orphan, untranslated and mismatched keys
    Check(CheckCommand),
    /// Initialize a new .tolkrc.json configuration file
    Init,
}
