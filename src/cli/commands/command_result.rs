use crate::{i18n::Language, issues::Issue};

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    /// A single line of output (`t`, `format`, `url`).
    Output(String),
    Languages(LanguagesSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    /// Number of catalog files that were checked.
    pub catalogs_checked: usize,
}

#[derive(Debug)]
pub struct LanguagesSummary {
    pub languages: Vec<Language>,
    pub default_language: String,
    /// Pre-rendered JSON when `--json` was given.
    pub json: Option<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running tolk commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
}

impl CommandResult {
    /// A result with no issues.
    pub fn clean(summary: CommandSummary) -> Self {
        Self {
            summary,
            error_count: 0,
            warning_count: 0,
            issues: Vec::new(),
        }
    }
}
