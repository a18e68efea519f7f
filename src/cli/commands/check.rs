use anyhow::Result;
use clap::ValueEnum;

use super::{CheckSummary, CommandResult, CommandSummary, context::CommandContext, helper::finish};
use crate::{
    cli::args::CheckCommand,
    i18n::Catalog,
    issues::{Issue, LoadErrorIssue},
    rules::{
        check_missing_translations, check_orphan_keys, check_placeholders, check_type_mismatches,
        check_untranslated,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Missing,
    Orphan,
    Untranslated,
    Placeholder,
    TypeMismatch,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Missing,
            CheckRule::Orphan,
            CheckRule::Untranslated,
            CheckRule::Placeholder,
            CheckRule::TypeMismatch,
        ]
    }
}

/// Validate every loaded catalog against the default language's catalog.
///
/// Catalogs that failed to load are always reported, whatever rules were
/// selected.
pub fn check(cmd: &CheckCommand, ctx: &CommandContext) -> Result<CommandResult> {
    let rules = if cmd.rules.is_empty() {
        CheckRule::all()
    } else {
        cmd.rules.clone()
    };

    let registry = ctx.registry();
    let default_code = ctx.languages.default_language().code.as_str();
    let empty = Catalog::empty(default_code);
    let default = registry.get(default_code).unwrap_or(&empty);
    let others: Vec<&Catalog> = registry
        .catalogs()
        .into_iter()
        .filter(|c| c.language() != default_code)
        .collect();

    let mut all_issues: Vec<Issue> = registry
        .failures()
        .iter()
        .map(|failure| {
            Issue::LoadError(LoadErrorIssue {
                file_path: failure.path.to_string_lossy().to_string(),
                error: failure.error.clone(),
            })
        })
        .collect();

    for rule in rules {
        match rule {
            CheckRule::Missing => {
                let issues = check_missing_translations(default, &others);
                all_issues.extend(issues.into_iter().map(Issue::MissingTranslation));
            }
            CheckRule::Orphan => {
                let issues = check_orphan_keys(default, &others);
                all_issues.extend(issues.into_iter().map(Issue::OrphanKey));
            }
            CheckRule::Untranslated => {
                let ignored = ctx.config.ignore_untranslated_patterns();
                let issues = check_untranslated(default, &others, &ignored);
                all_issues.extend(issues.into_iter().map(Issue::Untranslated));
            }
            CheckRule::Placeholder => {
                let issues = check_placeholders(default, &others);
                all_issues.extend(issues.into_iter().map(Issue::PlaceholderMismatch));
            }
            CheckRule::TypeMismatch => {
                let issues = check_type_mismatches(default, &others);
                all_issues.extend(issues.into_iter().map(Issue::TypeMismatch));
            }
        }
    }

    Ok(finish(
        CommandSummary::Check(CheckSummary {
            catalogs_checked: registry.len(),
        }),
        all_issues,
    ))
}
