//! Report formatting and printing utilities.
//!
//! Issues are printed cargo-style. Kept apart from the rules so tolk can be
//! used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CheckSummary, CommandResult, CommandSummary, InitSummary, LanguagesSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by_key(Issue::sort_key);

    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(catalogs: usize) {
    print_success_to(catalogs, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(catalogs: usize, writer: &mut W) {
    let msg = format!(
        "Checked {} {} - no issues found",
        catalogs,
        if catalogs == 1 { "catalog" } else { "catalogs" }
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line
    match issue.location() {
        ReportLocation::Message(ctx) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}",
                "-->".blue(),
                ctx.location.file_path,
                ctx.location.line
            );
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Message(ctx) => Some(ctx.location.line),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Check(summary) => print_check(result, summary),
        CommandSummary::Output(text) => println!("{}", text),
        CommandSummary::Languages(summary) => print_languages(summary),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_check(result: &CommandResult, summary: &CheckSummary) {
    if result.issues.is_empty() {
        print_success(summary.catalogs_checked);
    } else {
        report(&result.issues);
    }
}

fn print_languages(summary: &LanguagesSummary) {
    print_languages_to(summary, &mut io::stdout().lock());
}

/// One row per language: code, native name, direction and a default marker,
/// with native names padded by display width.
fn print_languages_to<W: Write>(summary: &LanguagesSummary, writer: &mut W) {
    if let Some(json) = &summary.json {
        let _ = writeln!(writer, "{}", json);
        return;
    }

    let code_width = summary
        .languages
        .iter()
        .map(|l| l.code.len())
        .max()
        .unwrap_or(0);
    let name_width = summary
        .languages
        .iter()
        .map(|l| UnicodeWidthStr::width(l.native_name.as_str()))
        .max()
        .unwrap_or(0);

    for language in &summary.languages {
        let padding = name_width - UnicodeWidthStr::width(language.native_name.as_str());
        let line = format!(
            "{}  {}{}  {}",
            format!("{:<code_width$}", language.code, code_width = code_width).bold(),
            language.native_name,
            " ".repeat(padding),
            language.dir
        );
        if language.code == summary.default_language {
            let _ = writeln!(writer, "{}  {}", line, "(default)".dimmed());
        } else {
            let _ = writeln!(writer, "{}", line);
        }
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
