//! Issue types produced by the catalog checks.
//!
//! Each issue carries everything the reporter needs: where it is, what the
//! key and value are, and which languages are affected.

use enum_dispatch::enum_dispatch;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    LoadError,
    MissingTranslation,
    TypeMismatch,
    PlaceholderMismatch,
    OrphanKey,
    Untranslated,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::LoadError => write!(f, "load-error"),
            Rule::MissingTranslation => write!(f, "missing"),
            Rule::TypeMismatch => write!(f, "type-mismatch"),
            Rule::PlaceholderMismatch => write!(f, "placeholder"),
            Rule::OrphanKey => write!(f, "orphan"),
            Rule::Untranslated => write!(f, "untranslated"),
        }
    }
}

// ============================================================
// Locations
// ============================================================

/// A position inside a catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLocation {
    pub file_path: String,
    pub line: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }
}

/// A catalog entry an issue points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: MessageLocation,
    pub key: String,
    pub value: String,
}

impl MessageContext {
    pub fn new(location: MessageLocation, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            location,
            key: key.into(),
            value: value.into(),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Key in the default catalog that other catalogs lack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslationIssue {
    pub context: MessageContext,
    pub default_language: String,
    /// Languages without this key, sorted.
    pub missing_in: Vec<String>,
}

impl MissingTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingTranslation
    }
}

/// Key in a non-default catalog that the default catalog lacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanKeyIssue {
    pub context: MessageContext,
    pub language: String,
}

impl OrphanKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::OrphanKey
    }
}

/// Value identical to the default language's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedIssue {
    pub context: MessageContext,
    pub default_language: String,
    /// Languages with the identical value, sorted.
    pub identical_in: Vec<String>,
}

impl UntranslatedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Untranslated
    }
}

/// Translation whose `{{placeholders}}` differ from the default value's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub context: MessageContext,
    pub language: String,
    /// Placeholders in the default value missing from the translation.
    pub missing: Vec<String>,
    /// Placeholders in the translation unknown to the default value.
    pub unexpected: Vec<String>,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

/// Key that is text in one catalog and structured in the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMismatchIssue {
    pub context: MessageContext,
    pub language: String,
    pub expected: String,
    pub found: String,
}

impl TypeMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::TypeMismatch
    }
}

/// Catalog or language config that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl LoadErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::LoadError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found in the catalogs.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    LoadError(LoadErrorIssue),
    MissingTranslation(MissingTranslationIssue),
    TypeMismatch(TypeMismatchIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    OrphanKey(OrphanKeyIssue),
    Untranslated(UntranslatedIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }

    /// Ordering used for output: file, line, rule, message.
    pub fn sort_key(&self) -> (String, usize, Rule, String) {
        let (file, line) = match self.location() {
            ReportLocation::Message(ctx) => (ctx.location.file_path.clone(), ctx.location.line),
            ReportLocation::File { path } => (path.to_string(), 0),
        };
        (file, line, self.rule(), self.message())
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A key inside a catalog file.
    Message(&'a MessageContext),
    /// File-level only (load errors).
    File { path: &'a str },
}

/// Trait for types that can be reported to the CLI.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (usually the key).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MissingTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") missing in: {}",
            self.context.value,
            self.missing_in.join(", ")
        ))
    }
}

impl Report for OrphanKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "in {} (\"{}\") but not in the default language",
            self.language, self.context.value
        ))
    }
}

impl Report for UntranslatedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") identical in: {}",
            self.context.value,
            self.identical_in.join(", ")
        ))
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing {}", braced(&self.missing)));
        }
        if !self.unexpected.is_empty() {
            parts.push(format!("unexpected {}", braced(&self.unexpected)));
        }
        Some(format!("{}: {}", self.language, parts.join("; ")))
    }
}

impl Report for TypeMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{}: expected {}, found {}",
            self.language, self.expected, self.found
        ))
    }
}

impl Report for LoadErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

fn braced(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("{{{{{}}}}}", n))
        .collect::<Vec<_>>()
        .join(", ")
}
