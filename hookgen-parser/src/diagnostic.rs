//! Diagnostics collected while reading backend sources.
//!
//! Nothing in the parser aborts on a single bad file. Problems are recorded
//! here and surfaced by the CLI after generation.

use std::path::Path;

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The file or declaration was skipped.
    Error,
    /// Output was produced but may be less precise than expected.
    Warning,
    Info,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// The stage of analysis that produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Scan,
    Validators,
    Functions,
    Schema,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Scan => write!(f, "scan"),
            Phase::Validators => write!(f, "validators"),
            Phase::Functions => write!(f, "functions"),
            Phase::Schema => write!(f, "schema"),
        }
    }
}

/// A diagnostic message from one analysis phase.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub phase: Phase,
    pub message: String,
    /// Source location, e.g. `convex/issues/queries.ts:12`.
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn error(phase: Phase, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            phase,
            message: message.into(),
            location: None,
        }
    }

    pub fn warning(phase: Phase, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            phase,
            message: message.into(),
            location: None,
        }
    }

    fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Add a file location, with a line number when known.
    pub fn in_file(self, path: &Path, line: Option<u32>) -> Self {
        match line {
            Some(line) => self.at(format!("{}:{}", path.display(), line)),
            None => self.at(path.display().to_string()),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.phase, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_error() {
        let diag = Diagnostic::error(Phase::Functions, "unbalanced braces");
        assert!(diag.severity.is_error());
        assert_eq!(diag.phase, Phase::Functions);
    }

    #[test]
    fn test_diagnostic_in_file() {
        let diag = Diagnostic::warning(Phase::Schema, "no defineSchema call")
            .in_file(Path::new("convex/schema.ts"), Some(3));
        assert_eq!(diag.location.as_deref(), Some("convex/schema.ts:3"));
        assert_eq!(
            diag.to_string(),
            "warning[schema]: no defineSchema call (at convex/schema.ts:3)"
        );
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Info.to_string(), "info");
    }
}
