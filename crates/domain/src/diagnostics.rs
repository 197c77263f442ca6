use std::fmt;

use cut_check_shared_kernel::DomainError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    FileAccess,
    MalformedLine,
    UnknownCategory,
    UnresolvedReference,
    FieldNotFound,
    InvalidTable,
}

impl DiagnosticKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FileAccess => "file-access",
            Self::MalformedLine => "malformed-line",
            Self::UnknownCategory => "unknown-category",
            Self::UnresolvedReference => "unresolved-reference",
            Self::FieldNotFound => "field-not-found",
            Self::InvalidTable => "invalid-table",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal problem met while resolving one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// The token, reference or path the problem concerns.
    pub subject: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind, subject: subject.into(), message: message.into() }
    }

    /// Classify a recoverable domain error.
    pub fn from_domain(subject: impl Into<String>, err: &DomainError) -> Self {
        let kind = match err {
            DomainError::MalformedLine { .. } => DiagnosticKind::MalformedLine,
            DomainError::UnknownCategory { .. } => DiagnosticKind::UnknownCategory,
            DomainError::UnresolvedReference { .. } => DiagnosticKind::UnresolvedReference,
            DomainError::FieldNotFound { .. } => DiagnosticKind::FieldNotFound,
            DomainError::NotFound { .. } => DiagnosticKind::FileAccess,
            DomainError::InvalidRunRange { .. }
            | DomainError::InvalidConfiguration { .. }
            | DomainError::DegenerateFit { .. } => DiagnosticKind::InvalidTable,
        };
        Self::new(kind, subject, err.to_string())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.subject, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_domain_errors() {
        let err = DomainError::UnknownCategory { category: "nope".into() };
        let diag = Diagnostic::from_domain("nope.x", &err);
        assert_eq!(diag.kind, DiagnosticKind::UnknownCategory);
        assert_eq!(diag.to_string(), "[unknown-category] nope.x: Unknown general-cut category 'nope'");
    }

    #[test]
    fn serializes_kind_in_kebab_case() {
        let diag = Diagnostic::new(DiagnosticKind::FieldNotFound, "track.t9", "missing");
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["kind"], "field-not-found");
    }
}
