//! YCQL error types

use crate::{ErrorCode, SourceLocation, Span};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Statement compilation cannot proceed
    Error,
    /// Potential issue, compilation continues
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message reported back to the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    pub location: Option<SourceLocation>,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            location: None,
            help: None,
        }
    }

    /// Create a new warning diagnostic
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            location: None,
            help: None,
        }
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " at {}", loc)?;
        }
        if let Some(help) = &self.help {
            write!(f, " ({})", help)?;
        }
        Ok(())
    }
}

/// Error returned by semantic analysis and its collaborators.
///
/// Every variant is recoverable: the statement being analyzed is rejected and
/// the error is reported to the client. Internal corruption is never
/// represented here; it aborts analysis with a panic instead.
#[derive(Debug, Clone, Error)]
pub enum SemError {
    /// Name resolution or type checking failure inside a statement
    #[error("{code}: {message}")]
    Semantic {
        code: ErrorCode,
        message: String,
        location: Option<SourceLocation>,
        context: Option<String>,
    },

    /// Schema metadata could not be loaded or is malformed
    #[error("{code}: {message}")]
    Catalog {
        code: ErrorCode,
        message: String,
        table: Option<String>,
    },

    /// Configuration or internal failure
    #[error("{code}: {message}")]
    System {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },
}

impl SemError {
    /// Create a semantic error without a location
    pub fn semantic(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Semantic {
            code,
            message: message.into(),
            location: None,
            context: None,
        }
    }

    /// Create a catalog error
    pub fn catalog(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Catalog {
            code,
            message: message.into(),
            table: None,
        }
    }

    /// Create a system error
    pub fn system(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::System {
            code,
            message: message.into(),
            context: None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Semantic { code, .. } => *code,
            Self::Catalog { code, .. } => *code,
            Self::System { code, .. } => *code,
        }
    }

    /// Get the location if available
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::Semantic { location, .. } => location.as_ref(),
            _ => None,
        }
    }

    /// Convert to a diagnostic for the client
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::Semantic {
                code,
                message,
                location,
                context,
            } => {
                let mut diag = Diagnostic::error(*code, message.clone());
                if let Some(loc) = location {
                    diag = diag.with_location(loc.clone());
                }
                if let Some(ctx) = context {
                    diag = diag.with_help(ctx.clone());
                } else if let Some(help) = code.info().help {
                    diag = diag.with_help(help);
                }
                diag
            }
            Self::Catalog {
                code,
                message,
                table,
            } => {
                let mut diag = Diagnostic::error(*code, message.clone());
                if let Some(table) = table {
                    diag = diag.with_help(format!("table {}", table));
                }
                diag
            }
            Self::System {
                code,
                message,
                context,
            } => {
                let mut diag = Diagnostic::error(*code, message.clone());
                if let Some(ctx) = context {
                    diag = diag.with_help(ctx.clone());
                }
                diag
            }
        }
    }
}

/// Builder for located errors
pub struct ErrorBuilder {
    code: ErrorCode,
    message: String,
    location: Option<SourceLocation>,
    context: Option<String>,
}

impl ErrorBuilder {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            location: None,
            context: None,
        }
    }

    /// Start from the registered description of `code`
    pub fn from_code(code: ErrorCode) -> Self {
        Self::new(code, code.info().description)
    }

    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the span (converts to location using the statement text)
    pub fn span(mut self, span: Span, source: &str) -> Self {
        self.location = Some(SourceLocation::from_span(span, source));
        self
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Build a semantic error
    pub fn semantic(self) -> SemError {
        SemError::Semantic {
            code: self.code,
            message: self.message,
            location: self.location,
            context: self.context,
        }
    }

    /// Build a system error; the location is dropped
    pub fn system(self) -> SemError {
        SemError::System {
            code: self.code,
            message: self.message,
            context: self.context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DUPLICATE_COLUMN, TABLE_NOT_FOUND};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_builder() {
        let err = ErrorBuilder::from_code(DUPLICATE_COLUMN)
            .at(SourceLocation::new(1, 24, 23, 1))
            .context("column 'v'")
            .semantic();

        assert!(matches!(err, SemError::Semantic { .. }));
        assert_eq!(err.code(), DUPLICATE_COLUMN);
        assert_eq!(err.location().map(|l| l.column), Some(24));
        assert_eq!(err.to_string(), "YCQL0102: Duplicate Column");
    }

    #[test]
    fn test_builder_span_resolves_line() {
        let source = "SELECT *\nFROM missing";
        let err = ErrorBuilder::from_code(TABLE_NOT_FOUND)
            .span(Span::new(14, 21), source)
            .semantic();
        let loc = err.location().cloned().unwrap_or_default();
        assert_eq!((loc.line, loc.column, loc.length), (2, 6, 7));
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error(TABLE_NOT_FOUND, "Table Not Found")
            .with_location(SourceLocation::new(1, 15, 14, 4));

        insta::assert_snapshot!(diag.to_string(), @"error: YCQL0100 - Table Not Found at 1:15");
    }

    #[test]
    fn test_registered_help_without_context() {
        let err = ErrorBuilder::from_code(crate::NO_NAMESPACE_USED)
            .at(SourceLocation::new(1, 15, 14, 5))
            .semantic();
        insta::assert_snapshot!(
            err.to_diagnostic().to_string(),
            @"error: YCQL0103 - No Namespace Used at 1:15 (Qualify the table name or select a keyspace with USE)"
        );
    }

    #[test]
    fn test_catalog_error_diagnostic() {
        let err = SemError::Catalog {
            code: crate::INVALID_TABLE_SCHEMA,
            message: "hash key columns exceed key columns".to_string(),
            table: Some("ks.t".to_string()),
        };
        insta::assert_snapshot!(
            err.to_diagnostic().to_string(),
            @"error: YCQL0300 - hash key columns exceed key columns (table ks.t)"
        );
    }
}
