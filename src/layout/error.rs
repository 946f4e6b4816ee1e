//! Error types for grid resolution

use thiserror::Error;

use crate::parser::ast::Span;

/// Errors that can occur resolving a template or reading its regions
#[derive(Debug, Error)]
pub enum GridError {
    /// Rows and columns don't line up (ragged rows, or the column clause
    /// declares a different count than the rows reference)
    #[error("template shape error: {reason}")]
    Shape {
        reason: String,
        span: Span,
        expected: usize,
        found: usize,
    },

    /// A region name absent from the parsed template was requested
    #[error("unknown region '{name}'")]
    UnknownRegion {
        name: String,
        suggestions: Vec<String>,
    },
}

impl GridError {
    /// Create a shape error for a row whose cell count doesn't match
    pub fn ragged_row(row_index: usize, expected: usize, found: usize, span: Span) -> Self {
        Self::Shape {
            reason: format!(
                "row {} declares {} cells but the template has {} columns",
                row_index + 1,
                found,
                expected
            ),
            span,
            expected,
            found,
        }
    }

    /// Create a shape error for a mismatched column clause
    pub fn column_clause_mismatch(expected: usize, found: usize, span: Span) -> Self {
        Self::Shape {
            reason: format!(
                "column clause declares {} sizes but rows reference {} columns",
                found, expected
            ),
            span,
            expected,
            found,
        }
    }

    /// Create an unknown region error with suggestions
    pub fn unknown_region(name: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self::UnknownRegion {
            name: name.into(),
            suggestions,
        }
    }

    /// Get the source span if available
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::Shape { span, .. } => Some(span),
            Self::UnknownRegion { .. } => None,
        }
    }

    /// Get suggestions if available
    pub fn suggestions(&self) -> Option<&[String]> {
        match self {
            Self::UnknownRegion { suggestions, .. } => Some(suggestions),
            _ => None,
        }
    }
}
