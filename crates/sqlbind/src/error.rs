//! Error types for sqlbind

use crate::value::Value;
use thiserror::Error;

/// Result type alias for binding operations
pub type BindResult<T> = Result<T, BindError>;

/// Errors raised while binding parameters to a statement.
///
/// All of these are caller configuration errors: they are reported before any
/// statement is built, and nothing is partially bound.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindError {
    /// The number of `?` placeholders differs from the number of supplied values.
    #[error("Parameters supplied do not correspond to SQL statement: {sql} {}", format_values(.supplied))]
    MismatchedParameterCount { sql: String, supplied: Vec<Value> },

    /// A named placeholder has no entry in the parameter map.
    #[error("Unspecified parameter: {0}")]
    UnspecifiedParameter(String),

    /// Both indexed and named parameters were supplied for one query.
    #[error("Unsupported parameter configuration (uses of named and indexed parameters)")]
    MixedParameterStyle,
}

impl BindError {
    /// Create a count mismatch error for a statement and the values supplied to it
    pub fn mismatched(sql: impl Into<String>, supplied: &[Value]) -> Self {
        Self::MismatchedParameterCount {
            sql: sql.into(),
            supplied: supplied.to_vec(),
        }
    }

    /// Create an unspecified parameter error
    pub fn unspecified(name: impl Into<String>) -> Self {
        Self::UnspecifiedParameter(name.into())
    }

    /// Check if this is a count mismatch error
    pub fn is_mismatched_count(&self) -> bool {
        matches!(self, Self::MismatchedParameterCount { .. })
    }

    /// Check if this is an unspecified parameter error
    pub fn is_unspecified_parameter(&self) -> bool {
        matches!(self, Self::UnspecifiedParameter(_))
    }

    /// Check if this is a mixed parameter style error
    pub fn is_mixed_style(&self) -> bool {
        matches!(self, Self::MixedParameterStyle)
    }
}

fn format_values(values: &[Value]) -> String {
    let items: Vec<String> = values.iter().map(crate::humanize::humanize_value).collect();
    format!("[{}]", items.join(", "))
}
