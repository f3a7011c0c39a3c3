//! Error types for report generation.
//!
//! `RowError` fails a single report row; the generators record it and keep
//! going. `LoadError` fails the whole run before any row is built.

use std::path::PathBuf;
use thiserror::Error;

/// Why a single record could not be turned into a report row
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    /// A nested field the column schema needs is absent (or null)
    #[error("missing field `{path}`")]
    MissingField { path: String },

    /// The field exists but holds the wrong kind of JSON value
    #[error("field `{path}` is not {expected}")]
    WrongType { path: String, expected: &'static str },

    /// A rule string without the ` ==> ` separator
    #[error("malformed rule `{rule}` (expected `<lhs> ==> <rhs>`)")]
    MalformedRule { rule: String },
}

impl RowError {
    pub fn missing(path: &str) -> Self {
        RowError::MissingField { path: path.to_string() }
    }

    pub fn wrong_type(path: &str, expected: &'static str) -> Self {
        RowError::WrongType { path: path.to_string(), expected }
    }
}

/// Failure to read the records file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON array of experiment records, found {0}")]
    NotAnArray(&'static str),

    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },
}
