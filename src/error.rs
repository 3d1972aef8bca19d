//! Error types for the Xiphos library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`XiphosError`] enum. Malformed queries carry a [`QueryErrorKind`] so
//! callers can distinguish the offending condition without parsing error
//! messages; none of these conditions terminate the process.

use std::io;

use thiserror::Error;

/// The specific way a query was malformed.
///
/// A malformed query is always a recoverable error: the caller (for example
/// the interactive loop) reports it and keeps serving queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorKind {
    /// An operator appeared before any operand (e.g. `AND cat`).
    MissingOperand,
    /// Two operands appeared with no operator between them (boolean mode).
    MissingOperator,
    /// An operand was left uncombined when the query ended.
    DanglingOperand,
    /// A phrase quote was opened but never closed (or vice versa).
    UnbalancedPhrase,
}

impl QueryErrorKind {
    /// Human-readable description of the condition.
    pub fn describe(&self) -> &'static str {
        match self {
            QueryErrorKind::MissingOperand => "operator is missing a left operand",
            QueryErrorKind::MissingOperator => "two operands with no operator between them",
            QueryErrorKind::DanglingOperand => "operand left over without a combining operator",
            QueryErrorKind::UnbalancedPhrase => "unbalanced phrase quote",
        }
    }
}

/// The main error type for Xiphos operations.
#[derive(Error, Debug)]
pub enum XiphosError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Index-related errors
    #[error("Index error: {0}")]
    Index(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Malformed query, with the specific offending condition.
    #[error("Malformed query: {}", .0.describe())]
    MalformedQuery(QueryErrorKind),

    /// Other query-related errors
    #[error("Query error: {0}")]
    Query(String),

    /// An operation that is not defined for the index variant it was
    /// applied to (e.g. NOT over positional matches).
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Storage/persistence errors (corrupt file, version mismatch, etc.)
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with XiphosError.
pub type Result<T> = std::result::Result<T, XiphosError>;

impl XiphosError {
    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        XiphosError::Index(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        XiphosError::Analysis(msg.into())
    }

    /// Create a new malformed-query error.
    pub fn malformed(kind: QueryErrorKind) -> Self {
        XiphosError::MalformedQuery(kind)
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        XiphosError::Query(msg.into())
    }

    /// Create a new unsupported-operation error.
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        XiphosError::UnsupportedOperation(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        XiphosError::Storage(msg.into())
    }
}
