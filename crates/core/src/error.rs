//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a local validation failure: the offending input is
/// rejected as a whole and nothing is partially computed. Callers surface the
/// message next to the form field and decide whether to resubmit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A purchase line carried a bad quantity, price, or percentage.
    #[error("invalid line item: {0}")]
    InvalidLineItem(String),

    /// An expiry or reference date could not be parsed.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A value failed validation (e.g. blank supplier name, bad thresholds).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated (e.g. editing a received order).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found (domain-level).
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn invalid_line_item(msg: impl Into<String>) -> Self {
        Self::InvalidLineItem(msg.into())
    }

    pub fn invalid_date(msg: impl Into<String>) -> Self {
        Self::InvalidDate(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
