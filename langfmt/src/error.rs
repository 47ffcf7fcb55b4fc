//! All error types for the langfmt crate.
//!
//! Only interval parsing, catalog flattening and locale parsing can fail;
//! plural selection and placeholder substitution never do.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed interval `{interval}`: {reason}")]
    MalformedInterval { interval: String, reason: String },

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("invalid locale `{0}`")]
    InvalidLocale(String),
}

impl Error {
    /// Creates a new malformed interval error for the given input.
    pub fn malformed_interval(interval: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::MalformedInterval {
            interval: interval.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new invalid catalog error
    pub fn invalid_catalog(message: impl Into<String>) -> Self {
        Error::InvalidCatalog(message.into())
    }
}
