//! Error types for directory domain validation.

use thiserror::Error;

/// Errors returned while constructing directory domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryDomainError {
    /// The document number is empty after trimming.
    #[error("document number must not be empty")]
    EmptyDocument,

    /// The document number contains characters other than ASCII digits.
    #[error("invalid document number '{0}', expected digits only")]
    InvalidDocument(String),
}
