//! Identifier and validated scalar types for the user directory.

use super::DirectoryDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned user identifier.
///
/// json-server keeps whatever identifier the record was created with, so both
/// numeric and textual identifiers are accepted and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    /// Numeric identifier.
    Number(u64),
    /// Textual identifier.
    Text(String),
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

/// Trimmed, digits-only document number used as the lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentNumber(String);

impl DocumentNumber {
    /// Creates a validated document number.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::EmptyDocument`] when the value is blank
    /// and [`DirectoryDomainError::InvalidDocument`] when it contains anything
    /// other than ASCII digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdesk::directory::domain::DocumentNumber;
    ///
    /// let document = DocumentNumber::new(" 1024 ").expect("digits only");
    /// assert_eq!(document.as_str(), "1024");
    /// assert!(DocumentNumber::new("10-24").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, DirectoryDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(DirectoryDomainError::EmptyDocument);
        }
        if !normalized.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(DirectoryDomainError::InvalidDocument(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the document number as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DocumentNumber {
    type Error = DirectoryDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DocumentNumber> for String {
    fn from(value: DocumentNumber) -> Self {
        value.0
    }
}

impl AsRef<str> for DocumentNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DocumentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
