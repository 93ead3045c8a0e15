//! User records resolved from the directory.

use super::{DocumentNumber, UserId};
use serde::{Deserialize, Serialize};

/// A user record as fetched from the directory. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    document: String,
    full_name: String,
}

impl User {
    /// Creates a user record.
    #[must_use]
    pub fn new(
        id: impl Into<UserId>,
        document: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            document: document.into(),
            full_name: full_name.into(),
        }
    }

    /// Returns the store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the document number as stored.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Returns the full display name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns `true` when the stored document string-equals `document`.
    ///
    /// Comparison is exact and case-sensitive; no trimming is applied.
    #[must_use]
    pub fn has_document(&self, document: &str) -> bool {
        self.document == document
    }

    /// Returns `true` when this user is the match for a lookup key.
    #[must_use]
    pub fn matches(&self, document: &DocumentNumber) -> bool {
        self.has_document(document.as_str())
    }
}
