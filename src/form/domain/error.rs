//! Per-field messages and the form error set.

use super::FieldId;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// A user-correctable problem with one field, rendered inline next to it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The field is blank.
    #[error("{} is required", .0.label())]
    Required(FieldId),

    /// The document number contains something other than digits.
    #[error("document number must contain digits only")]
    NotDigits,

    /// Task fields were submitted without a confirmed user.
    #[error("look up a valid user first")]
    NoConfirmedUser,

    /// The status is neither `active` nor `inactive`.
    #[error("status must be \"active\" or \"inactive\"")]
    InvalidStatus,

    /// No user carries the document number.
    #[error("user not found")]
    UserNotFound,

    /// The user directory could not be reached.
    #[error("could not reach the data store, check that it is running")]
    StoreUnreachable,

    /// The document was changed after the user was confirmed.
    #[error("document does not match the loaded user")]
    DocumentMismatch,
}

/// Field errors keyed by field, in form order.
///
/// Holds at most one message per field; recording a second message for the
/// same field replaces the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FieldId, FieldError>);

impl FormErrors {
    /// Creates an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Creates an error set holding a single error.
    #[must_use]
    pub fn single(field: FieldId, error: FieldError) -> Self {
        let mut errors = Self::new();
        errors.insert(field, error);
        errors
    }

    /// Records an error for a field, replacing any previous one.
    pub fn insert(&mut self, field: FieldId, error: FieldError) {
        self.0.insert(field, error);
    }

    /// Removes a field's error, returning it.
    pub fn remove(&mut self, field: FieldId) -> Option<FieldError> {
        self.0.remove(&field)
    }

    /// Returns a field's error.
    #[must_use]
    pub fn get(&self, field: FieldId) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// Returns `true` if there are no errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {error}")?;
            first = false;
        }
        Ok(())
    }
}
