//! Individual field rules.
//!
//! Each rule is a pure function over one raw field value. Rules return the
//! parsed value on success or the [`FieldError`] to show next to the field.

use crate::directory::domain::{DirectoryDomainError, DocumentNumber};
use crate::form::domain::{FieldError, FieldId};
use crate::task::domain::{TaskDescription, TaskStatus, TaskTitle};

/// Checks that the document is present and made of digits only.
///
/// # Errors
///
/// Returns [`FieldError::Required`] for a blank value and
/// [`FieldError::NotDigits`] for anything containing non-digits.
pub fn check_document(raw: &str) -> Result<DocumentNumber, FieldError> {
    DocumentNumber::new(raw).map_err(|err| match err {
        DirectoryDomainError::EmptyDocument => FieldError::Required(FieldId::Document),
        DirectoryDomainError::InvalidDocument(_) => FieldError::NotDigits,
    })
}

/// Checks that a text field is non-empty after trimming and returns it
/// trimmed.
///
/// # Errors
///
/// Returns [`FieldError::Required`] naming `field` when the value is blank.
pub fn check_required(field: FieldId, raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required(field));
    }
    Ok(trimmed.to_owned())
}

/// Checks the task title.
///
/// # Errors
///
/// Returns [`FieldError::Required`] when the title is blank.
pub fn check_title(raw: &str) -> Result<TaskTitle, FieldError> {
    TaskTitle::new(raw).map_err(|_| FieldError::Required(FieldId::TaskTitle))
}

/// Checks the task description.
///
/// # Errors
///
/// Returns [`FieldError::Required`] when the description is blank.
pub fn check_description(raw: &str) -> Result<TaskDescription, FieldError> {
    TaskDescription::new(raw).map_err(|_| FieldError::Required(FieldId::Description))
}

/// Checks that the status is exactly `active` or `inactive`.
///
/// # Errors
///
/// Returns [`FieldError::InvalidStatus`] for any other value, including an
/// empty one.
pub fn check_status(raw: &str) -> Result<TaskStatus, FieldError> {
    TaskStatus::try_from(raw).map_err(|_| FieldError::InvalidStatus)
}
