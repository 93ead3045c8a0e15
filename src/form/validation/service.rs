//! Whole-form validator.

use super::rules;
use crate::directory::domain::DocumentNumber;
use crate::form::domain::{FieldError, FieldId, FormErrors, FormFields};
use crate::task::domain::TaskDraft;

/// A form that passed every rule, with trimmed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTask {
    document: DocumentNumber,
    full_name: String,
    draft: TaskDraft,
}

impl ValidTask {
    /// Returns the validated document number.
    #[must_use]
    pub const fn document(&self) -> &DocumentNumber {
        &self.document
    }

    /// Returns the trimmed full name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the validated task draft.
    #[must_use]
    pub const fn draft(&self) -> &TaskDraft {
        &self.draft
    }
}

/// Validates every field independently and reports all failures together.
///
/// # Examples
///
/// ```
/// use taskdesk::form::domain::{FieldId, FormFields};
/// use taskdesk::form::validation::Validator;
///
/// let fields = FormFields::new()
///     .with(FieldId::Document, "123")
///     .with(FieldId::FullName, "Ana Lopez")
///     .with(FieldId::TaskTitle, "Report")
///     .with(FieldId::Description, "Q1 summary");
///
/// assert!(Validator::new().validate(&fields, true).is_ok());
///
/// let errors = Validator::new()
///     .validate(&FormFields::new(), false)
///     .expect_err("blank form is invalid");
/// assert_eq!(errors.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    /// Creates a validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates all five fields.
    ///
    /// `has_confirmed_user` reports whether a user is currently confirmed;
    /// without one the document field fails with
    /// [`FieldError::NoConfirmedUser`], which takes precedence over a format
    /// error on the same field.
    ///
    /// # Errors
    ///
    /// Returns every failing field's error when any rule fails.
    pub fn validate(
        &self,
        fields: &FormFields,
        has_confirmed_user: bool,
    ) -> Result<ValidTask, FormErrors> {
        let mut errors = FormErrors::new();

        let document = collect(
            &mut errors,
            FieldId::Document,
            rules::check_document(fields.get(FieldId::Document)),
        );
        if !has_confirmed_user {
            errors.insert(FieldId::Document, FieldError::NoConfirmedUser);
        }
        let full_name = collect(
            &mut errors,
            FieldId::FullName,
            rules::check_required(FieldId::FullName, fields.get(FieldId::FullName)),
        );
        let title = collect(
            &mut errors,
            FieldId::TaskTitle,
            rules::check_title(fields.get(FieldId::TaskTitle)),
        );
        let status = collect(
            &mut errors,
            FieldId::Status,
            rules::check_status(fields.get(FieldId::Status)),
        );
        let description = collect(
            &mut errors,
            FieldId::Description,
            rules::check_description(fields.get(FieldId::Description)),
        );

        match (document, full_name, title, status, description) {
            (Some(document), Some(full_name), Some(title), Some(status), Some(description))
                if errors.is_empty() =>
            {
                Ok(ValidTask {
                    document,
                    full_name,
                    draft: TaskDraft::new(title, description, status),
                })
            }
            _ => Err(errors),
        }
    }
}

fn collect<T>(errors: &mut FormErrors, field: FieldId, result: Result<T, FieldError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.insert(field, error);
            None
        }
    }
}
