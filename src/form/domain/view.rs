//! Observable state of the form inputs.

use super::{FieldError, FieldId, FormErrors, FormFields, FormState};

/// What a UI shows: field values, which fields accept input, inline errors and
/// the blocking alert.
///
/// The view is owned and mutated by the form controller; callers read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    fields: FormFields,
    errors: FormErrors,
    alert: Option<String>,
    phase: FormState,
}

impl FormView {
    /// Creates a view with empty fields and task fields disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every field's raw value.
    #[must_use]
    pub const fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Returns a field's raw value.
    #[must_use]
    pub fn value(&self, field: FieldId) -> &str {
        self.fields.get(field)
    }

    /// Returns `true` if the field accepts input.
    ///
    /// The document field always does; the full name field never does, since
    /// it is filled from the confirmed user; task fields do only while a user
    /// is confirmed.
    #[must_use]
    pub const fn is_enabled(&self, field: FieldId) -> bool {
        match field {
            FieldId::Document => true,
            FieldId::FullName => false,
            FieldId::TaskTitle | FieldId::Status | FieldId::Description => {
                self.phase.task_fields_enabled()
            }
        }
    }

    /// Returns the inline error of a field.
    #[must_use]
    pub fn error(&self, field: FieldId) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// Returns every inline error.
    #[must_use]
    pub const fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Returns the blocking alert, if one is raised.
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub(crate) fn set_value(&mut self, field: FieldId, value: String) {
        self.fields.set(field, value);
    }

    pub(crate) fn set_error(&mut self, field: FieldId, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub(crate) fn clear_error(&mut self, field: FieldId) {
        self.errors.remove(field);
    }

    pub(crate) fn replace_errors(&mut self, errors: FormErrors) {
        self.errors = errors;
    }

    pub(crate) fn raise_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    pub(crate) fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Shows the confirmed user's name and unlocks task entry.
    pub(crate) fn show_user(&mut self, full_name: &str) {
        self.fields.set(FieldId::FullName, full_name);
        self.phase = FormState::AwaitingTaskSubmission;
    }

    /// Blanks the name, clears and locks the task fields, and drops their
    /// errors.
    pub(crate) fn hide_user(&mut self) {
        self.fields.set(FieldId::FullName, String::new());
        self.fields.reset_task_fields();
        self.phase = FormState::AwaitingDocument;
        self.errors.remove(FieldId::FullName);
        for field in FieldId::TASK_FIELDS {
            self.errors.remove(field);
        }
    }

    /// Clears the task fields after a successful registration.
    pub(crate) fn reset_task_fields(&mut self) {
        self.fields.reset_task_fields();
    }
}
