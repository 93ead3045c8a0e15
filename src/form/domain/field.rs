//! Form field identifiers and raw field values.

use crate::task::domain::TaskStatus;
use std::fmt;

/// Identifies one input of the task-intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    /// Document number used to look the user up.
    Document,
    /// Full name of the confirmed user. Always read-only.
    FullName,
    /// Task title.
    TaskTitle,
    /// Task status, `active` or `inactive`.
    Status,
    /// Task description.
    Description,
}

impl FieldId {
    /// Fields that stay disabled until a user is confirmed.
    pub const TASK_FIELDS: [Self; 3] = [Self::TaskTitle, Self::Status, Self::Description];

    /// Returns the field's identifier name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::FullName => "fullName",
            Self::TaskTitle => "taskTitle",
            Self::Status => "status",
            Self::Description => "description",
        }
    }

    /// Returns the label used in messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Document => "Document number",
            Self::FullName => "Full name",
            Self::TaskTitle => "Task title",
            Self::Status => "Status",
            Self::Description => "Task description",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw, unvalidated field contents as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    document: String,
    full_name: String,
    task_title: String,
    status: String,
    description: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            document: String::new(),
            full_name: String::new(),
            task_title: String::new(),
            status: TaskStatus::default().as_str().to_owned(),
            description: String::new(),
        }
    }
}

impl FormFields {
    /// Creates empty fields with the status preset to `active`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, returning the updated fields.
    #[must_use]
    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Returns a field's raw value.
    #[must_use]
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Document => &self.document,
            FieldId::FullName => &self.full_name,
            FieldId::TaskTitle => &self.task_title,
            FieldId::Status => &self.status,
            FieldId::Description => &self.description,
        }
    }

    /// Replaces a field's raw value.
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let slot = match field {
            FieldId::Document => &mut self.document,
            FieldId::FullName => &mut self.full_name,
            FieldId::TaskTitle => &mut self.task_title,
            FieldId::Status => &mut self.status,
            FieldId::Description => &mut self.description,
        };
        *slot = value.into();
    }

    /// Clears title and description and resets the status to `active`.
    pub fn reset_task_fields(&mut self) {
        self.task_title.clear();
        self.description.clear();
        self.status = TaskStatus::default().as_str().to_owned();
    }
}
