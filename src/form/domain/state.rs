//! Phases of the form state machine.

/// Phase of the task-intake form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormState {
    /// No user is confirmed; a submit looks the document up.
    #[default]
    AwaitingDocument,
    /// A user is confirmed; a submit validates and registers a task.
    AwaitingTaskSubmission,
}

impl FormState {
    /// Returns `true` when task fields accept input.
    #[must_use]
    pub const fn task_fields_enabled(self) -> bool {
        matches!(self, Self::AwaitingTaskSubmission)
    }
}
