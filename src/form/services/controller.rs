//! Form controller: the two-phase submit state machine.

use chrono::Local;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::{ListPresenter, TaskCardFactory};
use crate::directory::{
    domain::{DocumentNumber, User},
    ports::{DirectoryError, UserDirectory},
    services::{LookupError, UserLookupSession},
};
use crate::form::{
    domain::{FieldError, FieldId, FormErrors, FormState, FormView},
    validation::{Validator, rules},
};
use crate::task::{
    domain::{StoredTask, TaskRecord},
    ports::{TaskStore, TaskStoreError},
};

/// Alert raised when a validated task could not be sent to the store.
const REGISTRATION_ALERT: &str =
    "The task could not be registered. Check that the data store is running and submit again.";

/// Successful result of a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The document resolved to a user; task fields are now enabled. No task
    /// was registered by this submit.
    UserConfirmed(User),
    /// The task was stored and its card added to the list head.
    TaskRegistered(StoredTask),
}

/// Why a submit did not move the form forward.
///
/// Every variant has already been reflected in the [`FormView`] by the time it
/// is returned.
#[derive(Debug, Clone, Error)]
pub enum FormError {
    /// One or more fields failed validation.
    #[error("invalid form: {0}")]
    Validation(FormErrors),

    /// No user carries the document.
    #[error("no user with document {0}")]
    NotFound(DocumentNumber),

    /// The user directory could not be consulted.
    #[error(transparent)]
    Lookup(#[from] DirectoryError),

    /// The document was edited away from the confirmed user's document.
    #[error("document '{entered}' does not match the confirmed user's document '{confirmed}'")]
    StateMismatch {
        /// Document currently in the field.
        entered: String,
        /// Document of the user that was confirmed.
        confirmed: String,
    },

    /// The validated task could not be stored.
    #[error("task registration failed: {0}")]
    Registration(#[from] TaskStoreError),

    /// An operation needing a confirmed user ran without one.
    #[error("no user is confirmed")]
    NoConfirmedUser,
}

/// Result type for form controller operations.
pub type FormResult<T> = Result<T, FormError>;

/// Orchestrates lookups, validation, registration and the task list.
///
/// The controller owns the lookup session, the form view and the task list.
/// Its phase is derived from the session: [`FormState::AwaitingTaskSubmission`]
/// exactly while a user is confirmed. Events take `&mut self`, so one submit
/// completes, network round trips included, before the next event is handled.
pub struct FormController<U, T, C>
where
    U: UserDirectory,
    T: TaskStore,
    C: Clock + Send + Sync,
{
    session: UserLookupSession<U>,
    tasks: Arc<T>,
    clock: Arc<C>,
    validator: Validator,
    cards: TaskCardFactory,
    list: ListPresenter,
    view: FormView,
}

impl<U, T, C> FormController<U, T, C>
where
    U: UserDirectory,
    T: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a controller awaiting a document, with an empty task list.
    #[must_use]
    pub fn new(directory: Arc<U>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            session: UserLookupSession::new(directory),
            tasks,
            clock,
            validator: Validator::new(),
            cards: TaskCardFactory::new(),
            list: ListPresenter::new(),
            view: FormView::new(),
        }
    }

    /// Replaces the card factory.
    #[must_use]
    pub fn with_card_factory(mut self, cards: TaskCardFactory) -> Self {
        self.cards = cards;
        self
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn state(&self) -> FormState {
        if self.session.is_confirmed() {
            FormState::AwaitingTaskSubmission
        } else {
            FormState::AwaitingDocument
        }
    }

    /// Returns the form view.
    #[must_use]
    pub const fn view(&self) -> &FormView {
        &self.view
    }

    /// Returns the task list.
    #[must_use]
    pub const fn list(&self) -> &ListPresenter {
        &self.list
    }

    /// Returns the confirmed user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.session.current()
    }

    /// Applies an edit to a field and clears that field's error.
    ///
    /// Edits to fields that do not accept input are ignored and return
    /// `false`. Editing the document while a user is confirmed drops the user
    /// immediately and locks the task fields again.
    pub fn input(&mut self, field: FieldId, value: impl Into<String>) -> bool {
        if !self.view.is_enabled(field) {
            debug!(field = field.as_str(), "ignoring edit to a locked field");
            return false;
        }
        self.view.set_value(field, value.into());
        self.view.clear_error(field);
        if field == FieldId::Document && self.session.is_confirmed() {
            debug!("document edited, releasing confirmed user");
            self.release_user();
        }
        true
    }

    /// Sets a field's value without an input event, as autofill or a
    /// scripted update would. Errors are kept and no transition fires, so a
    /// filled document can disagree with the confirmed user until the next
    /// submit detects it.
    ///
    /// Locked fields are left untouched and `false` is returned.
    pub fn fill(&mut self, field: FieldId, value: impl Into<String>) -> bool {
        if !self.view.is_enabled(field) {
            return false;
        }
        self.view.set_value(field, value.into());
        true
    }

    /// Handles a submit event.
    ///
    /// Without a confirmed user the document is looked up and, on success,
    /// the user is confirmed; that submit never registers a task. With a
    /// confirmed user the form is validated and the task registered.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] describing why the form did not advance. The
    /// view already shows the matching inline error or alert.
    pub async fn submit(&mut self) -> FormResult<SubmitOutcome> {
        self.view.dismiss_alert();
        match self.state() {
            FormState::AwaitingDocument => self.resolve_user().await,
            FormState::AwaitingTaskSubmission => self.register_task().await,
        }
    }

    /// Lists the tasks stored for the confirmed user.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NoConfirmedUser`] without a confirmed user and
    /// [`FormError::Registration`] when the store fails.
    pub async fn tasks_for_current_user(&self) -> FormResult<Vec<StoredTask>> {
        let user = self.session.current().ok_or(FormError::NoConfirmedUser)?;
        Ok(self.tasks.list_for_user(user.id()).await?)
    }

    async fn resolve_user(&mut self) -> FormResult<SubmitOutcome> {
        self.view.clear_error(FieldId::Document);
        self.view.clear_error(FieldId::FullName);

        let document = match rules::check_document(self.view.value(FieldId::Document)) {
            Ok(document) => document,
            Err(error) => {
                self.view.set_error(FieldId::Document, error.clone());
                return Err(FormError::Validation(FormErrors::single(
                    FieldId::Document,
                    error,
                )));
            }
        };

        match self.session.lookup(&document).await {
            Ok(user) => {
                info!(user_id = %user.id(), %document, "user confirmed");
                self.view.show_user(user.full_name());
                self.session.confirm(user.clone());
                Ok(SubmitOutcome::UserConfirmed(user))
            }
            Err(LookupError::NotFound(missing)) => {
                debug!(document = %missing, "user not found");
                self.view.set_error(FieldId::Document, FieldError::UserNotFound);
                Err(FormError::NotFound(missing))
            }
            Err(LookupError::Transport(error)) => {
                warn!(%error, "user lookup failed");
                self.view
                    .set_error(FieldId::Document, FieldError::StoreUnreachable);
                Err(FormError::Lookup(error))
            }
        }
    }

    async fn register_task(&mut self) -> FormResult<SubmitOutcome> {
        let user = self
            .session
            .current()
            .cloned()
            .ok_or(FormError::NoConfirmedUser)?;

        let entered = self.view.value(FieldId::Document).trim().to_owned();
        if !user.has_document(&entered) {
            debug!(%entered, confirmed = user.document(), "document no longer matches");
            self.release_user();
            self.view
                .set_error(FieldId::Document, FieldError::DocumentMismatch);
            return Err(FormError::StateMismatch {
                entered,
                confirmed: user.document().to_owned(),
            });
        }

        let valid = match self
            .validator
            .validate(self.view.fields(), self.session.is_confirmed())
        {
            Ok(valid) => valid,
            Err(errors) => {
                debug!(%errors, "task form rejected");
                self.view.replace_errors(errors.clone());
                return Err(FormError::Validation(errors));
            }
        };
        self.view.replace_errors(FormErrors::new());

        let created_at = self.clock.utc();
        let record = TaskRecord::new(&user, valid.draft(), created_at);
        let stored = match self.tasks.create(&record).await {
            Ok(stored) => stored,
            Err(error) => {
                warn!(%error, "task registration failed");
                self.view.raise_alert(REGISTRATION_ALERT);
                return Err(FormError::Registration(error));
            }
        };

        let card = self
            .cards
            .build(&user, valid.draft(), &created_at.with_timezone(&Local));
        self.list.insert_front(card);
        self.view.reset_task_fields();
        info!(task_id = %stored.id(), count = self.list.count(), "task registered");
        Ok(SubmitOutcome::TaskRegistered(stored))
    }

    fn release_user(&mut self) {
        self.session.clear();
        self.view.hide_user();
    }
}
