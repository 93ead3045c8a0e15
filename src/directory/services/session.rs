//! Lookup session holding the currently confirmed user.

use crate::directory::{
    domain::{DocumentNumber, User},
    ports::{DirectoryError, UserDirectory},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Outcome of a failed lookup.
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    /// No user carries the document. This is an expected outcome.
    #[error("no user with document {0}")]
    NotFound(DocumentNumber),
    /// The directory could not be consulted.
    #[error(transparent)]
    Transport(#[from] DirectoryError),
}

/// Holds at most one confirmed user.
///
/// The session moves from "no user" to "user confirmed" on [`confirm`] and
/// back on [`clear`]. Looking a user up does not confirm it; callers decide
/// when a resolved user becomes the session's user.
///
/// [`confirm`]: Self::confirm
/// [`clear`]: Self::clear
#[derive(Debug)]
pub struct UserLookupSession<D>
where
    D: UserDirectory,
{
    directory: Arc<D>,
    current: Option<User>,
}

impl<D> UserLookupSession<D>
where
    D: UserDirectory,
{
    /// Creates a session with no confirmed user.
    #[must_use]
    pub const fn new(directory: Arc<D>) -> Self {
        Self {
            directory,
            current: None,
        }
    }

    /// Resolves the user carrying `document`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] when no user matches and
    /// [`LookupError::Transport`] when the directory fails.
    pub async fn lookup(&self, document: &DocumentNumber) -> Result<User, LookupError> {
        debug!(%document, "looking up user");
        self.directory
            .find_by_document(document)
            .await?
            .ok_or_else(|| LookupError::NotFound(document.clone()))
    }

    /// Makes `user` the confirmed user, replacing any previous one.
    pub fn confirm(&mut self, user: User) {
        self.current = Some(user);
    }

    /// Drops the confirmed user. Returns `true` if a user was dropped.
    pub fn clear(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Returns the confirmed user, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Returns `true` while a user is confirmed.
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        self.current.is_some()
    }
}
