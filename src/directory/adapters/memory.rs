//! In-memory user directory for tests and local flows.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::directory::{
    domain::{DocumentNumber, User},
    ports::{DirectoryError, DirectoryResult, UserDirectory},
};

/// Thread-safe in-memory user directory.
///
/// Records keep insertion order, so the first inserted match wins a lookup.
/// The directory also counts lookups, letting tests assert that a lookup was
/// or was not attempted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    state: Arc<RwLock<InMemoryDirectoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryDirectoryState {
    users: Vec<User>,
    lookups: usize,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory seeded with the given users.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let state = InMemoryDirectoryState {
            users: users.into_iter().collect(),
            lookups: 0,
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Appends a user record.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Transport`] when lock acquisition fails.
    pub fn insert(&self, user: User) -> DirectoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| DirectoryError::transport(std::io::Error::other(err.to_string())))?;
        state.users.push(user);
        Ok(())
    }

    /// Returns how many lookups have been served.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Transport`] when lock acquisition fails.
    pub fn lookup_count(&self) -> DirectoryResult<usize> {
        let state = self
            .state
            .read()
            .map_err(|err| DirectoryError::transport(std::io::Error::other(err.to_string())))?;
        Ok(state.lookups)
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_document(&self, document: &DocumentNumber) -> DirectoryResult<Option<User>> {
        let mut state = self
            .state
            .write()
            .map_err(|err| DirectoryError::transport(std::io::Error::other(err.to_string())))?;
        state.lookups += 1;
        Ok(state.users.iter().find(|user| user.matches(document)).cloned())
    }
}
