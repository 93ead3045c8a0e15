//! Directory port for resolving users by document number.

use crate::directory::domain::{DocumentNumber, User};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// User lookup contract.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Finds the user whose document string-equals `document`.
    ///
    /// When several records share the document the first one in directory
    /// order wins. Returns `None` when no record matches; a missing user is a
    /// normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Transport`] when the directory cannot be
    /// reached or answers with an unusable response.
    async fn find_by_document(&self, document: &DocumentNumber) -> DirectoryResult<Option<User>>;
}

/// Errors returned by user directory implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// Network, HTTP or decoding failure.
    #[error("user directory unavailable: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
