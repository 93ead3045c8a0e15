//! Store port for persisting and listing tasks.

use crate::directory::domain::UserId;
use crate::task::domain::{StoredTask, TaskRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Persists a new task and returns it with its store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Transport`] when the store cannot be reached
    /// or rejects the write. Once the store has accepted the task, no error
    /// is returned.
    async fn create(&self, record: &TaskRecord) -> TaskStoreResult<StoredTask>;

    /// Lists the tasks registered for a user, in store order. Stored rows
    /// that are not valid tasks are left out.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Transport`] when the store cannot be
    /// reached.
    async fn list_for_user(&self, user_id: &UserId) -> TaskStoreResult<Vec<StoredTask>>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// Network, HTTP or decoding failure.
    #[error("task store unavailable: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// A stored row is not a valid task.
    #[error("task store returned an invalid record: {0}")]
    InvalidRecord(String),
}

impl TaskStoreError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
