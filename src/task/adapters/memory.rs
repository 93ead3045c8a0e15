//! In-memory task store for tests and local flows.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::directory::domain::UserId;
use crate::task::{
    domain::{StoredTask, TaskId, TaskRecord},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store assigning sequential numeric identifiers,
/// starting at 1, the way json-server does for an empty collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<StoredTask>,
    last_id: u64,
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every stored task in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Transport`] when lock acquisition fails.
    pub fn all(&self) -> TaskStoreResult<Vec<StoredTask>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::transport(std::io::Error::other(err.to_string())))?;
        Ok(state.tasks.clone())
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn create(&self, record: &TaskRecord) -> TaskStoreResult<StoredTask> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::transport(std::io::Error::other(err.to_string())))?;
        state.last_id += 1;
        let stored = StoredTask::new(TaskId::Number(state.last_id), record.clone());
        state.tasks.push(stored.clone());
        Ok(stored)
    }

    async fn list_for_user(&self, user_id: &UserId) -> TaskStoreResult<Vec<StoredTask>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::transport(std::io::Error::other(err.to_string())))?;
        Ok(state
            .tasks
            .iter()
            .filter(|task| task.record().user_id() == user_id)
            .cloned()
            .collect())
    }
}
