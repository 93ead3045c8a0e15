//! Task records sent to and returned by the task store.

use super::{TaskDraft, TaskId, TaskStatus};
use crate::directory::domain::{User, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A task bound to its owning user, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    user_id: UserId,
    document: String,
    full_name: String,
    title: String,
    description: String,
    status: TaskStatus,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a task record read back from the
/// store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Owning user's identifier.
    pub user_id: UserId,
    /// Owning user's document number.
    pub document: String,
    /// Owning user's full name.
    pub full_name: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Task status.
    pub status: TaskStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl TaskRecord {
    /// Binds a draft to a user at the given instant.
    #[must_use]
    pub fn new(user: &User, draft: &TaskDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user.id().clone(),
            document: user.document().to_owned(),
            full_name: user.full_name().to_owned(),
            title: draft.title().as_str().to_owned(),
            description: draft.description().as_str().to_owned(),
            status: draft.status(),
            created_at,
        }
    }

    /// Binds a draft to a user, stamped with the clock's current time.
    #[must_use]
    pub fn stamped(user: &User, draft: &TaskDraft, clock: &impl Clock) -> Self {
        Self::new(user, draft, clock.utc())
    }

    /// Reconstructs a record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            user_id: data.user_id,
            document: data.document,
            full_name: data.full_name,
            title: data.title,
            description: data.description,
            status: data.status,
            created_at: data.created_at,
        }
    }

    /// Returns the owning user's identifier.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the owning user's document number.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Returns the owning user's full name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A task record as acknowledged by the store, with its assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTask {
    id: TaskId,
    record: TaskRecord,
}

impl StoredTask {
    /// Pairs a store-assigned identifier with its record.
    #[must_use]
    pub const fn new(id: TaskId, record: TaskRecord) -> Self {
        Self { id, record }
    }

    /// Returns the store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the persisted record.
    #[must_use]
    pub const fn record(&self) -> &TaskRecord {
        &self.record
    }
}
