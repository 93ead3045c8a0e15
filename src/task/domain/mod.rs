//! Domain model for task registration.
//!
//! Drafts exist only between form edits and submission; records are the
//! payload persisted by the task store.

mod draft;
mod error;
mod ids;
mod record;
mod status;

pub use draft::{TaskDescription, TaskDraft, TaskTitle};
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use record::{PersistedTaskData, StoredTask, TaskRecord};
pub use status::TaskStatus;
