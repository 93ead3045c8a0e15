//! HTTP task store backed by the JSON store.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::directory::domain::UserId;
use crate::store::{
    JsonStoreClient,
    models::{CreatedRow, NewTaskRow, TaskRow},
};
use crate::task::{
    domain::{PersistedTaskData, StoredTask, TaskRecord, TaskStatus},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Persists tasks with `POST {base}/{tasks_path}` and lists them with
/// `GET {base}/{tasks_path}?userId={id}`.
///
/// A 2xx reply to the POST means the task is stored: only its `id` is read
/// back. Listed rows that cannot be mapped to a task, such as rows with an
/// unknown status, are skipped with a warning.
#[derive(Debug, Clone)]
pub struct HttpTaskStore {
    client: JsonStoreClient,
}

impl HttpTaskStore {
    /// Creates a task store over the given store client.
    #[must_use]
    pub const fn new(client: JsonStoreClient) -> Self {
        Self { client }
    }
}

impl From<&TaskRecord> for NewTaskRow {
    fn from(record: &TaskRecord) -> Self {
        Self {
            user_id: record.user_id().clone(),
            documento: record.document().to_owned(),
            nombre_completo: record.full_name().to_owned(),
            title: record.title().to_owned(),
            description: record.description().to_owned(),
            status: record.status().as_str().to_owned(),
            fecha: record.created_at(),
        }
    }
}

impl TryFrom<TaskRow> for StoredTask {
    type Error = TaskStoreError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let status = TaskStatus::try_from(row.status.as_str())
            .map_err(|err| TaskStoreError::InvalidRecord(format!("task {}: {err}", row.id)))?;
        let record = TaskRecord::from_persisted(PersistedTaskData {
            user_id: row.user_id,
            document: row.documento,
            full_name: row.nombre_completo,
            title: row.title,
            description: row.description,
            status,
            created_at: row.fecha,
        });
        Ok(Self::new(row.id, record))
    }
}

#[async_trait]
impl TaskStore for HttpTaskStore {
    async fn create(&self, record: &TaskRecord) -> TaskStoreResult<StoredTask> {
        let body = NewTaskRow::from(record);
        let created: CreatedRow = self
            .client
            .post_json(&self.client.config().tasks_path, &body)
            .await
            .map_err(TaskStoreError::transport)?;
        debug!(task_id = %created.id, "task created");
        Ok(StoredTask::new(created.id, record.clone()))
    }

    async fn list_for_user(&self, user_id: &UserId) -> TaskStoreResult<Vec<StoredTask>> {
        let user_key = user_id.to_string();
        let rows: Vec<TaskRow> = self
            .client
            .get_json(
                &self.client.config().tasks_path,
                &[("userId", user_key.as_str())],
            )
            .await
            .map_err(TaskStoreError::transport)?;
        Ok(rows
            .into_iter()
            .filter_map(|row| match StoredTask::try_from(row) {
                Ok(task) => Some(task),
                Err(error) => {
                    warn!(%error, %user_id, "skipping unreadable task row");
                    None
                }
            })
            .collect())
    }
}
