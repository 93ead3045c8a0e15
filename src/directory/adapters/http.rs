//! HTTP user directory backed by the JSON store.

use async_trait::async_trait;
use tracing::debug;

use crate::directory::{
    domain::{DocumentNumber, User},
    ports::{DirectoryError, DirectoryResult, UserDirectory},
};
use crate::store::{JsonStoreClient, models::UserRow};

/// Resolves users through `GET {base}/{users_path}?documento={document}`.
///
/// The store's filter is a hint only: the exact string-equality match is
/// re-applied to the returned rows, so a store that ignores the query
/// parameter still yields the correct first match.
#[derive(Debug, Clone)]
pub struct HttpUserDirectory {
    client: JsonStoreClient,
}

impl HttpUserDirectory {
    /// Creates a directory over the given store client.
    #[must_use]
    pub const fn new(client: JsonStoreClient) -> Self {
        Self { client }
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self::new(row.id, row.documento, row.nombre_completo)
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn find_by_document(&self, document: &DocumentNumber) -> DirectoryResult<Option<User>> {
        let rows: Vec<UserRow> = self
            .client
            .get_json(
                &self.client.config().users_path,
                &[("documento", document.as_str())],
            )
            .await
            .map_err(DirectoryError::transport)?;
        debug!(rows = rows.len(), %document, "user rows received");
        Ok(rows
            .into_iter()
            .map(User::from)
            .find(|user| user.matches(document)))
    }
}
