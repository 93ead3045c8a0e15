//! Thin JSON client over `reqwest` for the store collections.

use reqwest::{Client, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use super::{StoreConfig, StoreError};

/// HTTP client for a json-server style store.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct JsonStoreClient {
    config: StoreConfig,
    http: Client,
}

impl JsonStoreClient {
    /// Creates a client with a default `reqwest` client.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    /// Creates a client reusing an existing `reqwest` client.
    #[must_use]
    pub const fn with_http_client(config: StoreConfig, http: Client) -> Self {
        Self { config, http }
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Fetches a collection, optionally filtered by query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the request fails, the store answers with
    /// a non-success status, or the body cannot be decoded as `T`.
    pub async fn get_json<T>(
        &self,
        collection: &str,
        query: &[(&str, &str)],
    ) -> Result<T, StoreError>
    where
        T: DeserializeOwned,
    {
        let url = self.config.collection_url(collection);
        debug!(%url, ?query, "GET");
        let request = self.http.get(&url).query(query);
        receive_json(url, request).await
    }

    /// Posts a JSON body to a collection and decodes the created record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the request fails, the store answers with
    /// a non-success status, or the body cannot be decoded as `T`.
    pub async fn post_json<B, T>(&self, collection: &str, body: &B) -> Result<T, StoreError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.config.collection_url(collection);
        debug!(%url, "POST");
        let request = self.http.post(&url).json(body);
        receive_json(url, request).await
    }
}

async fn receive_json<T>(url: String, request: RequestBuilder) -> Result<T, StoreError>
where
    T: DeserializeOwned,
{
    let sent = match request.send().await {
        Ok(sent) => sent,
        Err(source) => return Err(StoreError::Transport { url, source }),
    };
    let response = ensure_success(url.clone(), sent)?;
    response
        .json::<T>()
        .await
        .map_err(|source| StoreError::Decode { url, source })
}

fn ensure_success(url: String, response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(StoreError::Status { url, status })
    }
}
