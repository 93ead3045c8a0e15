//! Connection settings for the JSON store.

use serde::Deserialize;

/// Base URL of a locally running json-server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Collection holding user records.
pub const DEFAULT_USERS_PATH: &str = "usuarios";

/// Collection holding task records.
pub const DEFAULT_TASKS_PATH: &str = "tareas";

/// Location of the JSON store and the names of its collections.
///
/// # Examples
///
/// ```
/// use taskdesk::store::StoreConfig;
///
/// let config = StoreConfig::new("http://store.test:8080/").with_tasks_path("tasks");
/// assert_eq!(config.collection_url("usuarios"), "http://store.test:8080/usuarios");
/// assert_eq!(config.tasks_path, "tasks");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Scheme, host and port of the store, without a trailing collection.
    pub base_url: String,
    /// Collection queried for user lookups.
    pub users_path: String,
    /// Collection receiving registered tasks.
    pub tasks_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            users_path: DEFAULT_USERS_PATH.to_owned(),
            tasks_path: DEFAULT_TASKS_PATH.to_owned(),
        }
    }
}

impl StoreConfig {
    /// Creates a configuration for the given base URL with default
    /// collection names.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Overrides the user collection name.
    #[must_use]
    pub fn with_users_path(mut self, users_path: impl Into<String>) -> Self {
        self.users_path = users_path.into();
        self
    }

    /// Overrides the task collection name.
    #[must_use]
    pub fn with_tasks_path(mut self, tasks_path: impl Into<String>) -> Self {
        self.tasks_path = tasks_path.into();
        self
    }

    /// Joins the base URL and a collection name with exactly one slash.
    #[must_use]
    pub fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            collection.trim_matches('/')
        )
    }
}
