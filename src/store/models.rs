//! Wire models for the JSON store collections.
//!
//! Field names follow the store's schema (`documento`, `nombre_completo`,
//! `userId`, `fecha`); adapters map these rows to and from domain values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::directory::domain::UserId;
use crate::task::domain::TaskId;

/// User record as stored in the user collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRow {
    /// Store-assigned identifier.
    pub id: UserId,
    /// Document number; the store may hold it as a string or a number.
    #[serde(deserialize_with = "scalar_as_string")]
    pub documento: String,
    /// Full display name.
    pub nombre_completo: String,
}

/// Body posted to the task collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTaskRow {
    /// Identifier of the owning user.
    #[serde(rename = "userId")]
    pub user_id: UserId,
    /// Document number of the owning user.
    pub documento: String,
    /// Full name of the owning user.
    pub nombre_completo: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Wire status value, `active` or `inactive`.
    pub status: String,
    /// Creation timestamp.
    pub fecha: DateTime<Utc>,
}

/// Reply to a task creation. Only the assigned identifier is read; the rest
/// of the echo is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedRow {
    /// Store-assigned identifier.
    pub id: TaskId,
}

/// Task record as returned by the task collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskRow {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Identifier of the owning user.
    #[serde(rename = "userId")]
    pub user_id: UserId,
    /// Document number of the owning user.
    #[serde(deserialize_with = "scalar_as_string")]
    pub documento: String,
    /// Full name of the owning user.
    pub nombre_completo: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Wire status value.
    pub status: String,
    /// Creation timestamp.
    pub fecha: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Number(number) => number.to_string(),
    })
}
