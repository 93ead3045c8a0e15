//! JSON store plumbing shared by the HTTP adapters.
//!
//! The remote store is a json-server style API exposing a user collection and
//! a task collection. This module owns the connection settings, the wire
//! models of both collections and a thin client that issues the requests and
//! maps failures into [`StoreError`].

mod client;
mod config;
mod error;
pub mod models;

pub use client::JsonStoreClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_TASKS_PATH, DEFAULT_USERS_PATH, StoreConfig};
pub use error::StoreError;
