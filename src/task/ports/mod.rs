//! Port contracts for task registration.
//!
//! Ports define infrastructure-agnostic interfaces used by the form services.

pub mod store;

pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
