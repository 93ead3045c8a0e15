//! Taskdesk: task-intake form workflow backed by a JSON store.
//!
//! A user types a document number, the workflow resolves the matching user
//! record, unlocks the task fields, validates each submission and appends a
//! task card to a newest-first list while persisting the task remotely.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure form, user and task types with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for the user directory and the task
//!   store
//! - **Adapters**: In-memory and HTTP implementations of the ports, plus the
//!   HTML card renderer
//!
//! # Modules
//!
//! - [`directory`]: User records and the document lookup session
//! - [`task`]: Task drafts, records and the task store port
//! - [`form`]: Field validation, card building, the task list and the form
//!   state machine
//! - [`store`]: Configuration and HTTP plumbing for the JSON store

pub mod directory;
pub mod form;
pub mod store;
pub mod task;
