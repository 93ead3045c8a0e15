//! Task-intake form workflow.
//!
//! The form is a two-phase state machine: a submit without a confirmed user
//! resolves one from the document number; a later submit validates every field
//! and registers the task, adding a card to the newest-first task list.
//!
//! - Domain types in [`domain`]
//! - Field rules and the form validator in [`validation`]
//! - Card building, the task list and the controller in [`services`]
//! - The HTML card renderer in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
