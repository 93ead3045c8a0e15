//! Task drafts, task records and the task store.
//!
//! A task is drafted in the form, validated, then sent to the external task
//! store together with the confirmed user's identity. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
