//! Form validation.
//!
//! Individual field rules live in [`rules`]; [`Validator`] applies all of them
//! and reports every failing field at once.

pub mod rules;
mod service;

pub use service::{ValidTask, Validator};
