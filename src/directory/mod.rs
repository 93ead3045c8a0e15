//! User directory and document lookup session.
//!
//! Users are looked up by document number in an external directory. A lookup
//! session holds at most one confirmed user; the form unlocks task entry only
//! while a user is confirmed. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Session services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
