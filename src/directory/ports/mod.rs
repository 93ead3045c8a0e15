//! Port contracts for user lookup.
//!
//! Ports define infrastructure-agnostic interfaces used by directory services.

pub mod directory;

pub use directory::{DirectoryError, DirectoryResult, UserDirectory};
