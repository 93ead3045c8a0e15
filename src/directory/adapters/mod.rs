//! Adapter implementations for the user directory port.

pub mod http;
pub mod memory;
