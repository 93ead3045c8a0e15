//! Adapter implementations for the task store port.

pub mod http;
pub mod memory;
