//! Step definitions for task intake form scenarios.

pub mod world;

mod given;
mod then;
mod when;
