//! Unit tests for the user directory context.

mod session_tests;
