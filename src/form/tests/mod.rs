//! Unit tests for the form context.
