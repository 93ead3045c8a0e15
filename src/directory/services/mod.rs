//! Application services for user lookup.

mod session;

pub use session::{LookupError, UserLookupSession};
