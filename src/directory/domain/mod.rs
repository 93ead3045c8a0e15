//! Domain model for user lookup.

mod error;
mod ids;
mod user;

pub use error::DirectoryDomainError;
pub use ids::{DocumentNumber, UserId};
pub use user::User;
