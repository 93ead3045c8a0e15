//! Unit tests for the lookup session.

use std::sync::Arc;

use crate::directory::{
    adapters::memory::InMemoryUserDirectory,
    domain::{DocumentNumber, User},
    services::{LookupError, UserLookupSession},
};
use rstest::{fixture, rstest};

type TestSession = UserLookupSession<InMemoryUserDirectory>;

#[fixture]
fn directory() -> InMemoryUserDirectory {
    InMemoryUserDirectory::with_users([
        User::new(1_u64, "123", "Ana Lopez"),
        User::new(2_u64, "456", "Carlos"),
        User::new(3_u64, "123", "Shadowed Duplicate"),
    ])
}

#[fixture]
fn session(directory: InMemoryUserDirectory) -> TestSession {
    UserLookupSession::new(Arc::new(directory))
}

fn document(raw: &str) -> DocumentNumber {
    DocumentNumber::new(raw).expect("valid document")
}

#[rstest]
#[tokio::test]
async fn lookup_returns_first_exact_match(session: TestSession) {
    let user = session
        .lookup(&document("123"))
        .await
        .expect("lookup should succeed");
    assert_eq!(user, User::new(1_u64, "123", "Ana Lopez"));
}

#[rstest]
#[tokio::test]
async fn lookup_reports_missing_user_as_not_found(session: TestSession) {
    let result = session.lookup(&document("999")).await;
    assert!(matches!(result, Err(LookupError::NotFound(ref missing)) if missing.as_str() == "999"));
}

#[rstest]
#[tokio::test]
async fn lookup_does_not_confirm(session: TestSession) {
    session
        .lookup(&document("456"))
        .await
        .expect("lookup should succeed");
    assert!(session.current().is_none());
}

#[rstest]
fn confirm_and_clear_transition_the_session(mut session: TestSession) {
    assert!(!session.is_confirmed());

    session.confirm(User::new(2_u64, "456", "Carlos"));
    assert!(session.is_confirmed());
    assert_eq!(session.current().map(User::full_name), Some("Carlos"));

    assert!(session.clear());
    assert!(!session.is_confirmed());
}

#[rstest]
fn clear_is_idempotent(mut session: TestSession) {
    session.confirm(User::new(1_u64, "123", "Ana Lopez"));
    assert!(session.clear());
    assert!(!session.clear());
    assert!(session.current().is_none());
}
