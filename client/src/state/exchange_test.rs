use super::*;
use crate::state::session::{SessionPhase, SessionState};

fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        full_name: None,
        avatar_url: None,
        is_verified: false,
        created_at: 0,
        last_login_at: None,
    }
}

fn setup() -> (Owner, SessionStore, CredentialExchange) {
    let owner = Owner::new();
    owner.set();
    let session = SessionStore::new();
    let exchange = CredentialExchange::new(session);
    (owner, session, exchange)
}

#[test]
fn begin_marks_session_undetermined_and_clears_error() {
    let (_owner, session, exchange) = setup();
    session.dispatch(SessionAction::AuthFailed("old".to_owned()));

    let _attempt = exchange.begin();

    let state = session.snapshot();
    assert_eq!(state.phase(), SessionPhase::Undetermined);
    assert!(state.error.is_none());
}

#[test]
fn successful_completion_authenticates() {
    let (_owner, session, exchange) = setup();
    let attempt = exchange.begin();

    assert!(exchange.complete(attempt, Ok(user("u-1"))));

    let state = session.snapshot();
    assert_eq!(state.phase(), SessionPhase::Authenticated);
    assert_eq!(state.user.map(|u| u.id), Some("u-1".to_owned()));
}

#[test]
fn failed_completion_records_message() {
    let (_owner, session, exchange) = setup();
    let attempt = exchange.begin();

    assert!(exchange.complete(attempt, Err(AuthError::InvalidCredentials)));

    let state = session.snapshot();
    assert_eq!(state.phase(), SessionPhase::Unauthenticated);
    assert_eq!(state.error.as_deref(), Some("Invalid email or password."));
}

#[test]
fn late_success_after_logout_is_discarded() {
    let (_owner, session, exchange) = setup();
    let attempt = exchange.begin();
    exchange.logout();

    assert!(!exchange.complete(attempt, Ok(user("u-1"))));
    assert_eq!(session.snapshot(), SessionState::default());
}

#[test]
fn newer_attempt_supersedes_older_one() {
    let (_owner, session, exchange) = setup();
    let first = exchange.begin();
    let second = exchange.begin();
    assert!(!exchange.is_current(first));
    assert!(exchange.is_current(second));

    assert!(!exchange.complete(first, Err(AuthError::InvalidCredentials)));
    assert_eq!(session.snapshot().phase(), SessionPhase::Undetermined);

    assert!(exchange.complete(second, Ok(user("u-2"))));
    assert_eq!(session.snapshot().user.map(|u| u.id), Some("u-2".to_owned()));
}

#[test]
fn cancel_fails_in_flight_attempt_and_ignores_its_result() {
    let (_owner, session, exchange) = setup();
    let attempt = exchange.begin();

    exchange.cancel();
    assert_eq!(session.snapshot().error.as_deref(), Some("cancelled"));
    assert!(!session.snapshot().is_loading);

    assert!(!exchange.complete(attempt, Ok(user("u-1"))));
    assert!(!session.snapshot().is_authenticated);
}

#[test]
fn cancel_when_idle_leaves_session_alone() {
    let (_owner, session, exchange) = setup();
    let attempt = exchange.begin();
    exchange.complete(attempt, Ok(user("u-1")));
    let before = session.snapshot();

    exchange.cancel();
    assert_eq!(session.snapshot(), before);
}

#[test]
fn dismiss_error_clears_message() {
    let (_owner, session, exchange) = setup();
    let attempt = exchange.begin();
    exchange.complete(attempt, Err(AuthError::Unavailable("timeout".to_owned())));
    assert_eq!(
        session.snapshot().error.as_deref(),
        Some("Authentication service unavailable: timeout")
    );

    exchange.dismiss_error();
    assert!(session.snapshot().error.is_none());
}
