//! Credential-exchange coordination on top of the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login screen and the sidebar's logout button talk to this collaborator,
//! never to the session store. It owns the staleness contract: every attempt
//! carries a generation, and completions from superseded attempts are dropped.
//!
//! TRADE-OFFS
//! ==========
//! The transport is not modelled here. Callers perform the exchange however
//! they like (today: `net::mock_api`) and report back through `complete`.

#[cfg(test)]
#[path = "exchange_test.rs"]
mod exchange_test;

use leptos::prelude::*;

use super::session::{SessionAction, SessionStore};
use crate::net::types::User;

/// Failure reported by a credential exchange.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password.")]
    InvalidCredentials,
    #[error("cancelled")]
    Cancelled,
    #[error("Authentication service unavailable: {0}")]
    Unavailable(String),
}

/// Login form input after validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Identity of one exchange attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attempt(u64);

/// Collaborator that drives session transitions for login and logout.
#[derive(Clone, Copy)]
pub struct CredentialExchange {
    session: SessionStore,
    latest: StoredValue<u64>,
}

impl CredentialExchange {
    #[must_use]
    pub fn new(session: SessionStore) -> Self {
        Self { session, latest: StoredValue::new(0) }
    }

    /// Start an attempt, superseding any attempt still in flight.
    pub fn begin(&self) -> Attempt {
        self.latest.update_value(|generation| *generation += 1);
        self.session.dispatch(SessionAction::SetLoading(true));
        self.session.dispatch(SessionAction::BeginAuth);
        Attempt(self.latest.get_value())
    }

    #[must_use]
    pub fn is_current(&self, attempt: Attempt) -> bool {
        self.latest.get_value() == attempt.0
    }

    /// Report the outcome of `attempt`. Returns `false` when the attempt was
    /// superseded and the outcome was discarded.
    pub fn complete(&self, attempt: Attempt, outcome: Result<User, AuthError>) -> bool {
        if !self.is_current(attempt) {
            log::debug!("discarding stale credential exchange result (attempt {})", attempt.0);
            return false;
        }
        match outcome {
            Ok(user) => self.session.dispatch(SessionAction::AuthSucceeded { user, is_authenticated: true }),
            Err(e) => self.session.dispatch(SessionAction::AuthFailed(e.to_string())),
        }
        true
    }

    /// Abandon the in-flight attempt, if any.
    pub fn cancel(&self) {
        self.latest.update_value(|generation| *generation += 1);
        if self.session.snapshot().is_loading {
            self.session.dispatch(SessionAction::AuthFailed(AuthError::Cancelled.to_string()));
        }
    }

    /// Sign out and invalidate any pending attempt.
    pub fn logout(&self) {
        self.latest.update_value(|generation| *generation += 1);
        self.session.dispatch(SessionAction::Logout);
    }

    /// Dismiss the last failure message.
    pub fn dismiss_error(&self) {
        self.session.dispatch(SessionAction::ClearError);
    }
}
