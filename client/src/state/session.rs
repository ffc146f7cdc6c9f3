//! Session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and identity-aware screens read this state; only the
//! transitions below may change it. `App` builds one `SessionStore` at the
//! composition root and passes it down explicitly.
//!
//! DESIGN
//! ======
//! Transitions are a pure `reduce(&state, action)` so every rule can be tested
//! without a reactive runtime. `SessionStore` applies them inside a single
//! signal update, which serializes writers and keeps readers on a consistent
//! snapshot.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::User;

/// Authentication status of the running client.
///
/// Invariant: `is_authenticated` implies `user.is_some()` and `error.is_none()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub is_authenticated: bool,
    /// True while a credential exchange is in flight.
    pub is_loading: bool,
    pub user: Option<User>,
    /// Last authentication failure message.
    pub error: Option<String>,
}

/// Logical phase derived from `SessionState`; never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// A credential exchange is in flight; guards suspend their decision.
    Undetermined,
    Authenticated,
    Unauthenticated,
}

impl SessionState {
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.is_loading {
            SessionPhase::Undetermined
        } else if self.is_authenticated {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        }
    }
}

/// Session transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    /// Set or clear the in-flight flag. Callers raise it before `BeginAuth`.
    SetLoading(bool),
    /// An attempt is starting: clears `error`, leaves `is_loading` alone.
    BeginAuth,
    /// The only transition that may store a user.
    AuthSucceeded { user: User, is_authenticated: bool },
    AuthFailed(String),
    Logout,
    ClearError,
}

impl SessionAction {
    /// Short tag for logs; never includes user data or messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetLoading(_) => "set_loading",
            Self::BeginAuth => "begin_auth",
            Self::AuthSucceeded { .. } => "auth_succeeded",
            Self::AuthFailed(_) => "auth_failed",
            Self::Logout => "logout",
            Self::ClearError => "clear_error",
        }
    }
}

/// Apply one transition. Pure: no I/O, no failure modes.
#[must_use]
pub fn reduce(state: &SessionState, action: SessionAction) -> SessionState {
    match action {
        SessionAction::SetLoading(is_loading) => SessionState { is_loading, ..state.clone() },
        SessionAction::BeginAuth => SessionState { error: None, ..state.clone() },
        SessionAction::AuthSucceeded { user, is_authenticated } => SessionState {
            is_authenticated,
            is_loading: false,
            // A user without an authenticated flag would break the invariant.
            user: is_authenticated.then_some(user),
            error: None,
        },
        SessionAction::AuthFailed(message) => SessionState {
            is_authenticated: false,
            is_loading: false,
            user: None,
            error: Some(message),
        },
        SessionAction::Logout => SessionState::default(),
        SessionAction::ClearError => SessionState { error: None, ..state.clone() },
    }
}

/// Lifecycle-scoped handle over the session signal.
///
/// `Copy` so it can be passed to every component that needs it.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(SessionState::default())
    }

    #[must_use]
    pub fn with_state(initial: SessionState) -> Self {
        Self { state: RwSignal::new(initial) }
    }

    /// Apply a transition atomically.
    pub fn dispatch(&self, action: SessionAction) {
        let kind = action.kind();
        self.state.update(|state| *state = reduce(state, action));
        log::debug!("session {kind} -> {:?}", self.state.with_untracked(SessionState::phase));
    }

    /// Read-only view for screens. They cannot mutate through it.
    #[must_use]
    pub fn reader(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// Current state without subscribing the caller.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// Current phase, tracked.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state.with(SessionState::phase)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
