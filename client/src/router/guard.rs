//! Guard variants and their decision rule.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::{ENTRY_PATH, LANDING_PATH};
use crate::state::session::SessionPhase;

/// Which session phase a route admits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    /// Protected screens.
    Authenticated,
    /// Entry screens such as login.
    Unauthenticated,
}

/// What a guard wants done with the navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Session still resolving; show a neutral indicator and wait.
    Loading,
    Redirect(&'static str),
}

impl Guard {
    #[must_use]
    pub fn decide(self, phase: SessionPhase) -> GuardDecision {
        match (self, phase) {
            (_, SessionPhase::Undetermined) => GuardDecision::Loading,
            (Self::Authenticated, SessionPhase::Authenticated)
            | (Self::Unauthenticated, SessionPhase::Unauthenticated) => GuardDecision::Render,
            (Self::Authenticated, SessionPhase::Unauthenticated) => GuardDecision::Redirect(ENTRY_PATH),
            (Self::Unauthenticated, SessionPhase::Authenticated) => GuardDecision::Redirect(LANDING_PATH),
        }
    }
}
