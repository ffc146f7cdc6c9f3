//! Ordered route table evaluated first-match-wins.
//!
//! DESIGN
//! ======
//! Every table must end with a catch-all entry, so resolution is total: an
//! unknown path redirects instead of erroring. Validation happens once in
//! `RouteTable::new`; `resolve` never fails.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use super::ENTRY_PATH;
use super::guard::{Guard, GuardDecision};
use crate::state::session::SessionPhase;

/// Route-level screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
    History,
    Databases,
    Settings,
}

impl Screen {
    /// Screens listed in the sidebar, in display order.
    pub const NAVIGATION: [Self; 4] = [Self::Dashboard, Self::History, Self::Databases, Self::Settings];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::History => "/history",
            Self::Databases => "/databases",
            Self::Settings => "/settings",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Dashboard => "Dashboard",
            Self::History => "Query History",
            Self::Databases => "Databases",
            Self::Settings => "Settings",
        }
    }

    /// Whether the screen renders inside the shared sidebar layout.
    #[must_use]
    pub fn uses_layout(self) -> bool {
        !matches!(self, Self::Login)
    }
}

/// Path matcher for one table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathPattern {
    Exact(&'static str),
    /// Matches every path.
    Any,
}

impl PathPattern {
    fn matches(self, path: &str) -> bool {
        match self {
            Self::Exact(expected) => expected == path,
            Self::Any => true,
        }
    }
}

/// What a matched entry does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    Guarded { guard: Guard, screen: Screen },
    /// Unconditional redirect, regardless of session phase.
    Redirect(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: PathPattern,
    pub target: RouteTarget,
}

impl RouteEntry {
    #[must_use]
    pub const fn guarded(path: &'static str, guard: Guard, screen: Screen) -> Self {
        Self { pattern: PathPattern::Exact(path), target: RouteTarget::Guarded { guard, screen } }
    }

    #[must_use]
    pub const fn redirect(pattern: PathPattern, to: &'static str) -> Self {
        Self { pattern, target: RouteTarget::Redirect(to) }
    }
}

/// Result of resolving a path against the table for a session phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Render(Screen),
    Loading,
    Redirect(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("route table must end with a catch-all entry")]
    MissingFallback,
    #[error("route table has entries after its catch-all (index {index})")]
    UnreachableAfterFallback { index: usize },
    #[error("route table lists {path} more than once")]
    DuplicatePath { path: &'static str },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a validated table.
    ///
    /// # Errors
    ///
    /// Returns an error when the table does not end with exactly one
    /// catch-all, or when an exact path appears twice.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteTableError> {
        let Some(last) = entries.last() else {
            return Err(RouteTableError::MissingFallback);
        };
        if last.pattern != PathPattern::Any {
            return Err(RouteTableError::MissingFallback);
        }
        if let Some(index) = entries[..entries.len() - 1]
            .iter()
            .position(|entry| entry.pattern == PathPattern::Any)
        {
            return Err(RouteTableError::UnreachableAfterFallback { index: index + 1 });
        }
        for (i, entry) in entries.iter().enumerate() {
            if let PathPattern::Exact(path) = entry.pattern {
                if entries[..i].iter().any(|earlier| earlier.pattern == entry.pattern) {
                    return Err(RouteTableError::DuplicatePath { path });
                }
            }
        }
        Ok(Self { entries })
    }

    /// The application's routes.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            entries: vec![
                RouteEntry::redirect(PathPattern::Exact("/"), ENTRY_PATH),
                RouteEntry::guarded("/login", Guard::Unauthenticated, Screen::Login),
                RouteEntry::guarded("/dashboard", Guard::Authenticated, Screen::Dashboard),
                RouteEntry::guarded("/history", Guard::Authenticated, Screen::History),
                RouteEntry::guarded("/databases", Guard::Authenticated, Screen::Databases),
                RouteEntry::guarded("/settings", Guard::Authenticated, Screen::Settings),
                RouteEntry::redirect(PathPattern::Any, ENTRY_PATH),
            ],
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Resolve `path` for the given session phase.
    #[must_use]
    pub fn resolve(&self, path: &str, phase: SessionPhase) -> Resolution {
        let path = normalize_path(path);
        let target = self
            .entries
            .iter()
            .find(|entry| entry.pattern.matches(path))
            .map_or(RouteTarget::Redirect(ENTRY_PATH), |entry| entry.target);

        match target {
            RouteTarget::Redirect(to) => Resolution::Redirect(to),
            RouteTarget::Guarded { guard, screen } => match guard.decide(phase) {
                GuardDecision::Render => Resolution::Render(screen),
                GuardDecision::Loading => Resolution::Loading,
                GuardDecision::Redirect(to) => Resolution::Redirect(to),
            },
        }
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Drop query string, fragment, and a trailing slash (except on `/`).
#[must_use]
pub fn normalize_path(raw: &str) -> &str {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let path = &raw[..end];
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
