//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` holds authentication status and its pure transitions; `exchange`
//! is the collaborator that drives those transitions for login and logout;
//! `ui` keeps presentation preferences apart from both.

pub mod exchange;
pub mod session;
pub mod ui;
