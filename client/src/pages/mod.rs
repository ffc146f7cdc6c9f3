//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages receive session access as props; none of them
//! dispatches session transitions directly.

pub mod dashboard;
pub mod databases;
pub mod history;
pub mod login;
pub mod settings;
