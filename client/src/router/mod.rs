//! Route protection: guard decisions and the application route table.
//!
//! ARCHITECTURE
//! ============
//! `guard` turns a session phase into render/loading/redirect. `table` maps
//! paths to guarded screens, first match wins, and ends with a catch-all.
//! `outlet` is the Leptos component that applies both on every navigation.

pub mod guard;
pub mod outlet;
pub mod table;

/// Where unauthenticated users are sent.
pub const ENTRY_PATH: &str = "/login";

/// Where authenticated users land.
pub const LANDING_PATH: &str = "/dashboard";
