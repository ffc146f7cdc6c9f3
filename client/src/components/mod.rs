//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and result surfaces. They receive session
//! access as props and never mutate it.

pub mod app_layout;
pub mod loading;
pub mod result_table;
