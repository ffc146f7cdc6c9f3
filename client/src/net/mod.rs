//! Data access for the dashboard screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! `mock_api` stands in for the query service with artificial latency,
//! `fixtures` holds its demo data, and `types` defines the shared schema.

pub mod fixtures;
pub mod mock_api;
pub mod types;
