//! Simulated backend calls.
//!
//! Client-side (hydrate): each call waits a fixed delay via `gloo-timers` to
//! mimic network latency. Server-side (SSR) and tests: calls resolve
//! immediately with the same fixture data.
//!
//! ERROR HANDLING
//! ==============
//! Only the credential exchange can fail; everything else returns data.

#![allow(clippy::unused_async)]

use super::fixtures;
use super::types::{ConnectionStatus, DatabaseConnection, QueryRecord, QueryResult, User};
use crate::state::exchange::{AuthError, Credentials};
use crate::state::ui::AiSettings;

pub const EXCHANGE_DELAY_MS: u32 = 800;
pub const GENERATE_DELAY_MS: u32 = 1500;
pub const RUN_DELAY_MS: u32 = 600;
pub const LIST_DELAY_MS: u32 = 400;
pub const TEST_CONNECTION_DELAY_MS: u32 = 1200;
pub const SAVE_DELAY_MS: u32 = 1000;
/// How long a "Saved!" confirmation stays up.
pub const SAVED_NOTICE_MS: u32 = 2000;

async fn simulate_latency(ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}

/// Exchange credentials for a user.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` when the demo backend rejects the
/// password.
pub async fn exchange_credentials(credentials: Credentials) -> Result<User, AuthError> {
    simulate_latency(EXCHANGE_DELAY_MS).await;
    fixtures::authenticate_demo(&credentials)
}

/// "Translate" a natural-language prompt to SQL.
pub async fn generate_sql(prompt: String) -> String {
    simulate_latency(GENERATE_DELAY_MS).await;
    fixtures::sql_for_prompt(&prompt)
}

pub async fn run_query(sql: String, row_limit: u32) -> QueryResult {
    simulate_latency(RUN_DELAY_MS).await;
    fixtures::sample_result(&sql, row_limit)
}

pub async fn list_history() -> Vec<QueryRecord> {
    simulate_latency(LIST_DELAY_MS).await;
    fixtures::history()
}

pub async fn list_connections() -> Vec<DatabaseConnection> {
    simulate_latency(LIST_DELAY_MS).await;
    fixtures::connections()
}

pub async fn test_connection(connection: DatabaseConnection) -> ConnectionStatus {
    simulate_latency(TEST_CONNECTION_DELAY_MS).await;
    fixtures::check_connection(&connection)
}

/// Persist AI settings. The simulated backend echoes them back.
pub async fn save_ai_settings(settings: AiSettings) -> AiSettings {
    simulate_latency(SAVE_DELAY_MS).await;
    settings
}

/// Wait out the save confirmation.
pub async fn saved_notice() {
    simulate_latency(SAVED_NOTICE_MS).await;
}
