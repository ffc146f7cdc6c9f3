//! Deterministic demo data behind the simulated backend.
//!
//! Everything here is synchronous and pure so pages and tests can share it;
//! `mock_api` adds the artificial latency.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use serde_json::json;

use super::types::{ConnectionStatus, DatabaseConnection, DatabaseKind, QueryRecord, QueryResult, QueryStatus, User};
use crate::state::exchange::{AuthError, Credentials};

/// Shortest password the demo backend accepts.
pub const MIN_DEMO_PASSWORD_LEN: usize = 8;

const DEMO_ACCOUNT_CREATED_AT: i64 = 1_704_067_200_000;
const DEMO_LOGIN_AT: i64 = 1_718_000_000_000;

/// Accept any well-formed credentials with a long-enough password.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` for short passwords.
pub fn authenticate_demo(credentials: &Credentials) -> Result<User, AuthError> {
    if credentials.password.chars().count() < MIN_DEMO_PASSWORD_LEN {
        return Err(AuthError::InvalidCredentials);
    }
    let username = credentials
        .email
        .split('@')
        .next()
        .filter(|local| !local.is_empty())
        .unwrap_or("analyst")
        .to_owned();
    Ok(User {
        id: uuid::Uuid::new_v4().to_string(),
        username,
        email: credentials.email.clone(),
        full_name: None,
        avatar_url: None,
        is_verified: true,
        created_at: DEMO_ACCOUNT_CREATED_AT,
        last_login_at: Some(DEMO_LOGIN_AT),
    })
}

/// Pick a canned SQL statement by keyword.
#[must_use]
pub fn sql_for_prompt(prompt: &str) -> String {
    let lower = prompt.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if has(&["how many", "count", "number of"]) {
        "SELECT COUNT(*) AS total\nFROM customers\nWHERE created_at >= NOW() - INTERVAL '30 days';".to_owned()
    } else if has(&["revenue", "sales", "total"]) {
        "SELECT DATE_TRUNC('month', o.created_at) AS month,\n       SUM(o.amount) AS revenue\nFROM orders o\nGROUP BY 1\nORDER BY 1 DESC;".to_owned()
    } else if has(&["top", "best", "most"]) {
        "SELECT p.name, SUM(oi.quantity) AS units_sold\nFROM order_items oi\nJOIN products p ON p.id = oi.product_id\nGROUP BY p.name\nORDER BY units_sold DESC\nLIMIT 10;".to_owned()
    } else if has(&["customer", "user", "client"]) {
        "SELECT id, name, email, created_at\nFROM customers\nORDER BY created_at DESC\nLIMIT 50;".to_owned()
    } else {
        "SELECT *\nFROM orders\nORDER BY created_at DESC\nLIMIT 100;".to_owned()
    }
}

/// Canned result set for a generated statement, capped at `row_limit`.
#[must_use]
pub fn sample_result(sql: &str, row_limit: u32) -> QueryResult {
    let (columns, rows): (Vec<&str>, Vec<Vec<serde_json::Value>>) = if sql.contains("COUNT(*)") {
        (vec!["total"], vec![vec![json!(1284)]])
    } else if sql.contains("revenue") {
        (
            vec!["month", "revenue"],
            vec![
                vec![json!("2024-06-01"), json!(48_210.5)],
                vec![json!("2024-05-01"), json!(45_903.0)],
                vec![json!("2024-04-01"), json!(41_377.25)],
            ],
        )
    } else if sql.contains("units_sold") {
        (
            vec!["name", "units_sold"],
            vec![
                vec![json!("Mechanical Keyboard"), json!(412)],
                vec![json!("USB-C Hub"), json!(389)],
                vec![json!("27\" Monitor"), json!(201)],
            ],
        )
    } else {
        (
            vec!["id", "name", "email", "created_at"],
            vec![
                vec![json!(1042), json!("Jane Cooper"), json!("jane@acme.test"), json!("2024-06-11")],
                vec![json!(1041), json!("Wade Warren"), json!("wade@acme.test"), json!("2024-06-10")],
                vec![json!(1040), json!("Esther Howard"), json!("esther@acme.test"), json!("2024-06-08")],
            ],
        )
    };
    let limit = usize::try_from(row_limit).unwrap_or(usize::MAX);
    QueryResult {
        columns: columns.into_iter().map(str::to_owned).collect(),
        rows: rows.into_iter().take(limit).collect(),
        duration_ms: 42,
    }
}

/// Demo query history, newest first.
#[must_use]
pub fn history() -> Vec<QueryRecord> {
    let record = |id: &str,
                  prompt: &str,
                  database: &str,
                  status: QueryStatus,
                  duration_ms: u32,
                  row_count: u32,
                  executed_at: i64,
                  favorite: bool| {
        QueryRecord {
            id: id.to_owned(),
            prompt: prompt.to_owned(),
            sql: sql_for_prompt(prompt),
            database: database.to_owned(),
            status,
            duration_ms,
            row_count,
            executed_at,
            favorite,
        }
    };
    vec![
        record("q-5", "Show monthly revenue for this year", "Production", QueryStatus::Success, 245, 6, 1_718_290_800_000, true),
        record("q-4", "How many customers signed up last month?", "Analytics", QueryStatus::Success, 120, 1, 1_718_204_400_000, false),
        record("q-3", "Top selling products", "Production", QueryStatus::Success, 310, 10, 1_718_118_000_000, true),
        record("q-2", "List inactive users with open invoices", "Staging", QueryStatus::Error, 15, 0, 1_718_031_600_000, false),
        record("q-1", "Recent orders", "Production", QueryStatus::Success, 88, 100, 1_717_945_200_000, false),
    ]
}

/// Demo saved connections.
#[must_use]
pub fn connections() -> Vec<DatabaseConnection> {
    vec![
        DatabaseConnection {
            id: "db-1".to_owned(),
            name: "Production".to_owned(),
            kind: DatabaseKind::Postgres,
            host: "prod-db.internal".to_owned(),
            port: 5432,
            username: "app_reader".to_owned(),
            database: "app".to_owned(),
            status: ConnectionStatus::Connected,
            last_used_at: Some(1_718_290_800_000),
        },
        DatabaseConnection {
            id: "db-2".to_owned(),
            name: "Analytics".to_owned(),
            kind: DatabaseKind::Mysql,
            host: "warehouse.internal".to_owned(),
            port: 3306,
            username: "analyst".to_owned(),
            database: "analytics".to_owned(),
            status: ConnectionStatus::Connected,
            last_used_at: Some(1_718_204_400_000),
        },
        DatabaseConnection {
            id: "db-3".to_owned(),
            name: "Staging".to_owned(),
            kind: DatabaseKind::Postgres,
            host: "staging-db.invalid".to_owned(),
            port: 5432,
            username: "app_reader".to_owned(),
            database: "app_staging".to_owned(),
            status: ConnectionStatus::Error,
            last_used_at: Some(1_718_031_600_000),
        },
    ]
}

/// Simulated reachability check.
#[must_use]
pub fn check_connection(connection: &DatabaseConnection) -> ConnectionStatus {
    if connection.kind.is_file_based() {
        return ConnectionStatus::Connected;
    }
    let host = connection.host.trim();
    if host.is_empty() || host.ends_with(".invalid") {
        ConnectionStatus::Error
    } else {
        ConnectionStatus::Connected
    }
}
