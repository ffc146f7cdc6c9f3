//! Shared DTOs for the client and its simulated backend.
//!
//! DESIGN
//! ======
//! These types mirror the JSON shapes a real query service would return so the
//! mock layer can be swapped for HTTP calls without touching page code.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user, owned by the session store while authenticated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    pub username: String,
    pub email: String,
    /// Optional display name shown in the sidebar.
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Whether the email address has been verified.
    #[serde(default)]
    pub is_verified: bool,
    /// Account creation time in milliseconds since the Unix epoch.
    pub created_at: i64,
    /// Last successful sign-in in milliseconds since the Unix epoch.
    #[serde(default)]
    pub last_login_at: Option<i64>,
}

impl User {
    /// Name to show in chrome: full name when set, otherwise the username.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// Outcome of a recorded query execution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    #[default]
    Success,
    Error,
}

/// One entry in the query history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryRecord {
    pub id: String,
    /// Natural-language prompt the user typed.
    pub prompt: String,
    /// SQL generated for the prompt.
    pub sql: String,
    /// Name of the connection the query ran against.
    pub database: String,
    pub status: QueryStatus,
    /// Execution time in milliseconds.
    pub duration_ms: u32,
    pub row_count: u32,
    /// Execution time in milliseconds since the Unix epoch.
    pub executed_at: i64,
    #[serde(default)]
    pub favorite: bool,
}

/// Supported database engines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseKind {
    #[default]
    Postgres,
    Mysql,
    Mongodb,
    Sqlite,
    SqlServer,
    Oracle,
}

impl DatabaseKind {
    pub const ALL: [Self; 6] = [Self::Postgres, Self::Mysql, Self::Mongodb, Self::Sqlite, Self::SqlServer, Self::Oracle];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Postgres => "PostgreSQL",
            Self::Mysql => "MySQL",
            Self::Mongodb => "MongoDB",
            Self::Sqlite => "SQLite",
            Self::SqlServer => "Microsoft SQL Server",
            Self::Oracle => "Oracle Database",
        }
    }

    /// Conventional server port; `None` for file-based engines.
    #[must_use]
    pub fn default_port(self) -> Option<u16> {
        match self {
            Self::Postgres => Some(5432),
            Self::Mysql => Some(3306),
            Self::Mongodb => Some(27017),
            Self::Sqlite => None,
            Self::SqlServer => Some(1433),
            Self::Oracle => Some(1521),
        }
    }

    /// File-based engines need no host, port, or credentials.
    #[must_use]
    pub fn is_file_based(self) -> bool {
        self.default_port().is_none()
    }

    /// Parse the `value` attribute used by the engine `<select>`.
    #[must_use]
    pub fn from_value(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.value() == raw)
    }

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Mysql => "mysql",
            Self::Mongodb => "mongodb",
            Self::Sqlite => "sqlite",
            Self::SqlServer => "sql_server",
            Self::Oracle => "oracle",
        }
    }
}

/// Last known reachability of a connection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Connected,
    #[default]
    Disconnected,
    Error,
}

impl ConnectionStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
            Self::Error => "Error",
        }
    }
}

/// A saved database connection. Credentials are never held client-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConnection {
    pub id: String,
    pub name: String,
    pub kind: DatabaseKind,
    pub host: String,
    pub port: u16,
    /// Login name; the password is never kept after the form is submitted.
    #[serde(default)]
    pub username: String,
    pub database: String,
    #[serde(default)]
    pub status: ConnectionStatus,
    /// Last use in milliseconds since the Unix epoch, if ever used.
    #[serde(default)]
    pub last_used_at: Option<i64>,
}

/// Tabular result returned by a (simulated) query run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<serde_json::Value>>,
    pub duration_ms: u32,
}
