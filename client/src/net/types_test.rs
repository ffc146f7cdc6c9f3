use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: "u-1".to_owned(),
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        full_name: Some("Ada Lovelace".to_owned()),
        avatar_url: None,
        is_verified: true,
        created_at: 1_700_000_000_000,
        last_login_at: None,
    }
}

// =============================================================
// User
// =============================================================

#[test]
fn display_name_prefers_full_name() {
    assert_eq!(make_user().display_name(), "Ada Lovelace");
}

#[test]
fn display_name_falls_back_to_username_when_blank() {
    let mut user = make_user();
    user.full_name = Some("   ".to_owned());
    assert_eq!(user.display_name(), "ada");
    user.full_name = None;
    assert_eq!(user.display_name(), "ada");
}

#[test]
fn user_deserializes_with_optional_fields_missing() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-2",
        "username": "grace",
        "email": "grace@example.com",
        "created_at": 5
    }))
    .unwrap();
    assert_eq!(user.full_name, None);
    assert!(!user.is_verified);
    assert_eq!(user.last_login_at, None);
}

// =============================================================
// Enums
// =============================================================

#[test]
fn query_status_uses_snake_case() {
    assert_eq!(serde_json::to_value(QueryStatus::Error).unwrap(), serde_json::json!("error"));
}

#[test]
fn database_kind_value_parses_back() {
    for kind in DatabaseKind::ALL {
        assert_eq!(DatabaseKind::from_value(kind.value()), Some(kind));
    }
    assert_eq!(DatabaseKind::from_value("db2"), None);
}

#[test]
fn default_ports_follow_engine_conventions() {
    assert_eq!(DatabaseKind::Postgres.default_port(), Some(5432));
    assert_eq!(DatabaseKind::Mysql.default_port(), Some(3306));
    assert_eq!(DatabaseKind::Mongodb.default_port(), Some(27017));
    assert_eq!(DatabaseKind::SqlServer.default_port(), Some(1433));
    assert_eq!(DatabaseKind::Oracle.default_port(), Some(1521));
    assert_eq!(DatabaseKind::Sqlite.default_port(), None);
}

#[test]
fn only_sqlite_is_file_based() {
    let file_based: Vec<DatabaseKind> = DatabaseKind::ALL.into_iter().filter(|k| k.is_file_based()).collect();
    assert_eq!(file_based, vec![DatabaseKind::Sqlite]);
}

#[test]
fn database_kind_serde_matches_select_value() {
    assert_eq!(serde_json::to_value(DatabaseKind::SqlServer).unwrap(), serde_json::json!("sql_server"));
}

#[test]
fn connection_status_defaults_to_disconnected() {
    let conn: DatabaseConnection = serde_json::from_value(serde_json::json!({
        "id": "c-1",
        "name": "Analytics",
        "kind": "postgres",
        "host": "db.internal",
        "port": 5432,
        "database": "analytics"
    }))
    .unwrap();
    assert_eq!(conn.status, ConnectionStatus::Disconnected);
    assert_eq!(conn.username, "");
    assert_eq!(conn.last_used_at, None);
}
