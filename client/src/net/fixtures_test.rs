use super::*;

fn creds(email: &str, password: &str) -> Credentials {
    Credentials { email: email.to_owned(), password: password.to_owned() }
}

// =============================================================
// authenticate_demo
// =============================================================

#[test]
fn demo_auth_accepts_long_password() {
    let user = authenticate_demo(&creds("ada@example.com", "correct-horse")).unwrap();
    assert_eq!(user.username, "ada");
    assert_eq!(user.email, "ada@example.com");
    assert!(user.is_verified);
    assert!(uuid::Uuid::parse_str(&user.id).is_ok());
}

#[test]
fn demo_auth_rejects_short_password() {
    assert_eq!(authenticate_demo(&creds("ada@example.com", "short")), Err(AuthError::InvalidCredentials));
}

#[test]
fn demo_auth_falls_back_when_local_part_empty() {
    let user = authenticate_demo(&creds("@example.com", "long-enough")).unwrap();
    assert_eq!(user.username, "analyst");
}

// =============================================================
// sql_for_prompt / sample_result
// =============================================================

#[test]
fn count_prompts_produce_count_query() {
    assert!(sql_for_prompt("How many customers do we have?").contains("COUNT(*)"));
}

#[test]
fn revenue_prompts_group_by_month() {
    let sql = sql_for_prompt("monthly REVENUE");
    assert!(sql.contains("SUM(o.amount)"));
    assert!(sql.contains("GROUP BY"));
}

#[test]
fn unmatched_prompt_falls_back_to_recent_orders() {
    assert!(sql_for_prompt("something else entirely").starts_with("SELECT *\nFROM orders"));
}

#[test]
fn sample_result_respects_row_limit() {
    let sql = sql_for_prompt("Top products");
    assert_eq!(sample_result(&sql, 100).rows.len(), 3);
    assert_eq!(sample_result(&sql, 2).rows.len(), 2);
}

#[test]
fn sample_result_rows_match_column_count() {
    for prompt in ["count", "revenue", "top", "customers", "orders"] {
        let result = sample_result(&sql_for_prompt(prompt), 500);
        assert!(result.rows.iter().all(|row| row.len() == result.columns.len()), "{prompt}");
    }
}

// =============================================================
// history / connections
// =============================================================

#[test]
fn history_is_newest_first() {
    let items = history();
    assert!(items.windows(2).all(|w| w[0].executed_at >= w[1].executed_at));
}

#[test]
fn history_references_known_connections() {
    let names: Vec<String> = connections().into_iter().map(|c| c.name).collect();
    assert!(history().iter().all(|q| names.contains(&q.database)));
}

#[test]
fn check_connection_flags_invalid_hosts() {
    let mut conn = connections().remove(0);
    assert_eq!(check_connection(&conn), ConnectionStatus::Connected);
    conn.host = "db.invalid".to_owned();
    assert_eq!(check_connection(&conn), ConnectionStatus::Error);
    conn.kind = DatabaseKind::Sqlite;
    assert_eq!(check_connection(&conn), ConnectionStatus::Connected);
}
