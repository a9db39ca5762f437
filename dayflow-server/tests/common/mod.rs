//! Shared test fixtures: in-memory database + server state

use dayflow_server::auth::CurrentUser;
use dayflow_server::db::repository::employee;
use dayflow_server::{Config, ServerState};
use shared::client::RegisterRequest;
use shared::models::{Employee, Role};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// In-memory SQLite pool with migrations applied.
///
/// A single connection is mandatory: every connection to `:memory:` gets
/// its own database.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .pragma("foreign_keys", "ON");

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to apply migrations");

    pool
}

/// Server state over an in-memory database
pub async fn test_state() -> (ServerState, tempfile::TempDir) {
    let work_dir = tempfile::tempdir().expect("failed to create temp work dir");
    let config = Config::with_overrides(work_dir.path().to_string_lossy(), 0);
    let pool = test_pool().await;
    (ServerState::new(config, pool), work_dir)
}

/// Register an employee and return the stored record
pub async fn register(state: &ServerState, email: &str, code: &str, role: Role) -> Employee {
    employee::create(
        &state.pool,
        RegisterRequest {
            email: email.to_string(),
            password: "correct horse battery".to_string(),
            full_name: format!("Test {code}"),
            employee_code: code.to_string(),
            role,
        },
    )
    .await
    .expect("failed to register test employee")
}

/// Resolved caller identity for an employee, as the Identity Gate
/// would produce it
pub fn as_user(employee: &Employee) -> CurrentUser {
    CurrentUser {
        id: employee.id,
        email: employee.email.clone(),
        role: employee.role,
    }
}
