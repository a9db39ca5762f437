//! Leave Request Repository

use super::RepoResult;
use chrono::NaiveDate;
use shared::models::{LeaveRequest, LeaveStatus};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, user_id, start_date, end_date, reason, status, admin_comment, decided_by, created_at, decided_at";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<LeaveRequest>> {
    let request = sqlx::query_as::<_, LeaveRequest>(&format!(
        "SELECT {COLUMNS} FROM leave_request WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(request)
}

/// Create a request in `Pending`. Range and reason are validated by the
/// caller before anything is written.
pub async fn create(
    pool: &SqlitePool,
    user_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    reason: &str,
) -> RepoResult<LeaveRequest> {
    let id = snowflake_id();
    let now = now_millis();

    sqlx::query(
        "INSERT INTO leave_request (id, user_id, start_date, end_date, reason, status, created_at) VALUES (?, ?, ?, ?, ?, 'Pending', ?)",
    )
    .bind(id)
    .bind(user_id)
    .bind(start_date)
    .bind(end_date)
    .bind(reason)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(LeaveRequest {
        id,
        user_id,
        start_date,
        end_date,
        reason: reason.to_string(),
        status: LeaveStatus::Pending,
        admin_comment: None,
        decided_by: None,
        created_at: now,
        decided_at: None,
    })
}

/// Apply an HR decision. Compare-and-set on `status = 'Pending'`: of two
/// concurrent decisions only one lands, the loser sees false and the
/// stored status/comment are untouched.
pub async fn decide(
    pool: &SqlitePool,
    id: i64,
    status: LeaveStatus,
    comment: Option<&str>,
    decided_by: i64,
) -> RepoResult<bool> {
    let now = now_millis();
    let rows = sqlx::query(
        "UPDATE leave_request SET status = ?1, admin_comment = ?2, decided_by = ?3, decided_at = ?4 WHERE id = ?5 AND status = 'Pending'",
    )
    .bind(status)
    .bind(comment)
    .bind(decided_by)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}

/// Requests submitted by one employee, newest first
pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> RepoResult<Vec<LeaveRequest>> {
    let requests = sqlx::query_as::<_, LeaveRequest>(&format!(
        "SELECT {COLUMNS} FROM leave_request WHERE user_id = ? ORDER BY created_at DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(requests)
}

/// All requests (HR view), newest first
pub async fn list_all(pool: &SqlitePool) -> RepoResult<Vec<LeaveRequest>> {
    let requests = sqlx::query_as::<_, LeaveRequest>(&format!(
        "SELECT {COLUMNS} FROM leave_request ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(requests)
}
