//! Attendance Repository

use super::RepoResult;
use chrono::NaiveDate;
use shared::models::AttendanceRecord;
use shared::util::snowflake_id;
use sqlx::SqlitePool;

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<AttendanceRecord>> {
    let record = sqlx::query_as::<_, AttendanceRecord>(
        "SELECT id, user_id, work_date, check_in, check_out FROM attendance WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(record)
}

/// The user's record on a given work date, open or closed
pub async fn find_on_date(
    pool: &SqlitePool,
    user_id: i64,
    work_date: NaiveDate,
) -> RepoResult<Option<AttendanceRecord>> {
    let record = sqlx::query_as::<_, AttendanceRecord>(
        "SELECT id, user_id, work_date, check_in, check_out FROM attendance WHERE user_id = ? AND work_date = ?",
    )
    .bind(user_id)
    .bind(work_date)
    .fetch_optional(pool)
    .await?;
    Ok(record)
}

/// The user's open session, if any (at most one exists)
pub async fn find_open(pool: &SqlitePool, user_id: i64) -> RepoResult<Option<AttendanceRecord>> {
    let record = sqlx::query_as::<_, AttendanceRecord>(
        "SELECT id, user_id, work_date, check_in, check_out FROM attendance WHERE user_id = ? AND check_out IS NULL LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(record)
}

/// Open a new session. The caller serializes per user; the unique indexes
/// on (user_id, work_date) and on open sessions are the storage backstop.
pub async fn create(
    pool: &SqlitePool,
    user_id: i64,
    work_date: NaiveDate,
    check_in: i64,
) -> RepoResult<AttendanceRecord> {
    let id = snowflake_id();
    sqlx::query(
        "INSERT INTO attendance (id, user_id, work_date, check_in, check_out) VALUES (?, ?, ?, ?, NULL)",
    )
    .bind(id)
    .bind(user_id)
    .bind(work_date)
    .bind(check_in)
    .execute(pool)
    .await?;

    Ok(AttendanceRecord {
        id,
        user_id,
        work_date,
        check_in,
        check_out: None,
    })
}

/// Close a session. Conditional write: only succeeds while the record is
/// still open, so a repeated check-out can never overwrite the timestamp.
/// Returns false when the record was already closed.
pub async fn close(pool: &SqlitePool, id: i64, check_out: i64) -> RepoResult<bool> {
    let rows = sqlx::query("UPDATE attendance SET check_out = ?1 WHERE id = ?2 AND check_out IS NULL")
        .bind(check_out)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Session history, newest work date first
pub async fn history(
    pool: &SqlitePool,
    user_id: i64,
    limit: i32,
    exclude_date: Option<NaiveDate>,
) -> RepoResult<Vec<AttendanceRecord>> {
    let records = match exclude_date {
        Some(date) => {
            sqlx::query_as::<_, AttendanceRecord>(
                "SELECT id, user_id, work_date, check_in, check_out FROM attendance WHERE user_id = ? AND work_date <> ? ORDER BY work_date DESC LIMIT ?",
            )
            .bind(user_id)
            .bind(date)
            .bind(limit)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, AttendanceRecord>(
                "SELECT id, user_id, work_date, check_in, check_out FROM attendance WHERE user_id = ? ORDER BY work_date DESC LIMIT ?",
            )
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await?
        }
    };
    Ok(records)
}
