//! Attendance API Handlers

use axum::{
    Json,
    extract::{Extension, Query, State},
};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::attendance;
use crate::utils::time;
use shared::models::AttendanceRecord;
use shared::util::now_millis;
use shared::{AppError, AppResult, ErrorCode};

/// Query params for listing attendance history
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default = "default_limit")]
    pub limit: i32,
    #[serde(default)]
    pub exclude_today: bool,
}

fn default_limit() -> i32 {
    30
}

const MAX_HISTORY_LIMIT: i32 = 365;

/// POST /api/attendance/check-in - open today's session
///
/// Serialized per user: the lock covers the read-then-insert window so a
/// concurrent duplicate check-in observes AlreadyCheckedIn rather than
/// racing past the existence check.
pub async fn check_in(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<AttendanceRecord>> {
    let _guard = state.checkin_locks.acquire(user.id).await;

    let now = now_millis();
    let work_date = time::work_date_of(now, state.config.timezone);

    // One record per (user, date): a closed session also blocks re-check-in
    if attendance::find_on_date(&state.pool, user.id, work_date)
        .await?
        .is_some()
    {
        tracing::warn!(user_id = user.id, %work_date, "Duplicate check-in rejected");
        return Err(AppError::new(ErrorCode::AlreadyCheckedIn));
    }

    // One open session per user, even when it started on an earlier date
    if attendance::find_open(&state.pool, user.id).await?.is_some() {
        tracing::warn!(user_id = user.id, "Check-in with another session still open");
        return Err(AppError::new(ErrorCode::AlreadyCheckedIn));
    }

    let record = attendance::create(&state.pool, user.id, work_date, now).await?;

    tracing::info!(user_id = user.id, %work_date, "Checked in");

    Ok(Json(record))
}

/// POST /api/attendance/check-out - close the open session
///
/// Conditional write: retrying a check-out on an already-closed record
/// fails with AlreadyCheckedOut and leaves the stored timestamp unchanged.
pub async fn check_out(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<AttendanceRecord>> {
    let now = now_millis();

    let Some(open) = attendance::find_open(&state.pool, user.id).await? else {
        // Distinguish "already closed today" from "never checked in"
        let work_date = time::work_date_of(now, state.config.timezone);
        return match attendance::find_on_date(&state.pool, user.id, work_date).await? {
            Some(record) if !record.is_open() => {
                Err(AppError::new(ErrorCode::AlreadyCheckedOut))
            }
            _ => Err(AppError::new(ErrorCode::NoOpenSession)),
        };
    };

    if !attendance::close(&state.pool, open.id, now).await? {
        // Lost a race against a concurrent check-out
        return Err(AppError::new(ErrorCode::AlreadyCheckedOut));
    }

    let record = attendance::find_by_id(&state.pool, open.id)
        .await?
        .ok_or_else(|| AppError::not_found("Attendance record"))?;

    tracing::info!(user_id = user.id, work_date = %record.work_date, "Checked out");

    Ok(Json(record))
}

/// GET /api/attendance/today - today's record, if any
pub async fn today(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Option<AttendanceRecord>>> {
    let work_date = time::work_date_of(now_millis(), state.config.timezone);
    let record = attendance::find_on_date(&state.pool, user.id, work_date).await?;
    Ok(Json(record))
}

/// GET /api/attendance/history - past sessions, newest first
pub async fn history(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<AttendanceRecord>>> {
    let limit = query.limit.clamp(1, MAX_HISTORY_LIMIT);
    let exclude_date = query
        .exclude_today
        .then(|| time::work_date_of(now_millis(), state.config.timezone));

    let records = attendance::history(&state.pool, user.id, limit, exclude_date).await?;
    Ok(Json(records))
}
