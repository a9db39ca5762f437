//! Leave Workflow API Handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::leave;
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};
use shared::models::{LeaveCreate, LeaveDecide, LeaveRequest, LeaveStatus};
use shared::{AppError, AppResult, ErrorCode};

/// POST /api/leave - submit a leave request
///
/// Created in `Pending`; nothing is written when validation fails.
pub async fn submit(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<LeaveCreate>,
) -> AppResult<Json<LeaveRequest>> {
    if payload.reason.trim().is_empty() {
        return Err(AppError::new(ErrorCode::EmptyReason));
    }
    if payload.reason.len() > MAX_NOTE_LEN {
        return Err(AppError::validation(format!(
            "reason is too long ({} chars, max {MAX_NOTE_LEN})",
            payload.reason.len()
        )));
    }
    if payload.end_date < payload.start_date {
        return Err(AppError::with_message(
            ErrorCode::InvalidDateRange,
            format!(
                "End date {} precedes start date {}",
                payload.end_date, payload.start_date
            ),
        ));
    }

    let request = leave::create(
        &state.pool,
        user.id,
        payload.start_date,
        payload.end_date,
        payload.reason.trim(),
    )
    .await?;

    tracing::info!(
        user_id = user.id,
        request_id = request.id,
        start_date = %request.start_date,
        end_date = %request.end_date,
        "Leave request submitted"
    );

    Ok(Json(request))
}

/// GET /api/leave/mine - the caller's requests, newest first
pub async fn mine(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<LeaveRequest>>> {
    let requests = leave::list_for_user(&state.pool, user.id).await?;
    Ok(Json(requests))
}

/// GET /api/leave - all requests (HR only), newest first
pub async fn list(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<LeaveRequest>>> {
    user.require_hr()?;
    let requests = leave::list_all(&state.pool).await?;
    Ok(Json(requests))
}

/// POST /api/leave/{id}/decision - approve or reject (HR only)
///
/// One-way transition out of `Pending`. A request that already left
/// `Pending` cannot be re-decided; the stored status and comment stay
/// unchanged.
pub async fn decide(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<LeaveDecide>,
) -> AppResult<Json<LeaveRequest>> {
    user.require_hr()?;
    validate_optional_text(&payload.comment, "comment", MAX_NOTE_LEN)?;

    let status = LeaveStatus::from(payload.decision);
    let applied = leave::decide(
        &state.pool,
        id,
        status,
        payload.comment.as_deref(),
        user.id,
    )
    .await?;

    if !applied {
        return match leave::find_by_id(&state.pool, id).await? {
            Some(_) => Err(AppError::new(ErrorCode::LeaveNotPending)),
            None => Err(AppError::not_found(format!("Leave request {id}"))),
        };
    }

    let request = leave::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Leave request {id}")))?;

    tracing::info!(
        request_id = id,
        decided_by = user.id,
        status = %status,
        "Leave request decided"
    );

    Ok(Json(request))
}
