//! Payroll Engine API Handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::auth::CurrentUser;
use crate::core::{PayrollFormula, ServerState};
use crate::db::repository::{employee, payroll};
use crate::utils::time;
use shared::models::PayrollRecord;
use shared::util::now_millis;
use shared::{AppError, AppResult, ErrorCode};

/// POST /api/payroll/{user_id}/process - disburse salary (HR only)
///
/// The amount is read from the directory at call time, never from a
/// cached snapshot. Appends one ledger entry; nothing is written on
/// failure.
pub async fn process(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(target_id): Path<i64>,
) -> AppResult<Json<PayrollRecord>> {
    user.require_hr()?;

    let target = employee::find_by_id(&state.pool, target_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {target_id}")))?;

    let amount = match state.config.payroll_formula {
        PayrollFormula::Base => target.base_salary,
        PayrollFormula::Gross => target.total_monthly(),
    };

    if !amount.is_finite() || amount <= 0.0 {
        return Err(AppError::with_message(
            ErrorCode::InvalidSalary,
            format!("Cannot disburse non-positive salary amount {amount}"),
        ));
    }

    let now = now_millis();
    let period = time::period_of(now, state.config.timezone);

    if state.config.payroll_unique_period
        && payroll::exists_for_period(&state.pool, target_id, &period).await?
    {
        return Err(AppError::with_message(
            ErrorCode::AlreadyPaidPeriod,
            format!("Payroll already processed for {} in {period}", target_id),
        ));
    }

    let record = payroll::create(&state.pool, target_id, amount, now, &period, user.id).await?;

    tracing::info!(
        user_id = target_id,
        amount,
        period = %period,
        processed_by = user.id,
        "Salary disbursed"
    );

    Ok(Json(record))
}

/// GET /api/payroll/mine - the caller's disbursements, newest first
pub async fn mine(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<PayrollRecord>>> {
    let records = payroll::list_for_user(&state.pool, user.id).await?;
    Ok(Json(records))
}

/// GET /api/payroll - all disbursements (HR only), newest first
pub async fn list(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<PayrollRecord>>> {
    user.require_hr()?;
    let records = payroll::list_all(&state.pool).await?;
    Ok(Json(records))
}
