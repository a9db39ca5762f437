//! Employee Directory API Handlers (HR views)

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::employee;
use crate::utils::validation::{MAX_NAME_LEN, validate_money, validate_optional_text};
use shared::models::{Employee, EmployeeSummary, EmploymentUpdate, Role};
use shared::{AppError, AppResult};

/// Query params for the directory listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub role: Option<Role>,
}

/// GET /api/employees - directory listing (HR only)
pub async fn list(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<EmployeeSummary>>> {
    user.require_hr()?;
    let employees = employee::list(&state.pool, query.role).await?;
    Ok(Json(employees))
}

/// GET /api/employees/{id} - full profile (HR only)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    user.require_hr()?;
    let employee = employee::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {id}")))?;
    Ok(Json(employee))
}

/// PATCH /api/employees/{id} - employment fields (HR only)
///
/// The payload allow-list covers job and compensation fields only;
/// role and employee code are not representable here.
pub async fn update_employment(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<EmploymentUpdate>,
) -> AppResult<Json<Employee>> {
    user.require_hr()?;
    validate_optional_text(&payload.department, "department", MAX_NAME_LEN)?;
    validate_optional_text(&payload.designation, "designation", MAX_NAME_LEN)?;
    for (field, value) in payload.salary_fields() {
        if let Some(amount) = value {
            validate_money(amount, field)?;
        }
    }

    let updated = employee::update_employment(&state.pool, id, payload).await?;

    tracing::info!(user_id = id, updated_by = user.id, "Employment fields updated");

    Ok(Json(updated))
}
