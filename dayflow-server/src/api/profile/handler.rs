//! Profile API Handlers (self-service)

use axum::{
    Json,
    extract::{Extension, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::employee;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, validate_optional_text,
};
use shared::models::{Employee, ProfileUpdate};
use shared::{AppError, AppResult};

/// GET /api/profile - the caller's own profile, including the salary
/// structure (base, HRA, allowances) shown read-only on the profile page
pub async fn get_profile(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Employee>> {
    let employee = employee::find_by_id(&state.pool, user.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {}", user.id)))?;
    Ok(Json(employee))
}

/// PATCH /api/profile - contact fields (self-service)
///
/// The payload allow-list covers contact fields only; employment,
/// compensation, role, and employee code are not representable here.
pub async fn update_profile(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<ProfileUpdate>,
) -> AppResult<Json<Employee>> {
    validate_optional_text(&payload.full_name, "full_name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&payload.avatar_url, "avatar_url", MAX_URL_LEN)?;

    if let Some(name) = &payload.full_name
        && name.trim().is_empty()
    {
        return Err(AppError::validation("full_name must not be empty"));
    }

    let updated = employee::update_contact(&state.pool, user.id, payload).await?;

    tracing::info!(user_id = user.id, "Profile updated");

    Ok(Json(updated))
}
