//! Authentication Handlers
//!
//! Registration, login, and current-user lookup

use std::time::Duration;

use axum::{Extension, Json, extract::State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::employee;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN, validate_required_text,
};
use shared::client::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};
use shared::models::Employee;
use shared::{AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

fn user_info(employee: &Employee) -> UserInfo {
    UserInfo {
        id: employee.id,
        email: employee.email.clone(),
        full_name: employee.full_name.clone(),
        employee_code: employee.employee_code.clone(),
        role: employee.role,
    }
}

/// Register handler
///
/// Creates the employee profile and returns a token. Role and employee
/// code are fixed here and immutable afterwards.
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Json<LoginResponse>> {
    validate_required_text(&req.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&req.password, "password", MAX_PASSWORD_LEN)?;
    validate_required_text(&req.full_name, "full_name", MAX_NAME_LEN)?;
    validate_required_text(&req.employee_code, "employee_code", MAX_SHORT_TEXT_LEN)?;

    let created = employee::create(&state.pool, req).await?;

    let token = state
        .jwt_service
        .generate_token(created.id, &created.email, created.role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(
        user_id = created.id,
        email = %created.email,
        role = %created.role,
        "Employee registered"
    );

    Ok(Json(LoginResponse {
        token,
        user: user_info(&created),
    }))
}

/// Login handler
///
/// Authenticates credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let found = employee::find_by_email(&state.pool, &req.email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error for both unknown email and bad password, to prevent
    // account enumeration
    let employee = match found {
        Some(e) => {
            let password_valid = e
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                tracing::warn!(email = %req.email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            e
        }
        None => {
            tracing::warn!(email = %req.email, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let token = state
        .jwt_service
        .generate_token(employee.id, &employee.email, employee.role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(
        user_id = employee.id,
        email = %employee.email,
        role = %employee.role,
        "User logged in successfully"
    );

    Ok(Json(LoginResponse {
        token,
        user: user_info(&employee),
    }))
}

/// Get current user info
pub async fn me(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<UserInfo>> {
    let employee = employee::find_by_id(&state.pool, user.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {}", user.id)))?;
    Ok(Json(user_info(&employee)))
}

/// Logout handler
pub async fn logout(Extension(user): Extension<CurrentUser>) -> AppResult<Json<()>> {
    tracing::info!(user_id = user.id, email = %user.email, "User logged out");
    Ok(Json(()))
}
