//! Registration, login, and identity resolution

mod common;

use axum::Json;
use axum::extract::{Extension, State};
use common::{as_user, register, test_state};
use dayflow_server::ErrorCode;
use dayflow_server::api::auth;
use dayflow_server::auth::CurrentUser;
use shared::client::{LoginRequest, RegisterRequest};
use shared::models::Role;

#[tokio::test]
async fn test_register_login_roundtrip() {
    let (state, _guard) = test_state().await;

    let response = auth::register(
        State(state.clone()),
        Json(RegisterRequest {
            email: "new@example.com".to_string(),
            password: "a-strong-password".to_string(),
            full_name: "New Person".to_string(),
            employee_code: "EMP-401".to_string(),
            role: Role::Employee,
        }),
    )
    .await
    .expect("registration should succeed")
    .0;
    assert_eq!(response.user.email, "new@example.com");
    assert_eq!(response.user.role, Role::Employee);

    // The issued token resolves back to the same identity
    let claims = state
        .jwt_service
        .validate_token(&response.token)
        .expect("token should validate");
    let user = CurrentUser::try_from(claims).unwrap();
    assert_eq!(user.id, response.user.id);
    assert!(!user.is_hr());

    // Login with the same credentials works
    let login = auth::login(
        State(state.clone()),
        Json(LoginRequest {
            email: "new@example.com".to_string(),
            password: "a-strong-password".to_string(),
        }),
    )
    .await
    .expect("login should succeed")
    .0;
    assert_eq!(login.user.id, response.user.id);
}

#[tokio::test]
async fn test_login_failures_are_uniform() {
    let (state, _guard) = test_state().await;
    register(&state, "kat@example.com", "EMP-402", Role::Employee).await;

    // Wrong password and unknown email produce the same error
    let wrong_pw = auth::login(
        State(state.clone()),
        Json(LoginRequest {
            email: "kat@example.com".to_string(),
            password: "wrong".to_string(),
        }),
    )
    .await
    .expect_err("wrong password must fail");
    assert_eq!(wrong_pw.code, ErrorCode::InvalidCredentials);

    let unknown = auth::login(
        State(state.clone()),
        Json(LoginRequest {
            email: "nobody@example.com".to_string(),
            password: "whatever".to_string(),
        }),
    )
    .await
    .expect_err("unknown email must fail");
    assert_eq!(unknown.code, ErrorCode::InvalidCredentials);
    assert_eq!(wrong_pw.message, unknown.message);
}

#[tokio::test]
async fn test_register_validates_required_fields() {
    let (state, _guard) = test_state().await;

    let err = auth::register(
        State(state.clone()),
        Json(RegisterRequest {
            email: "  ".to_string(),
            password: "a-strong-password".to_string(),
            full_name: "Someone".to_string(),
            employee_code: "EMP-403".to_string(),
            role: Role::Employee,
        }),
    )
    .await
    .expect_err("blank email must fail");
    assert_eq!(err.code, ErrorCode::ValidationFailed);
}

#[tokio::test]
async fn test_me_reflects_profile_changes() {
    let (state, _guard) = test_state().await;
    let emp = register(&state, "leo@example.com", "EMP-404", Role::Employee).await;

    let info = auth::me(State(state.clone()), Extension(as_user(&emp)))
        .await
        .unwrap()
        .0;
    assert_eq!(info.id, emp.id);
    assert_eq!(info.employee_code, "EMP-404");
}
