//! Leave request state machine

mod common;

use axum::Json;
use axum::extract::{Extension, Path, State};
use chrono::NaiveDate;
use common::{as_user, register, test_state};
use dayflow_server::ErrorCode;
use dayflow_server::api::leave;
use dayflow_server::db::repository::leave as leave_repo;
use shared::models::{LeaveCreate, LeaveDecide, LeaveDecision, LeaveStatus, Role};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_submit_approve_and_no_redecision() {
    let (state, _guard) = test_state().await;
    let emp = register(&state, "flo@example.com", "EMP-101", Role::Employee).await;
    let hr = register(&state, "hr@example.com", "HR-001", Role::Hr).await;

    // Employee submits leave 2024-03-01..2024-03-03, reason "Flu"
    let request = leave::submit(
        State(state.clone()),
        Extension(as_user(&emp)),
        Json(LeaveCreate {
            start_date: date(2024, 3, 1),
            end_date: date(2024, 3, 3),
            reason: "Flu".to_string(),
        }),
    )
    .await
    .expect("submit should succeed")
    .0;
    assert_eq!(request.status, LeaveStatus::Pending);
    assert!(request.admin_comment.is_none());

    // HR approves with a comment
    let approved = leave::decide(
        State(state.clone()),
        Extension(as_user(&hr)),
        Path(request.id),
        Json(LeaveDecide {
            decision: LeaveDecision::Approved,
            comment: Some("Get well".to_string()),
        }),
    )
    .await
    .expect("decision should succeed")
    .0;
    assert_eq!(approved.status, LeaveStatus::Approved);
    assert_eq!(approved.admin_comment.as_deref(), Some("Get well"));
    assert_eq!(approved.decided_by, Some(hr.id));

    // A second decision on the same request fails and changes nothing
    let err = leave::decide(
        State(state.clone()),
        Extension(as_user(&hr)),
        Path(request.id),
        Json(LeaveDecide {
            decision: LeaveDecision::Rejected,
            comment: Some("Changed my mind".to_string()),
        }),
    )
    .await
    .expect_err("re-decision must fail");
    assert_eq!(err.code, ErrorCode::LeaveNotPending);

    let stored = leave_repo::find_by_id(&state.pool, request.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, LeaveStatus::Approved);
    assert_eq!(stored.admin_comment.as_deref(), Some("Get well"));
}

#[tokio::test]
async fn test_invalid_range_creates_nothing() {
    let (state, _guard) = test_state().await;
    let emp = register(&state, "gus@example.com", "EMP-102", Role::Employee).await;

    // end_date = 2024-03-01, start_date = 2024-03-03
    let err = leave::submit(
        State(state.clone()),
        Extension(as_user(&emp)),
        Json(LeaveCreate {
            start_date: date(2024, 3, 3),
            end_date: date(2024, 3, 1),
            reason: "Vacation".to_string(),
        }),
    )
    .await
    .expect_err("inverted range must fail");
    assert_eq!(err.code, ErrorCode::InvalidDateRange);

    let requests = leave_repo::list_for_user(&state.pool, emp.id).await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_blank_reason_rejected() {
    let (state, _guard) = test_state().await;
    let emp = register(&state, "hal@example.com", "EMP-103", Role::Employee).await;

    let err = leave::submit(
        State(state.clone()),
        Extension(as_user(&emp)),
        Json(LeaveCreate {
            start_date: date(2024, 3, 1),
            end_date: date(2024, 3, 1),
            reason: "   ".to_string(),
        }),
    )
    .await
    .expect_err("blank reason must fail");
    assert_eq!(err.code, ErrorCode::EmptyReason);
}

#[tokio::test]
async fn test_single_day_range_is_valid() {
    let (state, _guard) = test_state().await;
    let emp = register(&state, "ida@example.com", "EMP-104", Role::Employee).await;

    let request = leave::submit(
        State(state.clone()),
        Extension(as_user(&emp)),
        Json(LeaveCreate {
            start_date: date(2024, 3, 1),
            end_date: date(2024, 3, 1),
            reason: "Appointment".to_string(),
        }),
    )
    .await
    .expect("single-day range is inclusive and valid")
    .0;
    assert_eq!(request.start_date, request.end_date);
}

#[tokio::test]
async fn test_decision_requires_hr_and_leaves_state_untouched() {
    let (state, _guard) = test_state().await;
    let emp = register(&state, "jan@example.com", "EMP-105", Role::Employee).await;

    let request = leave::submit(
        State(state.clone()),
        Extension(as_user(&emp)),
        Json(LeaveCreate {
            start_date: date(2024, 4, 1),
            end_date: date(2024, 4, 2),
            reason: "Travel".to_string(),
        }),
    )
    .await
    .unwrap()
    .0;

    // The requester cannot decide their own request
    let err = leave::decide(
        State(state.clone()),
        Extension(as_user(&emp)),
        Path(request.id),
        Json(LeaveDecide {
            decision: LeaveDecision::Approved,
            comment: None,
        }),
    )
    .await
    .expect_err("non-HR decision must fail");
    assert_eq!(err.code, ErrorCode::HrRequired);

    let stored = leave_repo::find_by_id(&state.pool, request.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, LeaveStatus::Pending);
}

#[tokio::test]
async fn test_decide_missing_request_is_not_found() {
    let (state, _guard) = test_state().await;
    let hr = register(&state, "hr2@example.com", "HR-002", Role::Hr).await;

    let err = leave::decide(
        State(state.clone()),
        Extension(as_user(&hr)),
        Path(999_999),
        Json(LeaveDecide {
            decision: LeaveDecision::Approved,
            comment: None,
        }),
    )
    .await
    .expect_err("unknown id must fail");
    assert_eq!(err.code, ErrorCode::NotFound);
}

#[tokio::test]
async fn test_listings_are_scoped_and_ordered() {
    let (state, _guard) = test_state().await;
    let emp = register(&state, "kim@example.com", "EMP-106", Role::Employee).await;
    let other = register(&state, "lou@example.com", "EMP-107", Role::Employee).await;
    let hr = register(&state, "hr3@example.com", "HR-003", Role::Hr).await;

    for (who, reason) in [(&emp, "First"), (&other, "Second"), (&emp, "Third")] {
        leave::submit(
            State(state.clone()),
            Extension(as_user(who)),
            Json(LeaveCreate {
                start_date: date(2024, 5, 1),
                end_date: date(2024, 5, 2),
                reason: reason.to_string(),
            }),
        )
        .await
        .unwrap();
    }

    let mine = leave::mine(State(state.clone()), Extension(as_user(&emp)))
        .await
        .unwrap()
        .0;
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|r| r.user_id == emp.id));

    // HR sees everything; employees cannot use the HR listing
    let all = leave::list(State(state.clone()), Extension(as_user(&hr)))
        .await
        .unwrap()
        .0;
    assert_eq!(all.len(), 3);

    let err = leave::list(State(state.clone()), Extension(as_user(&emp)))
        .await
        .expect_err("HR listing requires HR");
    assert_eq!(err.code, ErrorCode::HrRequired);
}
