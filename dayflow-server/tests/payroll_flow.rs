//! Payroll computation and disbursement

mod common;

use axum::Json;
use axum::extract::{Extension, Path, State};
use common::{as_user, register, test_pool, test_state};
use dayflow_server::api::{employees, payroll};
use dayflow_server::db::repository::payroll as payroll_repo;
use dayflow_server::{Config, ErrorCode, PayrollFormula, ServerState};
use shared::models::{EmploymentUpdate, PayrollStatus, Role};

fn salary_update(base: f64, hra: Option<f64>, allowances: Option<f64>) -> EmploymentUpdate {
    EmploymentUpdate {
        base_salary: Some(base),
        hra,
        allowances,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_process_disburses_current_base_salary() {
    let (state, _guard) = test_state().await;
    let emp = register(&state, "mia@example.com", "EMP-201", Role::Employee).await;
    let hr = register(&state, "hr@example.com", "HR-001", Role::Hr).await;

    // HR sets base salary to 50000, then processes payroll
    employees::update_employment(
        State(state.clone()),
        Extension(as_user(&hr)),
        Path(emp.id),
        Json(salary_update(50000.0, None, None)),
    )
    .await
    .expect("salary update should succeed");

    let record = payroll::process(
        State(state.clone()),
        Extension(as_user(&hr)),
        Path(emp.id),
    )
    .await
    .expect("payroll should succeed")
    .0;
    assert_eq!(record.user_id, emp.id);
    assert_eq!(record.salary_amount, 50000.0);
    assert_eq!(record.status, PayrollStatus::Paid);
    assert_eq!(record.processed_by, hr.id);

    // An employee invoking process is rejected with no state change
    let err = payroll::process(
        State(state.clone()),
        Extension(as_user(&emp)),
        Path(emp.id),
    )
    .await
    .expect_err("non-HR payroll must fail");
    assert_eq!(err.code, ErrorCode::HrRequired);

    let records = payroll_repo::list_for_user(&state.pool, emp.id).await.unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_amount_is_read_at_call_time_not_cached() {
    let (state, _guard) = test_state().await;
    let emp = register(&state, "noa@example.com", "EMP-202", Role::Employee).await;
    let hr = register(&state, "hr2@example.com", "HR-002", Role::Hr).await;

    employees::update_employment(
        State(state.clone()),
        Extension(as_user(&hr)),
        Path(emp.id),
        Json(salary_update(40000.0, None, None)),
    )
    .await
    .unwrap();

    let first = payroll::process(State(state.clone()), Extension(as_user(&hr)), Path(emp.id))
        .await
        .unwrap()
        .0;
    assert_eq!(first.salary_amount, 40000.0);

    // Raise the salary; the next run reflects the new value
    employees::update_employment(
        State(state.clone()),
        Extension(as_user(&hr)),
        Path(emp.id),
        Json(salary_update(45000.0, None, None)),
    )
    .await
    .unwrap();

    let second = payroll::process(State(state.clone()), Extension(as_user(&hr)), Path(emp.id))
        .await
        .unwrap()
        .0;
    assert_eq!(second.salary_amount, 45000.0);
}

#[tokio::test]
async fn test_zero_salary_is_rejected() {
    let (state, _guard) = test_state().await;
    let emp = register(&state, "oli@example.com", "EMP-203", Role::Employee).await;
    let hr = register(&state, "hr3@example.com", "HR-003", Role::Hr).await;

    // base_salary defaults to 0 at registration
    let err = payroll::process(State(state.clone()), Extension(as_user(&hr)), Path(emp.id))
        .await
        .expect_err("zero salary must fail");
    assert_eq!(err.code, ErrorCode::InvalidSalary);

    let records = payroll_repo::list_for_user(&state.pool, emp.id).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_unknown_employee_is_not_found() {
    let (state, _guard) = test_state().await;
    let hr = register(&state, "hr4@example.com", "HR-004", Role::Hr).await;

    let err = payroll::process(State(state.clone()), Extension(as_user(&hr)), Path(424242))
        .await
        .expect_err("unknown target must fail");
    assert_eq!(err.code, ErrorCode::NotFound);
}

#[tokio::test]
async fn test_gross_formula_disburses_all_components() {
    let work_dir = tempfile::tempdir().unwrap();
    let mut config = Config::with_overrides(work_dir.path().to_string_lossy(), 0);
    config.payroll_formula = PayrollFormula::Gross;
    let state = ServerState::new(config, test_pool().await);

    let emp = register(&state, "pia@example.com", "EMP-204", Role::Employee).await;
    let hr = register(&state, "hr5@example.com", "HR-005", Role::Hr).await;

    employees::update_employment(
        State(state.clone()),
        Extension(as_user(&hr)),
        Path(emp.id),
        Json(salary_update(50000.0, Some(10000.0), Some(5000.0))),
    )
    .await
    .unwrap();

    let record = payroll::process(State(state.clone()), Extension(as_user(&hr)), Path(emp.id))
        .await
        .unwrap()
        .0;
    assert_eq!(record.salary_amount, 65000.0);
}

#[tokio::test]
async fn test_period_guard_blocks_second_run_when_enabled() {
    let work_dir = tempfile::tempdir().unwrap();
    let mut config = Config::with_overrides(work_dir.path().to_string_lossy(), 0);
    config.payroll_unique_period = true;
    let state = ServerState::new(config, test_pool().await);

    let emp = register(&state, "quy@example.com", "EMP-205", Role::Employee).await;
    let hr = register(&state, "hr6@example.com", "HR-006", Role::Hr).await;

    employees::update_employment(
        State(state.clone()),
        Extension(as_user(&hr)),
        Path(emp.id),
        Json(salary_update(30000.0, None, None)),
    )
    .await
    .unwrap();

    payroll::process(State(state.clone()), Extension(as_user(&hr)), Path(emp.id))
        .await
        .expect("first run succeeds");

    let err = payroll::process(State(state.clone()), Extension(as_user(&hr)), Path(emp.id))
        .await
        .expect_err("second run in the same period must fail");
    assert_eq!(err.code, ErrorCode::AlreadyPaidPeriod);

    let records = payroll_repo::list_for_user(&state.pool, emp.id).await.unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_duplicate_runs_allowed_by_default() {
    let (state, _guard) = test_state().await;
    let emp = register(&state, "rex@example.com", "EMP-206", Role::Employee).await;
    let hr = register(&state, "hr7@example.com", "HR-007", Role::Hr).await;

    employees::update_employment(
        State(state.clone()),
        Extension(as_user(&hr)),
        Path(emp.id),
        Json(salary_update(30000.0, None, None)),
    )
    .await
    .unwrap();

    // Without the period guard the ledger accepts repeated disbursements
    for _ in 0..2 {
        payroll::process(State(state.clone()), Extension(as_user(&hr)), Path(emp.id))
            .await
            .expect("runs succeed without the period guard");
    }

    let records = payroll_repo::list_for_user(&state.pool, emp.id).await.unwrap();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn test_history_views_are_scoped() {
    let (state, _guard) = test_state().await;
    let emp = register(&state, "sam@example.com", "EMP-207", Role::Employee).await;
    let hr = register(&state, "hr8@example.com", "HR-008", Role::Hr).await;

    employees::update_employment(
        State(state.clone()),
        Extension(as_user(&hr)),
        Path(emp.id),
        Json(salary_update(30000.0, None, None)),
    )
    .await
    .unwrap();
    payroll::process(State(state.clone()), Extension(as_user(&hr)), Path(emp.id))
        .await
        .unwrap();

    let mine = payroll::mine(State(state.clone()), Extension(as_user(&emp)))
        .await
        .unwrap()
        .0;
    assert_eq!(mine.len(), 1);

    let all = payroll::list(State(state.clone()), Extension(as_user(&hr)))
        .await
        .unwrap()
        .0;
    assert_eq!(all.len(), 1);

    let err = payroll::list(State(state.clone()), Extension(as_user(&emp)))
        .await
        .expect_err("full ledger requires HR");
    assert_eq!(err.code, ErrorCode::HrRequired);
}
