//! Payroll Repository (append-only ledger)

use super::RepoResult;
use shared::models::{PayrollRecord, PayrollStatus};
use shared::util::snowflake_id;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, user_id, salary_amount, pay_date, period, status, processed_by";

/// Append a disbursement. Ledger rows are never updated or deleted.
pub async fn create(
    pool: &SqlitePool,
    user_id: i64,
    salary_amount: f64,
    pay_date: i64,
    period: &str,
    processed_by: i64,
) -> RepoResult<PayrollRecord> {
    let id = snowflake_id();

    sqlx::query(
        "INSERT INTO payroll (id, user_id, salary_amount, pay_date, period, status, processed_by) VALUES (?, ?, ?, ?, ?, 'Paid', ?)",
    )
    .bind(id)
    .bind(user_id)
    .bind(salary_amount)
    .bind(pay_date)
    .bind(period)
    .bind(processed_by)
    .execute(pool)
    .await?;

    Ok(PayrollRecord {
        id,
        user_id,
        salary_amount,
        pay_date,
        period: period.to_string(),
        status: PayrollStatus::Paid,
        processed_by,
    })
}

/// Whether a disbursement already exists for `(user, period)`
pub async fn exists_for_period(
    pool: &SqlitePool,
    user_id: i64,
    period: &str,
) -> RepoResult<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM payroll WHERE user_id = ? AND period = ?",
    )
    .bind(user_id)
    .bind(period)
    .fetch_one(pool)
    .await?;
    Ok(count > 0)
}

/// One employee's disbursements, newest first
pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> RepoResult<Vec<PayrollRecord>> {
    let records = sqlx::query_as::<_, PayrollRecord>(&format!(
        "SELECT {COLUMNS} FROM payroll WHERE user_id = ? ORDER BY pay_date DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(records)
}

/// All disbursements (HR view), newest first
pub async fn list_all(pool: &SqlitePool) -> RepoResult<Vec<PayrollRecord>> {
    let records = sqlx::query_as::<_, PayrollRecord>(&format!(
        "SELECT {COLUMNS} FROM payroll ORDER BY pay_date DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(records)
}
