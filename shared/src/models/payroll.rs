//! Payroll Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Disbursement status. Records are created directly in `Paid`;
/// the ledger is append-only and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum PayrollStatus {
    Paid,
}

impl fmt::Display for PayrollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paid => write!(f, "Paid"),
        }
    }
}

/// Append-only salary disbursement ledger entry.
///
/// `salary_amount` is computed from the employee's compensation fields as
/// read at processing time, never from a cached snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PayrollRecord {
    pub id: i64,
    pub user_id: i64,
    pub salary_amount: f64,
    /// Disbursement time (Unix millis)
    pub pay_date: i64,
    /// Year-month key of `pay_date` in the reporting timezone (`YYYY-MM`)
    pub period: String,
    pub status: PayrollStatus,
    /// HR user who triggered the disbursement
    pub processed_by: i64,
}
