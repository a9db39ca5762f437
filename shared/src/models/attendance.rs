//! Attendance Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One work session for one employee on one calendar date.
///
/// `work_date` is derived from `check_in` in the reporting timezone at
/// creation time and never recomputed, so a session spanning midnight stays
/// attributed to its start date. At most one record may exist per
/// `(user_id, work_date)`, and at most one may be open per user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AttendanceRecord {
    pub id: i64,
    pub user_id: i64,
    pub work_date: NaiveDate,
    /// Check-in time (Unix millis)
    pub check_in: i64,
    /// Check-out time (Unix millis), null while the session is open
    pub check_out: Option<i64>,
}

impl AttendanceRecord {
    /// An open session has a check-in but no check-out yet
    pub fn is_open(&self) -> bool {
        self.check_out.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_open() {
        let mut rec = AttendanceRecord {
            id: 1,
            user_id: 7,
            work_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            check_in: 1_709_280_000_000,
            check_out: None,
        };
        assert!(rec.is_open());
        rec.check_out = Some(1_709_310_000_000);
        assert!(!rec.is_open());
    }
}
