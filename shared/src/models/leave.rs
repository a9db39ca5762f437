//! Leave Request Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Leave request lifecycle state. Only `Pending` is mutable;
/// `Approved` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Approved => write!(f, "Approved"),
            Self::Rejected => write!(f, "Rejected"),
        }
    }
}

/// HR decision on a pending request. Deliberately excludes `Pending`:
/// a decision can only move the request to a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveDecision {
    Approved,
    Rejected,
}

impl From<LeaveDecision> for LeaveStatus {
    fn from(decision: LeaveDecision) -> Self {
        match decision {
            LeaveDecision::Approved => Self::Approved,
            LeaveDecision::Rejected => Self::Rejected,
        }
    }
}

/// Leave request record. Created by the employee in `Pending`; mutated
/// exactly once by HR (status + optional comment), immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct LeaveRequest {
    pub id: i64,
    pub user_id: i64,
    /// Inclusive range, `end_date >= start_date`
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub admin_comment: Option<String>,
    /// HR user who made the decision
    pub decided_by: Option<i64>,
    pub created_at: i64,
    pub decided_at: Option<i64>,
}

/// Submit payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveCreate {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

/// Decision payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveDecide {
    pub decision: LeaveDecision,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_maps_to_terminal_status() {
        assert_eq!(
            LeaveStatus::from(LeaveDecision::Approved),
            LeaveStatus::Approved
        );
        assert_eq!(
            LeaveStatus::from(LeaveDecision::Rejected),
            LeaveStatus::Rejected
        );
    }

    #[test]
    fn test_status_serde_spelling() {
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Pending).unwrap(),
            "\"Pending\""
        );
        let status: LeaveStatus = serde_json::from_str("\"Approved\"").unwrap();
        assert_eq!(status, LeaveStatus::Approved);
    }
}
