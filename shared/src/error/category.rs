//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the range of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 3xxx: Attendance errors
/// - 4xxx: Leave errors
/// - 5xxx: Payroll errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Attendance errors (3xxx)
    Attendance,
    /// Leave errors (4xxx)
    Leave,
    /// Payroll errors (5xxx)
    Payroll,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Attendance,
            4000..5000 => Self::Leave,
            5000..6000 => Self::Payroll,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Attendance => "attendance",
            Self::Leave => "leave",
            Self::Payroll => "payroll",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Attendance);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Leave);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Payroll);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::NotFound.category(), ErrorCategory::General);
        assert_eq!(
            ErrorCode::NotAuthenticated.category(),
            ErrorCategory::Auth
        );
        assert_eq!(ErrorCode::HrRequired.category(), ErrorCategory::Permission);
        assert_eq!(
            ErrorCode::AlreadyCheckedIn.category(),
            ErrorCategory::Attendance
        );
        assert_eq!(
            ErrorCode::LeaveNotPending.category(),
            ErrorCategory::Leave
        );
        assert_eq!(
            ErrorCode::InvalidSalary.category(),
            ErrorCategory::Payroll
        );
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        assert_eq!(
            serde_json::to_string(&ErrorCategory::Attendance).unwrap(),
            "\"attendance\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorCategory::Payroll).unwrap(),
            "\"payroll\""
        );
    }
}
