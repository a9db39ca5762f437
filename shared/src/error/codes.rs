//! Unified error codes for the Dayflow backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Attendance errors
//! - 4xxx: Leave errors
//! - 5xxx: Payroll errors
//! - 9xxx: System errors

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// HR role required
    HrRequired = 2002,

    // ==================== 3xxx: Attendance ====================
    /// An open session already exists for this user today
    AlreadyCheckedIn = 3001,
    /// No open session to check out of
    NoOpenSession = 3002,
    /// The session has already been checked out
    AlreadyCheckedOut = 3003,

    // ==================== 4xxx: Leave ====================
    /// Leave request is no longer pending
    LeaveNotPending = 4001,
    /// End date precedes start date
    InvalidDateRange = 4002,
    /// Leave reason is blank
    EmptyReason = 4003,

    // ==================== 5xxx: Payroll ====================
    /// Salary amount is non-positive or malformed
    InvalidSalary = 5001,
    /// A disbursement already exists for this pay period
    AlreadyPaidPeriod = 5002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::NotAuthenticated => "Authentication required",
            Self::InvalidCredentials => "Invalid email or password",
            Self::TokenExpired => "Token expired",
            Self::TokenInvalid => "Invalid token",
            Self::PermissionDenied => "Permission denied",
            Self::HrRequired => "HR role required",
            Self::AlreadyCheckedIn => "Already checked in today",
            Self::NoOpenSession => "No open attendance session",
            Self::AlreadyCheckedOut => "Session already checked out",
            Self::LeaveNotPending => "Leave request is not pending",
            Self::InvalidDateRange => "End date must not precede start date",
            Self::EmptyReason => "Reason must not be empty",
            Self::InvalidSalary => "Salary must be a positive amount",
            Self::AlreadyPaidPeriod => "Payroll already processed for this period",
            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
        }
    }

    /// HTTP status code this error maps to
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InvalidDateRange
            | Self::EmptyReason
            | Self::InvalidSalary => StatusCode::BAD_REQUEST,
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid => StatusCode::UNAUTHORIZED,
            Self::PermissionDenied | Self::HrRequired => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::AlreadyExists
            | Self::AlreadyCheckedIn
            | Self::NoOpenSession
            | Self::AlreadyCheckedOut
            | Self::LeaveNotPending
            | Self::AlreadyPaidPeriod => StatusCode::CONFLICT,
            Self::Unknown | Self::InternalError | Self::DatabaseError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when a u16 does not map to a known [`ErrorCode`]
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            4 => Ok(Self::AlreadyExists),
            5 => Ok(Self::InvalidRequest),
            1001 => Ok(Self::NotAuthenticated),
            1002 => Ok(Self::InvalidCredentials),
            1003 => Ok(Self::TokenExpired),
            1004 => Ok(Self::TokenInvalid),
            2001 => Ok(Self::PermissionDenied),
            2002 => Ok(Self::HrRequired),
            3001 => Ok(Self::AlreadyCheckedIn),
            3002 => Ok(Self::NoOpenSession),
            3003 => Ok(Self::AlreadyCheckedOut),
            4001 => Ok(Self::LeaveNotPending),
            4002 => Ok(Self::InvalidDateRange),
            4003 => Ok(Self::EmptyReason),
            5001 => Ok(Self::InvalidSalary),
            5002 => Ok(Self::AlreadyPaidPeriod),
            9001 => Ok(Self::InternalError),
            9002 => Ok(Self::DatabaseError),
            other => Err(InvalidErrorCode(other)),
        }
    }
}
