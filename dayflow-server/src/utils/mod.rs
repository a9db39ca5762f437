//! Utility modules: logging, time, validation

pub mod logger;
pub mod time;
pub mod validation;

// Re-export the shared error types for handler signatures
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
