//! Shared types for the Dayflow workforce backend
//!
//! Common types used by the server and its API clients: entity models,
//! request/response DTOs, the unified error system, and small utilities.

pub mod client;
pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::Role;
