//! API routing modules
//!
//! # Structure
//!
//! - [`health`] - Health check
//! - [`auth`] - Registration, login, current user
//! - [`attendance`] - Check-in/check-out and history
//! - [`leave`] - Leave requests and HR decisions
//! - [`payroll`] - Salary disbursement and history
//! - [`employees`] - Directory (HR views)
//! - [`profile`] - Self-service profile

pub mod attendance;
pub mod auth;
pub mod employees;
pub mod health;
pub mod leave;
pub mod payroll;
pub mod profile;
