//! Entity models for the Dayflow backend
//!
//! Each file holds one entity plus its create/update payloads. Database
//! derives (`sqlx::FromRow`, `sqlx::Type`) are gated behind the `db` feature
//! so API clients can use these types without pulling in sqlx.

mod attendance;
mod employee;
mod leave;
mod payroll;
mod role;

pub use attendance::AttendanceRecord;
pub use employee::{DocumentRef, Employee, EmployeeSummary, EmploymentUpdate, ProfileUpdate};
pub use leave::{LeaveCreate, LeaveDecide, LeaveDecision, LeaveRequest, LeaveStatus};
pub use payroll::{PayrollRecord, PayrollStatus};
pub use role::Role;
