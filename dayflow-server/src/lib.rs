//! Dayflow Server - workforce management backend
//!
//! # Architecture
//!
//! The server enforces the business rules the presentation client cannot:
//! attendance session lifecycle, the leave approval state machine, payroll
//! disbursement, and role-based authorization in front of all of it.
//!
//! # Module structure
//!
//! ```text
//! dayflow-server/src/
//! ├── core/          # Configuration, state, server lifecycle
//! ├── auth/          # Identity Gate: JWT validation, CurrentUser
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool and repositories
//! └── utils/         # Logging, time, validation helpers
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, PayrollFormula, Server, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ____              ______
   / __ \____ ___  __/ __/ /___ _      __
  / / / / __ `/ / / / /_/ / __ \ | /| / /
 / /_/ / /_/ / /_/ / __/ / /_/ / |/ |/ /
/_____/\__,_/\__, /_/ /_/\____/|__/|__/
            /____/
    "#
    );
}
