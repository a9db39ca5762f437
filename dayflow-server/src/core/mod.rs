//! Core: configuration, state, server lifecycle

pub mod config;
pub mod server;
pub mod state;

pub use config::{Config, PayrollFormula};
pub use server::{Server, build_app, build_router};
pub use state::{CheckInLocks, ServerState};
