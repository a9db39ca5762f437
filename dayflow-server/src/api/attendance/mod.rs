//! Attendance API Module

mod handler;

pub use handler::{HistoryQuery, check_in, check_out, history, today};

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/attendance", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/check-in", post(handler::check_in))
        .route("/check-out", post(handler::check_out))
        .route("/today", get(handler::today))
        .route("/history", get(handler::history))
}
