//! Payroll API Module

mod handler;

pub use handler::{list, mine, process};

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/payroll", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/mine", get(handler::mine))
        .route("/{user_id}/process", post(handler::process))
}
