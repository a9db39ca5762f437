//! Leave Workflow API Module

mod handler;

pub use handler::{decide, list, mine, submit};

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/leave", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::submit).get(handler::list))
        .route("/mine", get(handler::mine))
        .route("/{id}/decision", post(handler::decide))
}
