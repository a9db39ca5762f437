//! Employee Directory API Module

mod handler;

pub use handler::{ListQuery, get_by_id, list, update_employment};

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/employees", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route(
            "/{id}",
            get(handler::get_by_id).patch(handler::update_employment),
        )
}
