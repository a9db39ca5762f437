//! Profile API Module

mod handler;

pub use handler::{get_profile, update_profile};

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/profile",
        get(handler::get_profile).patch(handler::update_profile),
    )
}
