//! API route definitions
//!
//! Author: hephaex@gmail.com

use crate::handlers::{command, rooms};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Slash-command webhook routes
pub fn command_routes() -> Router<Arc<AppState>> {
    Router::new().route("/command", post(command::command_handler))
}

/// Create API v1 routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new().route("/rooms/:id", get(rooms::get_room))
}
