//! soton-rooms API - Slash-command webhook server
//!
//! Answers chat slash commands with a summary of the requested room,
//! and exposes the same lookup as JSON.
//!
//! Author: hephaex@gmail.com

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::get, Json, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;

/// OpenAPI document
#[derive(OpenApi)]
#[openapi(
    info(
        title = "soton-rooms API",
        description = "Room lookups over the Southampton open data service"
    ),
    paths(
        handlers::command::command_handler,
        handlers::rooms::get_room,
        handlers::health::health_check,
    ),
    components(schemas(
        handlers::command::CommandResponse,
        handlers::command::Attachment,
        handlers::rooms::RoomResponse,
        handlers::health::HealthResponse,
        error::ApiError,
    )),
    tags(
        (name = "command", description = "Slash-command webhook"),
        (name = "rooms", description = "Room lookups"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Build the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let server = &state.config.server;
    let body_limit = server.max_body_size;
    let timeout = Duration::from_secs(server.request_timeout_secs);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .merge(routes::command_routes())
        .nest("/api/v1", routes::api_routes())
        .layer(axum::middleware::from_fn(
            middleware::handler_header_middleware,
        ))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
