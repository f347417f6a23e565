//! Room lookup handlers
//!
//! JSON view of the same lookup the slash command performs.
//!
//! Author: hephaex@gmail.com

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use rooms_core::{RoomId, RoomReport};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Room lookup response
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomResponse {
    #[schema(example = "32-3077")]
    pub id: String,

    #[schema(example = "Lecture Theatre A")]
    pub name: Option<String>,

    #[schema(example = "120")]
    pub capacity: Option<String>,

    pub depiction: Option<String>,

    /// Feature labels
    pub features: Vec<String>,

    /// Rendered chat message
    pub message: String,
}

impl RoomResponse {
    fn new(room: &RoomId, report: RoomReport) -> Self {
        let message = report.message_text();
        Self {
            id: room.to_string(),
            name: report.name,
            capacity: report.capacity,
            depiction: report.depiction,
            features: report.features,
            message,
        }
    }
}

/// Look up a room by code
#[utoipa::path(
    get,
    path = "/api/v1/rooms/{id}",
    tag = "rooms",
    params(
        ("id" = String, Path, description = "Room code, e.g. 32-3077")
    ),
    responses(
        (status = 200, description = "Room found", body = RoomResponse),
        (status = 404, description = "Room not found", body = crate::error::ApiError),
        (status = 502, description = "Room data service failed", body = crate::error::ApiError)
    )
)]
pub async fn get_room(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<RoomResponse>, AppError> {
    state.increment_requests();

    let room = RoomId::new(id.trim());
    let report = state.directory.lookup(&room).await?;

    Ok(Json(RoomResponse::new(&room, report)))
}
