//! Slash-command webhook handler
//!
//! Accepts the chat platform's form-encoded command payload, looks the room
//! up and answers with a chat message. Lookup failures are answered with a
//! 200 and a readable message; only response encoding failures are 500s.
//!
//! Author: hephaex@gmail.com

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use rooms_core::{parse_command, RoomId, RoomReport, RoomsError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// Chat message attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Attachment {
    /// Image shown under the message
    #[schema(example = "https://data.southampton.ac.uk/images/32-3077.jpg")]
    pub image_url: String,
}

/// Chat message reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CommandResponse {
    /// Message body
    #[schema(example = "Room: Lecture Theatre A\nCapacity: 120\nRoom features: Whiteboard\n")]
    pub text: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl CommandResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attachments: Vec::new(),
        }
    }
}

impl From<&RoomReport> for CommandResponse {
    fn from(report: &RoomReport) -> Self {
        Self {
            text: report.message_text(),
            attachments: report
                .depiction
                .iter()
                .map(|image_url| Attachment {
                    image_url: image_url.clone(),
                })
                .collect(),
        }
    }
}

const USAGE: &str = "Please give a room code, e.g. `/room 32-3077`.";

/// User-facing reply for a failed lookup
fn failure_message(room: &RoomId, err: &RoomsError) -> String {
    match err {
        RoomsError::MissingRoom => USAGE.to_string(),
        RoomsError::RoomNotFound(_) => format!("Room {room} not found."),
        _ => format!("Could not fetch details for room {room}. Please try again later."),
    }
}

/// Serialise to JSON with `<`, `>`, `&`, U+2028 and U+2029 escaped
///
/// Keeps the payload safe to embed in HTML.
pub fn to_html_safe_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let json = serde_json::to_string(value)?;
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            _ => escaped.push(c),
        }
    }
    Ok(escaped)
}

/// Handle a room slash command
#[utoipa::path(
    post,
    path = "/command",
    tag = "command",
    request_body(
        content = String,
        content_type = "application/x-www-form-urlencoded",
        description = "Slash-command payload; the `text` field holds the room code"
    ),
    responses(
        (status = 200, description = "Chat message", body = CommandResponse),
        (status = 500, description = "Response encoding failed", body = crate::error::ApiError)
    )
)]
pub async fn command_handler(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    state.increment_requests();

    let room = parse_command(&body);
    let reply = match state.directory.lookup(&room).await {
        Ok(report) => {
            tracing::info!(room = %room, features = report.features.len(), "Room lookup succeeded");
            CommandResponse::from(&report)
        }
        Err(err) => {
            match &err {
                RoomsError::MissingRoom | RoomsError::RoomNotFound(_) => {
                    tracing::info!(room = %room, error = %err, "Room lookup found nothing")
                }
                _ => tracing::warn!(room = %room, error = %err, "Room lookup failed"),
            }
            CommandResponse::text(failure_message(&room, &err))
        }
    };

    let payload = to_html_safe_json(&reply)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        payload,
    ))
}
