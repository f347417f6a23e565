//! Slash-command payload parsing

use crate::model::RoomId;
use url::form_urlencoded;

/// Form field carrying the command argument
const TEXT_FIELD: &str = "text";

/// Decode a form-encoded command body into the requested room
///
/// Takes the first `text` field; an absent field yields an empty id.
pub fn parse_command(body: &str) -> RoomId {
    form_urlencoded::parse(body.as_bytes())
        .find(|(key, _)| key == TEXT_FIELD)
        .map(|(_, value)| RoomId::new(value.trim()))
        .unwrap_or_default()
}
