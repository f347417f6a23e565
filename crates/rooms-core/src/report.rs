//! Room reports and chat message rendering
//!
//! Author: hephaex@gmail.com

use crate::model::{AttributeMap, CAPACITY_KEY, DEPICTION_KEY, NAME_KEY};
use serde::{Deserialize, Serialize};

/// Drained form of an [`AttributeMap`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,

    /// Image resource depicting the room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depiction: Option<String>,

    /// Feature labels, ordered by feature subject
    pub features: Vec<String>,
}

impl From<AttributeMap> for RoomReport {
    fn from(mut attributes: AttributeMap) -> Self {
        let name = attributes.take(NAME_KEY);
        let capacity = attributes.take(CAPACITY_KEY);
        let depiction = attributes.take(DEPICTION_KEY);
        let features = attributes.into_iter().map(|(_, label)| label).collect();

        Self {
            name,
            capacity,
            depiction,
            features,
        }
    }
}

impl RoomReport {
    /// Render the chat message body
    pub fn message_text(&self) -> String {
        let mut message = String::new();

        if let Some(name) = &self.name {
            message.push_str(&format!("Room: {name}\n"));
        }
        if let Some(capacity) = &self.capacity {
            message.push_str(&format!("Capacity: {capacity}\n"));
        }
        message.push_str(&format!("Room features: {}\n", self.features.join(",")));

        message
    }
}
