//! Well-known vocabulary IRIs
//!
//! The closed set of terms the extractor recognises in room documents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Class marking a subject as a room feature (projector, whiteboard, ...)
pub const ROOM_FEATURE_CLASS: &str = "http://id.southampton.ac.uk/ns/RoomFeatureClass";

/// openorg:capacity
pub const CAPACITY: &str = "http://purl.org/openorg/capacity";

/// foaf:depiction
pub const DEPICTION: &str = "http://xmlns.com/foaf/0.1/depiction";

/// rdfs:label
pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

/// Terms the extractor dispatches on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WellKnown {
    RoomFeatureClass,
    Capacity,
    Depiction,
    Label,
}

impl WellKnown {
    pub const ALL: [WellKnown; 4] = [
        WellKnown::RoomFeatureClass,
        WellKnown::Capacity,
        WellKnown::Depiction,
        WellKnown::Label,
    ];

    pub const fn iri(self) -> &'static str {
        match self {
            Self::RoomFeatureClass => ROOM_FEATURE_CLASS,
            Self::Capacity => CAPACITY,
            Self::Depiction => DEPICTION,
            Self::Label => LABEL,
        }
    }

    /// Exact-match lookup; anything outside the set is `None`
    pub fn from_iri(iri: &str) -> Option<Self> {
        match iri {
            ROOM_FEATURE_CLASS => Some(Self::RoomFeatureClass),
            CAPACITY => Some(Self::Capacity),
            DEPICTION => Some(Self::Depiction),
            LABEL => Some(Self::Label),
            _ => None,
        }
    }
}

impl fmt::Display for WellKnown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.iri())
    }
}
