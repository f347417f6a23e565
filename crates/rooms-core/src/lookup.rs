//! Room lookup orchestration
//!
//! Fetches a room's triple set from a [`TripleSource`], runs extraction
//! against the room's subject IRI and drains the result into a report.
//!
//! Author: hephaex@gmail.com

use crate::extract::extract;
use crate::model::{AttributeMap, RoomId};
use crate::report::RoomReport;
use crate::{Result, RoomsError, TripleSource};
use std::sync::Arc;

/// Looks rooms up against a triple source
#[derive(Clone)]
pub struct RoomDirectory {
    source: Arc<dyn TripleSource>,
    id_base: String,
}

impl RoomDirectory {
    /// Create a directory resolving room subjects under `id_base`
    pub fn new(source: Arc<dyn TripleSource>, id_base: impl Into<String>) -> Self {
        Self {
            source,
            id_base: id_base.into(),
        }
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Fetch and extract the room's attribute map
    pub async fn attributes(&self, room: &RoomId) -> Result<AttributeMap> {
        if room.is_empty() {
            return Err(RoomsError::MissingRoom);
        }

        let triples = self.source.fetch(room).await?;
        let subject = room.subject_iri(&self.id_base);
        let attributes = extract(&triples, &subject);

        tracing::debug!(
            room = %room,
            source = self.source.name(),
            triples = triples.len(),
            attributes = attributes.len(),
            "Extracted room attributes"
        );

        Ok(attributes)
    }

    /// Fetch, extract and drain into a report
    pub async fn lookup(&self, room: &RoomId) -> Result<RoomReport> {
        self.attributes(room).await.map(RoomReport::from)
    }
}
