//! File-backed room documents
//!
//! Reads `<dir>/<room>.ttl`, for offline use and fixtures.

use crate::document_name;
use crate::turtle::parse_turtle;
use async_trait::async_trait;
use rooms_core::{Result, RoomId, RoomsError, Triple, TripleSource};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Reads room documents from a local directory
pub struct FileTripleSource {
    dir: PathBuf,
    base_iri: Option<String>,
}

impl FileTripleSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            base_iri: None,
        }
    }

    /// Resolve relative IRIs in the documents against `base_iri`
    pub fn with_base_iri(mut self, base_iri: impl Into<String>) -> Self {
        self.base_iri = Some(base_iri.into());
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the room's Turtle document
    ///
    /// Room codes containing path separators are rejected.
    pub fn document_path(&self, room: &RoomId) -> Option<PathBuf> {
        let name = document_name(room);
        let is_plain = Path::new(&name).file_name().map(|f| f == name.as_str()) == Some(true);
        is_plain.then(|| self.dir.join(name))
    }
}

#[async_trait]
impl TripleSource for FileTripleSource {
    async fn fetch(&self, room: &RoomId) -> Result<Vec<Triple>> {
        let path = self
            .document_path(room)
            .ok_or_else(|| RoomsError::RoomNotFound(room.to_string()))?;
        tracing::debug!(path = %path.display(), "Reading room document");

        let data = match tokio::fs::read(&path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(RoomsError::RoomNotFound(room.to_string()))
            }
            Err(e) => {
                return Err(RoomsError::Fetch(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )))
            }
        };

        parse_turtle(&data, self.base_iri.as_deref())
    }

    fn name(&self) -> &str {
        "file"
    }
}
