//! HTTP room document fetcher
//!
//! Author: hephaex@gmail.com

use crate::document_name;
use crate::turtle::parse_turtle;
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use rooms_core::{Result, RoomId, RoomsError, SourceConfig, Triple, TripleSource};
use std::time::Duration;
use url::Url;

/// Fetches room documents from the open data service
pub struct HttpTripleSource {
    client: Client,
    data_base_url: Url,
}

impl HttpTripleSource {
    /// Create a fetcher for documents under `data_base_url`
    pub fn new(data_base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self> {
        let data_base_url = Url::parse(data_base_url).map_err(|e| {
            RoomsError::Config(format!("Invalid data base URL {data_base_url}: {e}"))
        })?;
        if data_base_url.cannot_be_a_base() {
            return Err(RoomsError::Config(format!(
                "Data base URL cannot be a base: {data_base_url}"
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| RoomsError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            data_base_url,
        })
    }

    /// Create from config
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        Self::new(
            &config.data_base_url,
            Duration::from_secs(config.fetch_timeout_secs),
            &config.user_agent,
        )
    }

    /// URL of the room's Turtle document
    ///
    /// The room code is percent-encoded as a single path segment.
    pub fn document_url(&self, room: &RoomId) -> Url {
        let mut url = self.data_base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&document_name(room));
        }
        url
    }
}

#[async_trait]
impl TripleSource for HttpTripleSource {
    async fn fetch(&self, room: &RoomId) -> Result<Vec<Triple>> {
        let url = self.document_url(room);
        tracing::debug!(%url, "Fetching room document");

        let response = self
            .client
            .get(url.clone())
            .header(header::ACCEPT, "text/turtle")
            .send()
            .await
            .map_err(|e| RoomsError::Fetch(format!("Request to {url} failed: {e}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(RoomsError::RoomNotFound(room.to_string()));
        }
        if !status.is_success() {
            return Err(RoomsError::Fetch(format!("{url} returned {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RoomsError::Fetch(format!("Failed to read {url}: {e}")))?;

        parse_turtle(&body, Some(url.as_str()))
    }

    fn name(&self) -> &str {
        "http"
    }
}
