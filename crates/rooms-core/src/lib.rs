//! soton-rooms Core - Domain models, triple extraction, and shared traits
//!
//! This crate defines the core abstractions used throughout soton-rooms:
//! - RDF triple and room identifier models
//! - The well-known vocabulary the extractor dispatches on
//! - Two-pass attribute extraction over a triple set
//! - Room reports and chat message rendering
//! - The `TripleSource` trait implemented by document fetchers
//! - Configuration management
//!
//! Author: hephaex@gmail.com

pub mod command;
pub mod config;
pub mod extract;
pub mod lookup;
pub mod model;
pub mod report;
pub mod vocab;

pub use command::parse_command;
pub use config::{AppConfig, ConfigError, LoggingConfig, ServerConfig, SourceConfig};
pub use extract::{classify, extract, resolve_labels};
pub use lookup::RoomDirectory;
pub use model::{AttributeMap, RoomId, Triple, CAPACITY_KEY, DEPICTION_KEY, NAME_KEY};
pub use report::RoomReport;
pub use vocab::WellKnown;

use async_trait::async_trait;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Core error types for room lookups
#[derive(Error, Debug)]
pub enum RoomsError {
    #[error("No room code supplied")]
    MissingRoom,

    #[error("Room not found: {0}")]
    RoomNotFound(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RoomsError>;

impl From<ConfigError> for RoomsError {
    fn from(err: ConfigError) -> Self {
        RoomsError::Config(err.to_string())
    }
}

// ============================================================================
// Traits
// ============================================================================

/// Source of the triple set describing a room
///
/// Implementations must surface transport and decode failures as errors
/// rather than returning an empty triple set.
#[async_trait]
pub trait TripleSource: Send + Sync {
    /// Fetch every statement in the room's source document
    async fn fetch(&self, room: &RoomId) -> Result<Vec<Triple>>;

    /// Backend name, used in logs
    fn name(&self) -> &str;
}
