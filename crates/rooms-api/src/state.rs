//! Application state management
//!
//! Author: hephaex@gmail.com

use rooms_core::{AppConfig, RoomDirectory, TripleSource};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Application state shared across handlers
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
    /// Room lookups over the configured triple source
    pub directory: RoomDirectory,
    /// Server start time
    pub start_time: Instant,
    /// Request counter
    pub request_count: AtomicU64,
}

impl AppState {
    /// Create new application state with config and a triple source
    pub fn new(config: AppConfig, source: Arc<dyn TripleSource>) -> Self {
        let directory = RoomDirectory::new(source, config.source.id_base.clone());
        Self {
            config,
            directory,
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
        }
    }

    /// Increment request counter
    pub fn increment_requests(&self) -> u64 {
        self.request_count.fetch_add(1, Ordering::SeqCst)
    }

    /// Get total request count
    pub fn get_request_count(&self) -> u64 {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Get uptime in seconds
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
