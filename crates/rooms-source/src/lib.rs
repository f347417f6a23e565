//! soton-rooms Source - Room document fetchers
//!
//! Implementations of [`rooms_core::TripleSource`]:
//! - [`HttpTripleSource`]: fetches `<base><room>.ttl` from the open data service
//! - [`FileTripleSource`]: reads `<dir>/<room>.ttl` from local disk
//!
//! Both decode Turtle through [`parse_turtle`].
//!
//! Author: hephaex@gmail.com

pub mod file;
pub mod http;
pub mod turtle;

pub use file::FileTripleSource;
pub use http::HttpTripleSource;
pub use turtle::parse_turtle;

/// File name of a room's Turtle document
pub(crate) fn document_name(room: &rooms_core::RoomId) -> String {
    format!("{room}.ttl")
}
