//! Response middleware
//!
//! Author: hephaex@gmail.com

pub mod handler_header;

pub use handler_header::{handler_header_middleware, HANDLER_HEADER, HANDLER_NAME};
