//! API handlers
//!
//! Author: hephaex@gmail.com

pub mod command;
pub mod health;
pub mod rooms;
