//! docpeek-cli library
//!
//! This module exposes the internal functionality of docpeek-cli for testing purposes.

// Make commands module available for internal tests only
#[doc(hidden)]
pub mod commands;

pub use commands::types::WatchEvent;
