//! CLI commands

pub mod preview;
pub mod types;
pub mod watch;

pub use types::WatchEvent;
