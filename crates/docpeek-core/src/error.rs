//! Error types for the preview core

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the external compiler boundary.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Failed to compile source: {0}")]
    Failed(String),

    #[error("Compiled file '{compiled}' does not match requested file '{requested}'")]
    FileMismatch {
        requested: PathBuf,
        compiled: PathBuf,
    },

    #[error("Failed to read declaration tree: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed declaration tree: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors from fragment rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to render fragment for '{name}': {reason}")]
    Failed { name: String, reason: String },
}

/// Top-level error type for the preview core.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Coalescer channel closed before a result was produced")]
    ChannelClosed,
}
