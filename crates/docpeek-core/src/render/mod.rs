//! Fragment rendering: one documentable unit → one markdown string
//!
//! The low-level comment/signature block rendering is a collaborator behind
//! the [`BlockRenderer`] trait; [`render_fragment`] composes the blocks into
//! the final fragment and applies the heading and trimming policy.

mod blocks;
mod fragment;

pub use blocks::{BlockRenderer, MarkdownBlocks};
pub use fragment::render_fragment;
