//! Preview command: render the fragment for one cursor position
//!
//! One-shot mode: load the declaration tree, compile the index, query the
//! requested line and print the markdown fragment to stdout. Logging goes
//! to stderr so the fragment stays pipeable.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use docpeek_core::extract::ExtractOptions;
use docpeek_core::session::{PreviewSession, RequestMode};
use docpeek_core::tree::DeclTree;
use docpeek_core::JsonCompiler;
use tracing::info;

/// Run the preview command
///
/// # Errors
/// Returns an error if the tree or source file cannot be read.
pub async fn run(tree: &Path, source: &Path, line: u32, show_empty_signatures: bool) -> Result<()> {
    let source_text = read_source(source).await?;
    let origin = origin_of(tree).await?;

    let compiler = JsonCompiler::new(tree);
    let options = ExtractOptions {
        hide_empty_signatures: !show_empty_signatures,
    };
    let mut session = PreviewSession::new(options);

    let markdown = session
        .fragment(&compiler, &source_text, &origin, line, RequestMode::Content)
        .await;

    if markdown.is_empty() {
        info!("No documented declaration encloses line {line}");
    } else {
        println!("{markdown}");
    }
    Ok(())
}

pub(crate) async fn read_source(source: &Path) -> Result<String> {
    tokio::fs::read_to_string(source)
        .await
        .with_context(|| format!("Failed to read source file '{}'", source.display()))
}

/// The file identity recorded inside the tree; requests must match it.
pub(crate) async fn origin_of(tree: &Path) -> Result<PathBuf> {
    let bytes = tokio::fs::read(tree)
        .await
        .with_context(|| format!("Failed to read declaration tree '{}'", tree.display()))?;
    let decl_tree: DeclTree = serde_json::from_slice(&bytes)
        .with_context(|| format!("Malformed declaration tree '{}'", tree.display()))?;
    Ok(decl_tree.file)
}
