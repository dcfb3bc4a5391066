//! JSON-file compiler adapter
//!
//! Reads a serde-encoded [`DeclTree`] from disk on every compile. This is
//! the adapter the CLI uses: an external compiler writes its tree next to
//! the source file and we pick it up here. The source text itself only
//! serves position resolution downstream, so it is not inspected.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::Compiler;
use crate::error::CompileError;
use crate::tree::DeclTree;

/// Loads a pre-compiled declaration tree from a JSON file.
pub struct JsonCompiler {
    tree_path: PathBuf,
}

impl JsonCompiler {
    #[must_use]
    pub fn new(tree_path: impl Into<PathBuf>) -> Self {
        JsonCompiler {
            tree_path: tree_path.into(),
        }
    }

    #[must_use]
    pub fn tree_path(&self) -> &Path {
        &self.tree_path
    }
}

#[async_trait]
impl Compiler for JsonCompiler {
    async fn compile(&self, _source: &str) -> Result<DeclTree, CompileError> {
        let bytes = tokio::fs::read(&self.tree_path).await?;
        let tree: DeclTree = serde_json::from_slice(&bytes)?;
        tracing::debug!(
            "Loaded declaration tree for '{}' from '{}'",
            tree.file.display(),
            self.tree_path.display()
        );
        Ok(tree)
    }
}
