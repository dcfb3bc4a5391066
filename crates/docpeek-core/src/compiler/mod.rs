//! Compiler boundary: the external semantic compiler as a trait
//!
//! The core never parses source itself. It hands the raw text to a
//! [`Compiler`] and receives a [`DeclTree`] back. The session verifies the
//! tree's file identity against the requested origin file.

mod json;

use async_trait::async_trait;

use crate::error::CompileError;
use crate::tree::DeclTree;

pub use json::JsonCompiler;

/// The external semantic compiler/type-checker.
///
/// Implementations are expected to be pure with respect to the session: the
/// returned tree is owned by the caller and never shared.
#[async_trait]
pub trait Compiler: Send + Sync {
    /// Compile one file's source text into a declaration tree.
    ///
    /// # Errors
    /// Returns [`CompileError`] when the source cannot be compiled.
    async fn compile(&self, source: &str) -> Result<DeclTree, CompileError>;
}
