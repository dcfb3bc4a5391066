//! Preview session cache
//!
//! Owns the compiled range index, the per-range rendered-markdown cache and
//! the identity of the file under preview. Decides when a request recompiles
//! and when it can be served from cache. One session belongs to exactly one
//! preview context; sharing a session across previews would let one file's
//! compile invalidate another's.

use std::path::{Path, PathBuf};

use crate::compiler::Compiler;
use crate::error::CompileError;
use crate::extract::{extract, DocUnit, ExtractOptions};
use crate::index::RangeIndex;
use crate::render::{render_fragment, BlockRenderer, MarkdownBlocks};

/// What triggered a preview request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode {
    /// A text edit; always forces recompilation.
    Content,
    /// A caret move; reuses the current compile generation when possible.
    Cursor,
}

/// One lazily cached rendered fragment, keyed by its unit's line range.
#[derive(Debug, Clone)]
struct RenderedFragment {
    start_line: u32,
    end_line: u32,
    markdown: String,
}

/// Per-preview state: compiled index, fragment cache and file identity.
pub struct PreviewSession {
    origin_file: PathBuf,
    last_line: u32,
    index: RangeIndex,
    fragments: Vec<RenderedFragment>,
    generation: u64,
    options: ExtractOptions,
    blocks: Box<dyn BlockRenderer>,
}

impl PreviewSession {
    #[must_use]
    pub fn new(options: ExtractOptions) -> Self {
        Self::with_blocks(options, Box::new(MarkdownBlocks))
    }

    #[must_use]
    pub fn with_blocks(options: ExtractOptions, blocks: Box<dyn BlockRenderer>) -> Self {
        PreviewSession {
            origin_file: PathBuf::new(),
            last_line: 0,
            index: RangeIndex::new(),
            fragments: Vec::new(),
            generation: 0,
            options,
            blocks,
        }
    }

    /// File the current compile generation belongs to.
    #[must_use]
    pub fn origin_file(&self) -> &Path {
        &self.origin_file
    }

    /// Line of the most recent fragment request.
    #[must_use]
    pub fn last_line(&self) -> u32 {
        self.last_line
    }

    /// Compile generation counter; bumps on every forced compile.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of units in the current index.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.index.len()
    }

    /// Discard all state; the next request recompiles from scratch.
    ///
    /// The index and the fragment cache are discarded together, never
    /// partially.
    pub fn reset(&mut self) {
        self.origin_file = PathBuf::new();
        self.last_line = 0;
        self.index.clear();
        self.fragments.clear();
    }

    /// Compute the documentation fragment for a cursor position.
    ///
    /// `line` is 1-based; `0` is the reserved sentinel that compiles (and
    /// warms the cache) without producing a fragment. Compile and render
    /// failures degrade to an empty string and are logged; they never
    /// propagate to the caller.
    pub async fn fragment(
        &mut self,
        compiler: &dyn Compiler,
        source: &str,
        origin_file: &Path,
        line: u32,
        mode: RequestMode,
    ) -> String {
        let different_file = self.origin_file != origin_file;
        if different_file {
            tracing::debug!(
                "Preview origin changed to '{}', resetting session",
                origin_file.display()
            );
            self.reset();
        }

        let compile =
            mode == RequestMode::Content || different_file || self.index.is_empty();

        if compile {
            self.generation += 1;
            self.origin_file = origin_file.to_path_buf();
            self.fragments.clear();

            match self.compile(compiler, source, origin_file).await {
                Ok(units) => self.index.rebuild(units),
                Err(err) => {
                    tracing::error!(
                        "Error compiling '{}' into a declaration index: {err}",
                        origin_file.display()
                    );
                    self.index.clear();
                }
            }
        }

        if line == 0 {
            return String::new();
        }

        if mode == RequestMode::Cursor {
            if let Some(cached) = self
                .fragments
                .iter()
                .find(|f| line >= f.start_line && line <= f.end_line)
            {
                self.last_line = line;
                return cached.markdown.clone();
            }
        }

        let rendered = self.index.query_at(line).map(|unit| {
            (
                unit.start_line,
                unit.end_line,
                render_fragment(unit, self.blocks.as_ref()),
            )
        });

        let markdown = match rendered {
            None => String::new(),
            Some((start_line, end_line, Ok(markdown))) => {
                if !markdown.is_empty() {
                    self.store_fragment(start_line, end_line, &markdown);
                }
                markdown
            }
            Some((_, _, Err(err))) => {
                tracing::error!(
                    "Error rendering fragment for '{}': {err}",
                    self.origin_file.display()
                );
                String::new()
            }
        };

        self.last_line = line;
        markdown
    }

    async fn compile(
        &self,
        compiler: &dyn Compiler,
        source: &str,
        origin_file: &Path,
    ) -> Result<Vec<DocUnit>, CompileError> {
        let tree = compiler.compile(source).await?;
        if tree.file != origin_file {
            return Err(CompileError::FileMismatch {
                requested: origin_file.to_path_buf(),
                compiled: tree.file,
            });
        }

        Ok(extract(&tree, source, origin_file, &self.options))
    }

    fn store_fragment(&mut self, start_line: u32, end_line: u32, markdown: &str) {
        if let Some(existing) = self
            .fragments
            .iter_mut()
            .find(|f| f.start_line == start_line && f.end_line == end_line)
        {
            existing.markdown = markdown.to_string();
            return;
        }

        self.fragments.push(RenderedFragment {
            start_line,
            end_line,
            markdown: markdown.to_string(),
        });
    }
}

#[cfg(test)]
mod tests;
