//! docpeek-core: cursor-focused documentation previews
//!
//! Turns a compiled declaration tree plus a cursor position into the
//! minimal markdown fragment documenting the enclosing declaration.
//! The pipeline is: a [`compiler::Compiler`] produces a [`tree::DeclTree`],
//! [`extract`] flattens it into line-ranged documentation units, an
//! [`index::RangeIndex`] answers cursor queries over them, [`render`]
//! turns the matched unit into markdown, and [`session::PreviewSession`]
//! ties the stages together with caching. [`coalesce::QueryCoalescer`]
//! sits in front to absorb editor-speed request bursts.

pub mod coalesce;
pub mod compiler;
pub mod error;
pub mod extract;
pub mod index;
pub mod render;
pub mod session;
pub mod tree;

pub use coalesce::{DebounceConfig, QueryCoalescer};
pub use compiler::{Compiler, JsonCompiler};
pub use error::{CompileError, PreviewError, RenderError};
pub use extract::{extract, DocUnit, ExtractOptions};
pub use index::RangeIndex;
pub use session::{PreviewSession, RequestMode};
pub use tree::{DeclKind, DeclNode, DeclTree};
