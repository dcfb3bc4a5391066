//! Declaration tree module: the compiler's view of one source file
//!
//! Holds the serde model of the declaration tree an external compiler hands
//! us, plus the byte-offset to line-number resolver built from raw source
//! text.

mod line_map;
mod model;

pub use line_map::LineMap;
pub use model::{
    DeclKind, DeclNode, DeclTree, DocComment, DocTag, MergedDecl, Param, Signature, SourceSpan,
    TypeParam,
};
