//! The documentable unit produced by extraction

use crate::tree::{DeclKind, DocComment, Signature, TypeParam};

/// One declaration eligible for a preview fragment.
///
/// Created fresh on every compile pass and never mutated afterwards; the
/// session discards the whole batch on recompile or file switch. A
/// declaration with several call signatures yields one unit per signature,
/// each sharing `start_line` but carrying only its own signature.
#[derive(Debug, Clone, PartialEq)]
pub struct DocUnit {
    /// First source line covered by this unit (1-based, inclusive).
    pub start_line: u32,
    /// Last source line covered by this unit (1-based, inclusive).
    pub end_line: u32,
    pub kind: DeclKind,
    pub name: String,
    pub doc: Option<DocComment>,
    /// The single signature this unit documents, if any.
    pub signature: Option<Signature>,
    pub type_params: Vec<TypeParam>,
    /// Units with their own documentation page render without a kind
    /// prefix in the fragment heading.
    pub has_own_page: bool,
}

impl DocUnit {
    /// Whether `line` falls within this unit's range.
    #[must_use]
    pub fn contains(&self, line: u32) -> bool {
        line >= self.start_line && line <= self.end_line
    }
}
