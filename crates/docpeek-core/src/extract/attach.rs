//! Doc-comment attachment and merged-symbol disambiguation

use crate::tree::{DeclNode, DocComment, LineMap, SourceSpan};

/// A declaration's effective source facts after merged-symbol resolution.
pub(super) struct ResolvedDecl<'t> {
    pub span: SourceSpan,
    pub body: Option<SourceSpan>,
    pub doc: Option<&'t DocComment>,
}

/// Pick the effective declaration for a possibly-merged symbol.
///
/// A symbol can carry several candidate declarations of different syntactic
/// kinds, e.g. an interface merged with a same-named variable. The candidate
/// whose kind matches the node's semantic kind wins, and span, body and doc
/// are re-resolved from it. Without a matching candidate the node's own
/// facts stand.
pub(super) fn resolve_merged(decl: &DeclNode) -> ResolvedDecl<'_> {
    if let Some(candidate) = decl.merged.iter().find(|m| m.kind == decl.kind) {
        return ResolvedDecl {
            span: candidate.span,
            body: candidate.body,
            doc: candidate.doc.as_ref(),
        };
    }

    ResolvedDecl {
        span: decl.span,
        body: decl.body,
        doc: decl.doc.as_ref(),
    }
}

/// Borrow a doc comment from the nearest ancestor that carries one.
///
/// Only the first ancestor carrying a comment is considered, and its comment
/// is accepted only when it ends exactly one line above the declaration.
/// The adjacency requirement prevents attaching an unrelated, distant
/// comment to a declaration that has none of its own.
pub(super) fn attach_ancestor_doc<'t>(
    ancestors: &[&'t DeclNode],
    decl_line: u32,
    lines: &LineMap,
) -> Option<&'t DocComment> {
    let doc = ancestors.iter().rev().find_map(|anc| anc.doc.as_ref())?;
    let span = doc.span?;
    if lines.line_of(span.end) + 1 == decl_line {
        Some(doc)
    } else {
        None
    }
}
