//! Shared builders for extractor tests
//!
//! All tests use a synthetic source where every line is exactly 10 bytes
//! ("123456789\n"), so byte offsets follow directly from line numbers.

use std::path::{Path, PathBuf};

use crate::extract::{extract, DocUnit, ExtractOptions};
use crate::tree::{DeclKind, DeclNode, DeclTree, DocComment, Param, Signature, SourceSpan};

pub(super) const FILE: &str = "/src/sample.ts";
pub(super) const LINE_WIDTH: u32 = 10;

pub(super) fn source(lines: u32) -> String {
    "123456789\n".repeat(lines as usize)
}

pub(super) fn start_of(line: u32) -> u32 {
    (line - 1) * LINE_WIDTH
}

/// Span covering source lines `first..=last`, end offset on the last line.
pub(super) fn span(first: u32, last: u32) -> SourceSpan {
    SourceSpan::new(start_of(first), start_of(last) + LINE_WIDTH - 1)
}

pub(super) fn doc_at(first: u32, last: u32, summary: &str) -> DocComment {
    DocComment {
        span: Some(span(first, last)),
        summary: summary.to_string(),
        tags: vec![],
    }
}

pub(super) fn make_node(name: &str, kind: DeclKind, first: u32, last: u32) -> DeclNode {
    DeclNode {
        name: name.to_string(),
        kind,
        file: PathBuf::from(FILE),
        span: span(first, last),
        body: None,
        doc: None,
        signatures: vec![],
        type_params: vec![],
        structural: None,
        merged: vec![],
        inherited: false,
        has_own_page: false,
        children: vec![],
    }
}

pub(super) fn make_sig(name: &str, summary: Option<&str>) -> Signature {
    Signature {
        name: name.to_string(),
        file: None,
        line: None,
        doc: summary.map(|s| DocComment {
            span: None,
            summary: s.to_string(),
            tags: vec![],
        }),
        params: vec![],
        returns: None,
        type_params: vec![],
    }
}

pub(super) fn make_param(name: &str, summary: Option<&str>) -> Param {
    Param {
        name: name.to_string(),
        type_repr: "string".to_string(),
        doc: summary.map(|s| DocComment {
            span: None,
            summary: s.to_string(),
            tags: vec![],
        }),
    }
}

pub(super) fn make_tree(children: Vec<DeclNode>) -> DeclTree {
    let mut root = make_node("sample", DeclKind::Project, 1, 1);
    root.has_own_page = true;
    root.children = children;
    DeclTree {
        file: PathBuf::from(FILE),
        root,
    }
}

pub(super) fn extract_units(tree: &DeclTree, line_count: u32, hide: bool) -> Vec<DocUnit> {
    extract(
        tree,
        &source(line_count),
        Path::new(FILE),
        &ExtractOptions {
            hide_empty_signatures: hide,
        },
    )
}

pub(super) fn ranges(units: &[DocUnit]) -> Vec<(u32, u32)> {
    units.iter().map(|u| (u.start_line, u.end_line)).collect()
}
