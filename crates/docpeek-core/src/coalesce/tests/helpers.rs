//! Shared fakes and builders for coalescer tests

#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::compiler::Compiler;
use crate::error::CompileError;
use crate::tree::{DeclKind, DeclNode, DeclTree, DocComment, SourceSpan};

pub(super) const FILE: &str = "/src/sample.ts";
pub(super) const LINE_WIDTH: u32 = 10;

pub(super) fn source(lines: u32) -> String {
    "123456789\n".repeat(lines as usize)
}

fn span(first: u32, last: u32) -> SourceSpan {
    SourceSpan::new((first - 1) * LINE_WIDTH, (last - 1) * LINE_WIDTH + LINE_WIDTH - 1)
}

fn function(name: &str, summary: &str, doc_first: u32, body_first: u32, body_last: u32) -> DeclNode {
    DeclNode {
        name: name.to_string(),
        kind: DeclKind::Function,
        file: PathBuf::from(FILE),
        span: span(body_first, body_last),
        body: Some(span(body_first, body_last)),
        doc: Some(DocComment {
            span: Some(span(doc_first, body_first - 1)),
            summary: summary.to_string(),
            tags: vec![],
        }),
        signatures: vec![],
        type_params: vec![],
        structural: None,
        merged: vec![],
        inherited: false,
        has_own_page: false,
        children: vec![],
    }
}

/// Two documented functions: `alpha` on lines 1-5, `beta` on lines 7-12.
pub(super) fn two_function_tree() -> DeclTree {
    let mut root = DeclNode {
        name: "sample".to_string(),
        kind: DeclKind::Project,
        file: PathBuf::from(FILE),
        span: span(1, 1),
        body: None,
        doc: None,
        signatures: vec![],
        type_params: vec![],
        structural: None,
        merged: vec![],
        inherited: false,
        has_own_page: true,
        children: vec![],
    };
    root.children = vec![
        function("alpha", "Does the first thing.", 1, 3, 5),
        function("beta", "Does the second thing.", 7, 9, 12),
    ];
    DeclTree {
        file: PathBuf::from(FILE),
        root,
    }
}

/// Compiler fake counting invocations.
pub(super) struct CountingCompiler {
    tree: DeclTree,
    calls: AtomicUsize,
}

impl CountingCompiler {
    pub(super) fn new(tree: DeclTree) -> Self {
        CountingCompiler {
            tree,
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Compiler for CountingCompiler {
    async fn compile(&self, _source: &str) -> Result<DeclTree, CompileError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.tree.clone())
    }
}
