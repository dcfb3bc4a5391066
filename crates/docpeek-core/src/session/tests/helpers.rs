//! Shared fakes and builders for session tests

#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::compiler::Compiler;
use crate::error::CompileError;
use crate::tree::{DeclKind, DeclNode, DeclTree, DocComment, SourceSpan};

pub(super) const FILE: &str = "/src/sample.ts";
pub(super) const LINE_WIDTH: u32 = 10;

pub(super) fn source(lines: u32) -> String {
    "123456789\n".repeat(lines as usize)
}

pub(super) fn span(first: u32, last: u32) -> SourceSpan {
    SourceSpan::new((first - 1) * LINE_WIDTH, (last - 1) * LINE_WIDTH + LINE_WIDTH - 1)
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

pub(super) fn make_tree(children: Vec<DeclNode>) -> DeclTree {
    let mut root = make_node("sample", DeclKind::Project, 1, 1);
    root.has_own_page = true;
    root.children = children;
    DeclTree {
        file: PathBuf::from(FILE),
        root,
    }
}

/// A documented class with a documented constructor and method, laid out as:
/// comment 1-4, class header 5, ctor comment 11-12 with body 13-15, method
/// comment 17-18 with body 19-26.
pub(super) fn expire_map_tree(ctor_summary: &str) -> DeclTree {
    let mut class = make_node("ExpireMap", DeclKind::Class, 5, 26);
    class.doc = Some(doc_at(1, 4, "A map with expiry."));

    let mut ctor = make_node("constructor", DeclKind::Constructor, 13, 15);
    ctor.doc = Some(doc_at(11, 12, ctor_summary));
    ctor.body = Some(span(13, 15));

    let mut set = make_node("set", DeclKind::Method, 19, 26);
    set.doc = Some(doc_at(17, 18, "Stores a value."));
    set.body = Some(span(19, 26));

    class.children = vec![ctor, set];
    make_tree(vec![class])
}

/// Compiler fake returning a configurable tree and counting invocations.
pub(super) struct FakeCompiler {
    tree: Mutex<DeclTree>,
    calls: AtomicUsize,
}

impl FakeCompiler {
    pub(super) fn new(tree: DeclTree) -> Self {
        FakeCompiler {
            tree: Mutex::new(tree),
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn set_tree(&self, tree: DeclTree) {
        *self.tree.lock().expect("tree lock") = tree;
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Compiler for FakeCompiler {
    async fn compile(&self, _source: &str) -> Result<DeclTree, CompileError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.tree.lock().expect("tree lock").clone())
    }
}

/// Compiler fake that always fails.
pub(super) struct FailingCompiler;

#[async_trait]
impl Compiler for FailingCompiler {
    async fn compile(&self, _source: &str) -> Result<DeclTree, CompileError> {
        Err(CompileError::Failed("unsupported construct".to_string()))
    }
}
