//! Tests for fragment requests against the session

use std::path::Path;

use super::helpers::{expire_map_tree, make_node, make_tree, source, FakeCompiler, FILE};
use crate::extract::ExtractOptions;
use crate::session::{PreviewSession, RequestMode};
use crate::tree::DeclKind;

fn make_session() -> PreviewSession {
    PreviewSession::new(ExtractOptions::default())
}

#[tokio::test]
async fn test_cursor_inside_constructor_returns_its_fragment() {
    let compiler = FakeCompiler::new(expire_map_tree("Creates the map."));
    let mut session = make_session();
    let text = source(30);

    let md = session
        .fragment(&compiler, &text, Path::new(FILE), 12, RequestMode::Cursor)
        .await;

    assert!(md.contains("Creates the map."));
    assert!(!md.contains("A map with expiry."));
    assert!(!md.contains("Stores a value."));
}

#[tokio::test]
async fn test_cursor_on_class_header_returns_class_fragment() {
    let compiler = FakeCompiler::new(expire_map_tree("Creates the map."));
    let mut session = make_session();
    let text = source(30);

    let md = session
        .fragment(&compiler, &text, Path::new(FILE), 3, RequestMode::Cursor)
        .await;

    assert!(md.contains("# Class: ExpireMap"));
    assert!(md.contains("A map with expiry."));
}

#[tokio::test]
async fn test_line_outside_every_unit_yields_empty() {
    let compiler = FakeCompiler::new(expire_map_tree("Creates the map."));
    let mut session = make_session();
    let text = source(30);

    let md = session
        .fragment(&compiler, &text, Path::new(FILE), 9, RequestMode::Cursor)
        .await;

    assert_eq!(md, "");
}

#[tokio::test]
async fn test_line_zero_compiles_without_fragment() {
    let compiler = FakeCompiler::new(expire_map_tree("Creates the map."));
    let mut session = make_session();
    let text = source(30);

    let md = session
        .fragment(&compiler, &text, Path::new(FILE), 0, RequestMode::Content)
        .await;

    assert_eq!(md, "");
    assert_eq!(compiler.calls(), 1);
    assert_eq!(session.unit_count(), 3);

    // the warmed index serves the next cursor request without recompiling
    let md = session
        .fragment(&compiler, &text, Path::new(FILE), 12, RequestMode::Cursor)
        .await;
    assert!(md.contains("Creates the map."));
    assert_eq!(compiler.calls(), 1);
}

#[tokio::test]
async fn test_first_cursor_request_forces_compile() {
    let compiler = FakeCompiler::new(expire_map_tree("Creates the map."));
    let mut session = make_session();
    let text = source(30);

    assert_eq!(session.generation(), 0);
    session
        .fragment(&compiler, &text, Path::new(FILE), 12, RequestMode::Cursor)
        .await;

    assert_eq!(compiler.calls(), 1);
    assert_eq!(session.generation(), 1);
}

#[tokio::test]
async fn test_file_switch_resets_and_recompiles() {
    let compiler = FakeCompiler::new(expire_map_tree("Creates the map."));
    let mut session = make_session();
    let text = source(30);

    session
        .fragment(&compiler, &text, Path::new(FILE), 12, RequestMode::Cursor)
        .await;
    assert_eq!(session.origin_file(), Path::new(FILE));

    // same compiler output, different requested origin: the session resets,
    // recompiles, and then rejects the mismatched tree
    let md = session
        .fragment(
            &compiler,
            &text,
            Path::new("/src/other.ts"),
            12,
            RequestMode::Cursor,
        )
        .await;

    assert_eq!(compiler.calls(), 2);
    assert_eq!(md, "");
    assert_eq!(session.unit_count(), 0);
}

#[tokio::test]
async fn test_hide_empty_signatures_policy_round_trip() {
    let mut func = make_node("overloaded", DeclKind::Function, 2, 2);
    func.signatures = vec![
        crate::tree::Signature {
            name: "overloaded".to_string(),
            ..crate::tree::Signature::default()
        },
        crate::tree::Signature {
            name: "overloaded".to_string(),
            line: Some(3),
            ..crate::tree::Signature::default()
        },
    ];
    let tree = make_tree(vec![func]);
    let text = source(5);

    // hidden: every line in the declaration's range yields nothing
    let compiler = FakeCompiler::new(tree.clone());
    let mut hiding = PreviewSession::new(ExtractOptions {
        hide_empty_signatures: true,
    });
    for line in 2..=3 {
        let md = hiding
            .fragment(&compiler, &text, Path::new(FILE), line, RequestMode::Cursor)
            .await;
        assert_eq!(md, "");
    }

    // shown: the signature block itself is enough for a fragment
    let mut showing = PreviewSession::new(ExtractOptions {
        hide_empty_signatures: false,
    });
    let md = showing
        .fragment(&compiler, &text, Path::new(FILE), 2, RequestMode::Cursor)
        .await;
    assert!(md.contains("```"));
    assert!(md.contains("overloaded()"));
}
