//! Serde model of the compiled declaration tree
//!
//! This is the boundary format between the external semantic compiler and
//! the extractor. Positions are byte offsets into the raw source text; the
//! extractor resolves them to 1-based lines through [`super::LineMap`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A half-open byte range `[start, end)` into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start: u32,
    pub end: u32,
}

impl SourceSpan {
    #[must_use]
    pub fn new(start: u32, end: u32) -> Self {
        SourceSpan { start, end }
    }
}

/// Declaration kinds (closed set; mirrors the compiler's semantic kinds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    Project,
    Module,
    Namespace,
    Class,
    Interface,
    Enum,
    EnumMember,
    Function,
    Method,
    Constructor,
    Property,
    Accessor,
    Variable,
    TypeAlias,
    TypeLiteral,
}

impl DeclKind {
    /// Human-readable singular label used in fragment headings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DeclKind::Project => "Project",
            DeclKind::Module => "Module",
            DeclKind::Namespace => "Namespace",
            DeclKind::Class => "Class",
            DeclKind::Interface => "Interface",
            DeclKind::Enum => "Enum",
            DeclKind::EnumMember => "Enum member",
            DeclKind::Function => "Function",
            DeclKind::Method => "Method",
            DeclKind::Constructor => "Constructor",
            DeclKind::Property => "Property",
            DeclKind::Accessor => "Accessor",
            DeclKind::Variable => "Variable",
            DeclKind::TypeAlias => "Type alias",
            DeclKind::TypeLiteral => "Type literal",
        }
    }

    /// Whether the extractor recurses into this kind's children.
    ///
    /// Documentation can only meaningfully attach inside these containers.
    #[must_use]
    pub fn is_container(self) -> bool {
        matches!(
            self,
            DeclKind::Project
                | DeclKind::Module
                | DeclKind::Namespace
                | DeclKind::Class
                | DeclKind::Interface
        )
    }
}

/// One block tag inside a doc comment (`@remarks`, `@example`, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocTag {
    pub name: String,
    #[serde(default)]
    pub text: String,
}

/// A parsed documentation comment with its source position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocComment {
    /// Byte range of the comment in the source, when known.
    #[serde(default)]
    pub span: Option<SourceSpan>,
    /// Summary text (markdown).
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<DocTag>,
}

impl DocComment {
    /// True when the comment carries no usable text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summary.trim().is_empty() && self.tags.iter().all(|t| t.text.trim().is_empty())
    }
}

/// One parameter of a call signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(default)]
    pub type_repr: String,
    #[serde(default)]
    pub doc: Option<DocComment>,
}

/// One generic type parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParam {
    pub name: String,
    #[serde(default)]
    pub constraint: Option<String>,
    #[serde(default)]
    pub default: Option<String>,
    /// Byte offset of the parameter's end, used to widen a unit's end line.
    #[serde(default)]
    pub end: Option<u32>,
}

/// One call signature of a function-like declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    /// File the signature was declared in, when it differs from the tree's.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// 1-based source line of the signature, when known.
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub doc: Option<DocComment>,
    #[serde(default)]
    pub params: Vec<Param>,
    #[serde(default)]
    pub returns: Option<String>,
    #[serde(default)]
    pub type_params: Vec<TypeParam>,
}

impl Signature {
    /// A signature is documented when its own comment or any parameter's
    /// comment is non-empty.
    #[must_use]
    pub fn is_documented(&self) -> bool {
        if self.doc.as_ref().is_some_and(|d| !d.is_empty()) {
            return true;
        }
        self.params
            .iter()
            .any(|p| p.doc.as_ref().is_some_and(|d| !d.is_empty()))
    }
}

/// An alternative declaration of a merged symbol.
///
/// A symbol can have several declarations of different syntactic kinds, e.g.
/// an interface merged with a same-named variable. The extractor picks the
/// candidate whose kind matches the node's semantic kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedDecl {
    pub kind: DeclKind,
    pub span: SourceSpan,
    #[serde(default)]
    pub body: Option<SourceSpan>,
    #[serde(default)]
    pub doc: Option<DocComment>,
}

/// One declaration in the compiled tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclNode {
    #[serde(default)]
    pub name: String,
    pub kind: DeclKind,
    /// File this declaration originates from.
    #[serde(default)]
    pub file: PathBuf,
    /// Byte range of the whole declaration.
    pub span: SourceSpan,
    /// Byte range of the declaration's body, when it has one.
    #[serde(default)]
    pub body: Option<SourceSpan>,
    #[serde(default)]
    pub doc: Option<DocComment>,
    #[serde(default)]
    pub signatures: Vec<Signature>,
    #[serde(default)]
    pub type_params: Vec<TypeParam>,
    /// The wrapped structural (object) type declaration, when this node is
    /// an alias or variable denoting one.
    #[serde(default)]
    pub structural: Option<Box<DeclNode>>,
    /// Candidate declarations of a merged symbol.
    #[serde(default)]
    pub merged: Vec<MergedDecl>,
    /// Inherited members are never documented at the inheriting site.
    #[serde(default)]
    pub inherited: bool,
    /// Whether the rendered documentation gives this declaration its own
    /// top-level page (suppresses the kind prefix in headings).
    #[serde(default)]
    pub has_own_page: bool,
    #[serde(default)]
    pub children: Vec<DeclNode>,
}

/// The compiled declaration tree for one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclTree {
    /// File identity the compiler reports for this tree.
    pub file: PathBuf,
    /// Root scope (project or module level).
    pub root: DeclNode,
}
