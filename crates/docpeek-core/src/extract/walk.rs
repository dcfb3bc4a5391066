//! Tree walk: recursion, line computation and unit emission

use std::collections::HashSet;
use std::path::Path;

use crate::tree::{DeclKind, DeclNode, DeclTree, DocComment, LineMap, Signature};

use super::attach::{attach_ancestor_doc, resolve_merged};
use super::unit::DocUnit;

/// Extraction policy knobs.
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    /// Treat empty comments as absent and drop signature sets with no
    /// documentation anywhere. On by default.
    pub hide_empty_signatures: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            hide_empty_signatures: true,
        }
    }
}

pub(super) fn walk_tree(
    tree: &DeclTree,
    source: &str,
    origin_file: &Path,
    options: &ExtractOptions,
) -> Vec<DocUnit> {
    let mut walker = Walker {
        lines: LineMap::new(source),
        origin: origin_file,
        options: *options,
        seen_ranges: HashSet::new(),
        units: Vec::new(),
    };

    let mut ancestors = Vec::new();
    walker.visit_children(&tree.root, &mut ancestors);
    walker.units
}

struct Walker<'a> {
    lines: LineMap,
    origin: &'a Path,
    options: ExtractOptions,
    /// Exact `(start_line, end_line)` pairs already emitted; recursion can
    /// revisit structurally identical ranges.
    seen_ranges: HashSet<(u32, u32)>,
    units: Vec<DocUnit>,
}

impl Walker<'_> {
    fn visit_children<'t>(&mut self, parent: &'t DeclNode, ancestors: &mut Vec<&'t DeclNode>) {
        // Body-start line of a constructor already seen among these
        // children, used to suppress parameter-promoted properties.
        let mut ctor_body_start: Option<u32> = None;

        ancestors.push(parent);
        for child in &parent.children {
            self.visit_decl(child, ancestors, &mut ctor_body_start);
        }
        ancestors.pop();
    }

    fn visit_decl<'t>(
        &mut self,
        decl: &'t DeclNode,
        ancestors: &mut Vec<&'t DeclNode>,
        ctor_body_start: &mut Option<u32>,
    ) {
        if decl.inherited || decl.file != self.origin {
            return;
        }

        let resolved = resolve_merged(decl);
        let decl_line = self.lines.line_of(resolved.span.start);

        let doc = resolved
            .doc
            .or_else(|| attach_ancestor_doc(ancestors, decl_line, &self.lines));
        let doc_start = doc.and_then(|d| d.span).map(|s| s.start);

        let mut start_line = doc_start.map_or(decl_line, |pos| self.lines.line_of(pos));
        let mut end_line = decl_line;
        let mut body_start_line = 0;

        if let Some(body) = resolved.body {
            start_line = self.lines.line_of(doc_start.unwrap_or(body.start));
            end_line = self.lines.line_of(body.end);
            body_start_line = self.lines.line_of(body.start);
        }

        // Type aliases and type-parameter lists may extend past the lines
        // computed so far; widen so the whole declaration stays covered.
        // A structural wrapper's lines belong to the wrapped declaration.
        if decl.structural.is_none() {
            let decl_end_line = self.lines.line_of(resolved.span.end);
            if decl.kind == DeclKind::TypeAlias && decl_end_line > end_line {
                end_line = decl_end_line;
            }

            for tp in &decl.type_params {
                if let Some(end) = tp.end {
                    end_line = end_line.max(self.lines.line_of(end));
                }
            }
        }

        let mut allow_add = true;
        match decl.kind {
            // A property declared on the constructor's own line was promoted
            // from a parameter modifier; it is documented as part of the
            // constructor, not on its own.
            DeclKind::Property => {
                if ctor_body_start.is_some_and(|line| line == decl_line) {
                    allow_add = false;
                }
            }
            DeclKind::Constructor => {
                *ctor_body_start = Some(body_start_line);
            }
            _ => {}
        }

        if allow_add {
            self.emit_units(decl, doc, start_line, end_line);
        }

        let mut target = decl;
        let mut iterate = !decl.children.is_empty() && decl.kind.is_container();
        if let Some(structural) = &decl.structural {
            if !structural.children.is_empty() {
                iterate = true;
                target = structural;
            }
        }

        if iterate {
            self.visit_children(target, ancestors);
        }
    }

    fn emit_units(
        &mut self,
        decl: &DeclNode,
        doc: Option<&DocComment>,
        start_line: u32,
        mut end_line: u32,
    ) {
        let mut comment = doc.cloned();
        let mut signatures: &[Signature] = &decl.signatures;

        // A bare wrapper around a structural type borrows the wrapped
        // declaration's comment and signatures so it still yields a
        // usable fragment.
        if comment.is_none() && signatures.is_empty() {
            if let Some(structural) = &decl.structural {
                comment = structural.doc.clone();
                signatures = &structural.signatures;
            }
        }

        if self.options.hide_empty_signatures {
            if comment.as_ref().is_some_and(DocComment::is_empty) {
                comment = None;
            }
            if !signatures.iter().any(Signature::is_documented) {
                signatures = &[];
            }
        }

        if comment.is_none() && signatures.is_empty() {
            return;
        }

        if signatures.is_empty() {
            self.push_unit(decl, comment, None, start_line, end_line);
            return;
        }

        for signature in signatures {
            let from_this_file = signature
                .file
                .as_ref()
                .is_none_or(|file| file == self.origin);

            if let Some(line) = signature.line {
                end_line = end_line.max(line);
            }

            if from_this_file {
                self.push_unit(
                    decl,
                    comment.clone(),
                    Some(signature.clone()),
                    start_line,
                    end_line,
                );
            }
        }
    }

    fn push_unit(
        &mut self,
        decl: &DeclNode,
        doc: Option<DocComment>,
        signature: Option<Signature>,
        start_line: u32,
        end_line: u32,
    ) {
        let end_line = end_line.max(start_line);
        if !self.seen_ranges.insert((start_line, end_line)) {
            return;
        }

        self.units.push(DocUnit {
            start_line,
            end_line,
            kind: decl.kind,
            name: decl.name.clone(),
            doc,
            signature,
            type_params: decl.type_params.clone(),
            has_own_page: decl.has_own_page,
        });
    }
}
