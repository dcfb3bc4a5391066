//! Markdown block rendering for comments, signatures and type parameters

use std::fmt::Write as _;

use crate::error::RenderError;
use crate::extract::DocUnit;
use crate::tree::{DeclKind, DocComment, Signature, TypeParam};

/// Renders the structured pieces of a documentable unit into markdown
/// blocks. Purely functional; implementations must not perform I/O or
/// mutate the unit.
pub trait BlockRenderer: Send + Sync {
    /// Title text for the unit's heading; empty suppresses the heading.
    ///
    /// # Errors
    /// Returns [`RenderError`] when the title cannot be produced.
    fn member_title(&self, unit: &DocUnit) -> Result<String, RenderError>;

    /// Render a doc comment as a markdown block.
    ///
    /// # Errors
    /// Returns [`RenderError`] when the comment cannot be rendered.
    fn comment_block(&self, doc: &DocComment, heading_level: usize) -> Result<String, RenderError>;

    /// Render one call signature as a markdown block.
    ///
    /// # Errors
    /// Returns [`RenderError`] when the signature cannot be rendered.
    fn signature_block(
        &self,
        signature: &Signature,
        heading_level: usize,
    ) -> Result<String, RenderError>;

    /// Render the type-parameter table.
    ///
    /// # Errors
    /// Returns [`RenderError`] when the table cannot be rendered.
    fn type_params_table(&self, type_params: &[TypeParam]) -> Result<String, RenderError>;
}

/// Default plain-markdown block renderer.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownBlocks;

impl MarkdownBlocks {
    fn signature_repr(signature: &Signature) -> String {
        let params = signature
            .params
            .iter()
            .map(|p| {
                if p.type_repr.is_empty() {
                    p.name.clone()
                } else {
                    format!("{}: {}", p.name, p.type_repr)
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        let type_params = if signature.type_params.is_empty() {
            String::new()
        } else {
            let names = signature
                .type_params
                .iter()
                .map(|tp| tp.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!("<{names}>")
        };

        match &signature.returns {
            Some(ret) => format!("{}{}({}): {}", signature.name, type_params, params, ret),
            None => format!("{}{}({})", signature.name, type_params, params),
        }
    }

    fn heading(level: usize, text: &str) -> String {
        format!("{} {}", "#".repeat(level), text)
    }
}

impl BlockRenderer for MarkdownBlocks {
    fn member_title(&self, unit: &DocUnit) -> Result<String, RenderError> {
        // type literals are anonymous; their wrapper already named them
        if unit.kind == DeclKind::TypeLiteral {
            return Ok(String::new());
        }

        let mut title = unit.name.clone();
        if !unit.type_params.is_empty() {
            let names = unit
                .type_params
                .iter()
                .map(|tp| tp.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let _ = write!(title, "<{names}>");
        }
        Ok(title)
    }

    fn comment_block(&self, doc: &DocComment, heading_level: usize) -> Result<String, RenderError> {
        let mut parts = Vec::new();
        let summary = doc.summary.trim();
        if !summary.is_empty() {
            parts.push(summary.to_string());
        }

        for tag in &doc.tags {
            let text = tag.text.trim();
            if text.is_empty() {
                continue;
            }
            let mut label = tag.name.clone();
            if let Some(first) = label.get_mut(..1) {
                first.make_ascii_uppercase();
            }
            parts.push(Self::heading(heading_level, &label));
            parts.push(text.to_string());
        }

        Ok(parts.join("\n\n"))
    }

    fn signature_block(
        &self,
        signature: &Signature,
        heading_level: usize,
    ) -> Result<String, RenderError> {
        let mut parts = vec![format!("```\n{}\n```", Self::signature_repr(signature))];

        if let Some(doc) = &signature.doc {
            let block = self.comment_block(doc, heading_level + 1)?;
            if !block.is_empty() {
                parts.push(block);
            }
        }

        if signature.params.iter().any(|p| p.doc.is_some()) {
            parts.push(Self::heading(heading_level, "Parameters"));
            let mut table = String::from("| Parameter | Type | Description |\n| - | - | - |");
            for param in &signature.params {
                let description = param
                    .doc
                    .as_ref()
                    .map(|d| d.summary.trim().replace('\n', " "))
                    .unwrap_or_default();
                let _ = write!(
                    table,
                    "\n| `{}` | `{}` | {} |",
                    param.name, param.type_repr, description
                );
            }
            parts.push(table);
        }

        if let Some(returns) = &signature.returns {
            parts.push(Self::heading(heading_level, "Returns"));
            parts.push(format!("`{returns}`"));
        }

        Ok(parts.join("\n\n"))
    }

    fn type_params_table(&self, type_params: &[TypeParam]) -> Result<String, RenderError> {
        let mut table = String::from("| Type parameter | Constraint | Default |\n| - | - | - |");
        for tp in type_params {
            let _ = write!(
                table,
                "\n| `{}` | {} | {} |",
                tp.name,
                tp.constraint.as_deref().unwrap_or("-"),
                tp.default.as_deref().unwrap_or("-"),
            );
        }
        Ok(table)
    }
}
