//! Fragment composition

use crate::error::RenderError;
use crate::extract::DocUnit;
use crate::tree::DeclKind;

use super::blocks::BlockRenderer;

/// Render the minimal markdown fragment for one documentable unit.
///
/// Builds a heading (kind label plus title) unless the unit owns its own
/// page or is a constructor, appends the signature block when the unit
/// carries one, otherwise the comment block plus a type-parameter table,
/// strips any trailing source-position section and trims whitespace. An
/// empty result means "no fragment" to the caller. The unit is never
/// mutated.
///
/// # Errors
/// Propagates [`RenderError`] from the block renderer; the session catches
/// it and degrades to an empty fragment.
pub fn render_fragment(unit: &DocUnit, blocks: &dyn BlockRenderer) -> Result<String, RenderError> {
    if unit.doc.is_none() && unit.signature.is_none() {
        return Ok(String::new());
    }

    let title = blocks.member_title(unit)?;
    let heading = if title.is_empty() {
        String::new()
    } else if unit.has_own_page || unit.kind == DeclKind::Constructor {
        title
    } else {
        format!("{}: {}", unit.kind.label(), title)
    };

    let mut md = Vec::new();
    let mut heading_level = 1;
    if !heading.is_empty() {
        md.push(format!("# {heading}"));
        heading_level += 1;
    }

    if let Some(signature) = &unit.signature {
        md.push(blocks.signature_block(signature, heading_level)?);
    } else if let Some(doc) = &unit.doc {
        md.push(blocks.comment_block(doc, heading_level)?);

        if !unit.type_params.is_empty() {
            md.push("## Type parameters".to_string());
            md.push(blocks.type_params_table(&unit.type_params)?);
        }
    }

    let mut result = md.join("\n\n").trim_end().to_string();

    // position/file metadata is never shown in a preview fragment
    if let Some(idx) = result.rfind("## Source") {
        result.truncate(idx);
    }

    let trimmed_len = result.trim_end().len();
    result.truncate(trimmed_len);
    Ok(result)
}
