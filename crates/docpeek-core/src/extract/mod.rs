//! Declaration extractor: compiled tree → flat documentable units
//!
//! Walks the declaration tree once per compile pass and produces the
//! discovery-ordered list of units the range index is built from. All of
//! the attachment and de-duplication heuristics live here: merged-symbol
//! disambiguation, ancestor doc-comment adjacency, constructor-promoted
//! property suppression, structural dereference and the hide-empty policy.

mod attach;
mod unit;
mod walk;

use std::path::Path;

use crate::tree::DeclTree;

pub use unit::DocUnit;
pub use walk::ExtractOptions;

/// Extract all documentable units for the file under preview.
///
/// `source` is the raw text the tree was compiled from; it drives byte
/// offset to line resolution. Declarations originating from any other file
/// than `origin_file` are ignored.
#[must_use]
pub fn extract(
    tree: &DeclTree,
    source: &str,
    origin_file: &Path,
    options: &ExtractOptions,
) -> Vec<DocUnit> {
    let units = walk::walk_tree(tree, source, origin_file, options);
    tracing::debug!(
        "Extracted {} documentable units from '{}'",
        units.len(),
        origin_file.display()
    );
    units
}

#[cfg(test)]
mod tests;
