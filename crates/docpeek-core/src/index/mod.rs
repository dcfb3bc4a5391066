//! Range index: point-containment queries over documentable units
//!
//! Entries are held sorted ascending by start line; ties keep discovery
//! order so earlier-discovered (enclosing) declarations win deterministic
//! tie-breaks against units emitted later in the same pass.

use crate::extract::DocUnit;

/// Ordered collection of line-range entries supporting point queries.
#[derive(Debug, Default)]
pub struct RangeIndex {
    entries: Vec<DocUnit>,
}

impl RangeIndex {
    #[must_use]
    pub fn new() -> Self {
        RangeIndex::default()
    }

    /// Replace the whole sequence with a fresh extraction pass.
    ///
    /// Sorting is stable: units sharing a start line keep the order in
    /// which the extractor discovered them.
    pub fn rebuild(&mut self, mut units: Vec<DocUnit>) {
        units.sort_by_key(|u| u.start_line);
        self.entries = units;
    }

    /// Discard all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Find the unit for a cursor line.
    ///
    /// Prefers the first entry whose range starts exactly at `line`, then
    /// the first entry whose range contains it, scanning in ascending start
    /// order. `None` means the caller renders an empty fragment.
    #[must_use]
    pub fn query_at(&self, line: u32) -> Option<&DocUnit> {
        if line == 0 {
            return None;
        }

        self.entries
            .iter()
            .find(|u| u.start_line == line)
            .or_else(|| self.entries.iter().find(|u| u.contains(line)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Units in query order.
    pub fn iter(&self) -> impl Iterator<Item = &DocUnit> {
        self.entries.iter()
    }
}
