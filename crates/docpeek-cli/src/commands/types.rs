//! Event types shared between the watch loop and its tests

/// One line of the watch protocol read from stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchEvent {
    /// `cursor N`: the caret moved to 1-based line N.
    Cursor(u32),
    /// `content N`: the buffer changed with the caret on line N.
    Content(u32),
    /// `quit`: stop watching.
    Quit,
}

impl WatchEvent {
    /// Parse one protocol line; `None` for anything malformed.
    #[must_use]
    pub fn parse(line: &str) -> Option<WatchEvent> {
        let mut words = line.split_whitespace();
        let event = match (words.next()?, words.next()) {
            ("quit", None) => WatchEvent::Quit,
            ("cursor", Some(n)) => WatchEvent::Cursor(n.parse().ok()?),
            ("content", Some(n)) => WatchEvent::Content(n.parse().ok()?),
            _ => return None,
        };
        // trailing tokens make the line malformed
        if words.next().is_some() {
            return None;
        }
        Some(event)
    }
}
