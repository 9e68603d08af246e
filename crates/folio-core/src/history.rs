//! Submitted-command history with Up/Down navigation.

/// Append-only log of submissions plus a navigation cursor.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    /// Index into `entries` while navigating; `None` otherwise.
    cursor: Option<usize>,
}

impl History {
    pub fn new(seed: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            entries: seed.into_iter().map(Into::into).collect(),
            cursor: None,
        }
    }

    /// Records a submission and stops navigating.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
        self.cursor = None;
    }

    /// Moves toward older entries, stopping at the oldest.
    ///
    /// Returns the entry to show, or `None` when the log is empty.
    pub fn older(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = match self.cursor {
            None => self.entries.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(idx);
        Some(&self.entries[idx])
    }

    /// Moves toward newer entries.
    ///
    /// Returns `None` when not navigating (leave the input alone),
    /// `Some("")` after stepping past the newest entry (clear the input).
    pub fn newer(&mut self) -> Option<&str> {
        let idx = self.cursor? + 1;
        if idx >= self.entries.len() {
            self.cursor = None;
            Some("")
        } else {
            self.cursor = Some(idx);
            Some(&self.entries[idx])
        }
    }

    /// Stops navigating without touching the log.
    pub fn reset_navigation(&mut self) {
        self.cursor = None;
    }

    pub fn is_navigating(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(entries: &[&str]) -> History {
        let mut history = History::default();
        for entry in entries {
            history.push(*entry);
        }
        history
    }

    #[test]
    fn test_older_walks_back_and_stops_at_oldest() {
        let mut h = history(&["about", "skills"]);
        assert_eq!(h.older(), Some("skills"));
        assert_eq!(h.older(), Some("about"));
        assert_eq!(h.older(), Some("about"));
        assert_eq!(h.cursor(), Some(0));
    }

    #[test]
    fn test_newer_past_newest_clears_and_resets() {
        let mut h = history(&["about", "skills"]);
        h.older();
        h.older();
        assert_eq!(h.newer(), Some("skills"));
        assert_eq!(h.newer(), Some(""));
        assert!(!h.is_navigating());
    }

    #[test]
    fn test_newer_without_navigation_is_noop() {
        let mut h = history(&["about"]);
        assert_eq!(h.newer(), None);
        assert!(!h.is_navigating());
    }

    #[test]
    fn test_empty_history() {
        let mut h = History::default();
        assert_eq!(h.older(), None);
        assert_eq!(h.newer(), None);
    }

    #[test]
    fn test_push_resets_cursor_even_for_unknown_commands() {
        let mut h = history(&["about"]);
        h.older();
        h.push("nonsense");
        assert!(!h.is_navigating());
        assert_eq!(h.older(), Some("nonsense"));
    }

    #[test]
    fn test_seeded_history() {
        let mut h = History::new(["about", "exp", "skills"]);
        assert_eq!(h.len(), 3);
        assert_eq!(h.older(), Some("skills"));
    }
}
