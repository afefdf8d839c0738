// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::HISTORY_SIZE_MAX;

/// Previously submitted lines plus one trailing "current" slot that holds the line
/// being edited.
///
/// ```text
/// entries: ["ls", "cd /tmp", "<current>"]
///                              ▲
///                              └ cursor (after a submit)
/// ```
///
/// Invariants:
/// - `entries` is never empty. The last element is the in-progress slot.
/// - `cursor` is always in `0..entries.len()`.
///
/// [`History::prev()`] and [`History::next()`] do not check bounds. Callers must check
/// [`History::has_prev()`] / [`History::has_next()`] first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
    /// Max number of committed entries (the trailing current slot is not counted).
    pub max_size: usize,
}

impl Default for History {
    fn default() -> Self { Self::with_max_size(HISTORY_SIZE_MAX) }
}

impl History {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            entries: vec![String::new()],
            cursor: 0,
            max_size,
        }
    }

    /// Seed history with previously committed lines, oldest first. This is how an
    /// embedder restores history that it persisted across sessions. Only the newest
    /// `max_size` lines are kept.
    #[must_use]
    pub fn from_entries(
        committed: impl IntoIterator<Item = impl Into<String>>,
        max_size: usize,
    ) -> Self {
        let mut entries: Vec<String> = committed.into_iter().map(Into::into).collect();
        if entries.len() > max_size {
            entries.drain(..entries.len() - max_size);
        }
        entries.push(String::new());
        let cursor = entries.len() - 1;
        Self {
            entries,
            cursor,
            max_size,
        }
    }

    /// Overwrite the entry at the cursor with the live buffer text.
    pub fn update(&mut self, text: &str) {
        if let Some(entry) = self.entries.get_mut(self.cursor) {
            entry.clear();
            entry.push_str(text);
        }
    }

    /// Commit `text`. If the cursor is on the trailing slot it is overwritten, otherwise
    /// `text` is appended (the recalled entry it was edited from stays as it is). Then a
    /// fresh empty slot is appended and the cursor moves to it.
    pub fn accept(&mut self, text: &str) {
        if self.cursor == self.entries.len() - 1 {
            self.update(text);
        } else {
            self.entries.push(text.to_string());
        }
        self.entries.push(String::new());
        self.trim_to_max_size();
        self.cursor = self.entries.len() - 1;
    }

    #[must_use]
    pub fn has_prev(&self) -> bool { self.cursor > 0 }

    #[must_use]
    pub fn has_next(&self) -> bool { self.cursor < self.entries.len() - 1 }

    /// Step back and return the entry now under the cursor. Guard with
    /// [`Self::has_prev()`].
    pub fn prev(&mut self) -> &str {
        debug_assert!(self.has_prev());
        self.cursor = self.cursor.saturating_sub(1);
        &self.entries[self.cursor]
    }

    /// Step forward and return the entry now under the cursor. Guard with
    /// [`Self::has_next()`].
    pub fn next(&mut self) -> &str {
        debug_assert!(self.has_next());
        self.cursor = (self.cursor + 1).min(self.entries.len() - 1);
        &self.entries[self.cursor]
    }

    /// Committed entries, oldest first, without the trailing current slot. Note that
    /// navigating with [`Self::update()`] in between can rewrite committed entries.
    #[must_use]
    pub fn entries(&self) -> &[String] { &self.entries[..self.entries.len() - 1] }

    /// Number of slots, including the trailing current slot. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Always `false`, the current slot always exists. Provided for symmetry with
    /// [`Self::len()`].
    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    fn trim_to_max_size(&mut self) {
        let committed = self.entries.len() - 1;
        if committed > self.max_size {
            self.entries.drain(..committed - self.max_size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_with_one_blank_slot() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert!(!history.has_prev());
        assert!(!history.has_next());
        assert!(history.entries().is_empty());
    }

    #[test]
    fn test_accept_then_prev() {
        let mut history = History::new();
        history.accept("a");
        assert_eq!(history.entries(), &["a".to_string()]);
        assert_eq!(history.cursor(), 1);

        history.accept("b");
        assert_eq!(history.entries(), &["a".to_string(), "b".to_string()]);
        assert_eq!(history.cursor(), 2);

        assert!(history.has_prev());
        assert_eq!(history.prev(), "b");
        assert_eq!(history.prev(), "a");
        assert!(!history.has_prev());
        assert!(history.has_next());
        assert_eq!(history.next(), "b");
        assert_eq!(history.next(), "");
        assert!(!history.has_next());
    }

    #[test]
    fn test_update_overwrites_slot_under_cursor() {
        let mut history = History::new();
        history.accept("first");
        history.update("draft");
        assert_eq!(history.prev(), "first");
        assert_eq!(history.next(), "draft");
    }

    #[test]
    fn test_accept_from_recalled_entry_appends() {
        let mut history = History::new();
        history.accept("one");
        history.accept("two");
        history.prev();
        history.prev();
        // Cursor is on "one", which is not the tail.
        history.accept("one more");
        assert_eq!(
            history.entries(),
            &["one".to_string(), "two".to_string(), String::new(), "one more".to_string()]
        );
        assert_eq!(history.cursor(), history.len() - 1);
    }

    #[test]
    fn test_max_size_drops_oldest() {
        let mut history = History::with_max_size(2);
        history.accept("1");
        history.accept("2");
        history.accept("3");
        assert_eq!(history.entries(), &["2".to_string(), "3".to_string()]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);
    }

    #[test]
    fn test_from_entries() {
        let mut history = History::from_entries(["x", "y", "z"], 2);
        assert_eq!(history.entries(), &["y".to_string(), "z".to_string()]);
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.prev(), "z");
    }
}
