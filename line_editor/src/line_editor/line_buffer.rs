// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{char_count, find_next_word_start, find_prev_word_start, insert_at,
            remove_range};

/// Point in time copy of the line, handed to hooks and collaborators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSnapshot {
    pub text: String,
    /// Char index, in `0..=text.chars().count()`.
    pub cursor: usize,
}

/// The editable text and its cursor.
///
/// The cursor is a char index and is always in `0..=len`. Every mutating method keeps
/// it there. Methods that return `bool` report whether anything changed, so that the
/// command layer can skip the change notification for boundary no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
    cursor: usize,
}

impl LineBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    /// Length in chars.
    #[must_use]
    pub fn len(&self) -> usize { char_count(&self.text) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.text.is_empty() }

    #[must_use]
    pub fn snapshot(&self) -> LineSnapshot {
        LineSnapshot {
            text: self.text.clone(),
            cursor: self.cursor,
        }
    }

    /// Remove the char left of the cursor. No-op at 0.
    pub fn backward_delete_char(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.text = remove_range(&self.text, self.cursor, self.cursor + 1);
        true
    }

    /// Remove the char under the cursor. No-op at the end.
    pub fn delete_char(&mut self) -> bool {
        if self.cursor == self.len() {
            return false;
        }
        self.text = remove_range(&self.text, self.cursor, self.cursor + 1);
        true
    }

    pub fn move_home(&mut self) { self.cursor = 0; }

    pub fn move_end(&mut self) { self.cursor = self.len(); }

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor == self.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Move to the start of the previous word. No-op at 0.
    pub fn move_backward_word(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor = find_prev_word_start(&self.text, self.cursor);
        true
    }

    /// Move to the start of the next word, or the end. No-op at the end.
    pub fn move_forward_word(&mut self) -> bool {
        if self.cursor == self.len() {
            return false;
        }
        self.cursor = find_next_word_start(&self.text, self.cursor);
        true
    }

    /// Truncate the text at the cursor and return what was cut off.
    pub fn kill_to_end(&mut self) -> String {
        let killed: String = self.text.chars().skip(self.cursor).collect();
        self.text = self.text.chars().take(self.cursor).collect();
        killed
    }

    /// Insert `ins` at the cursor and move the cursor past it.
    pub fn insert_str(&mut self, ins: &str) {
        self.text = insert_at(&self.text, self.cursor, ins);
        self.cursor += char_count(ins);
    }

    pub fn insert_char(&mut self, c: char) {
        let mut buf = [0; 4];
        self.insert_str(c.encode_utf8(&mut buf));
    }

    /// Replace the whole text and put the cursor at the end.
    pub fn replace(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.cursor = self.len();
    }

    /// Empty the buffer and return the text it held.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }
}

/// Single slot holding the last killed span. Kill overwrites it, yank reads it without
/// consuming it, so the same text can be yanked any number of times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KillRegister {
    text: String,
}

impl KillRegister {
    pub fn set(&mut self, text: String) { self.text = text; }

    #[must_use]
    pub fn get(&self) -> &str { &self.text }
}
