// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Word boundary detection for the word motion commands.
//!
//! ## Word Boundary Rules
//!
//! A character is considered a word boundary if it is:
//! - Whitespace (`.is_whitespace()`)
//! - ASCII punctuation (`.is_ascii_punctuation()`)
//!
//! Everything else is considered a word character.
//!
//! ```text
//! "hello world"  → words: ["hello", "world"]
//! "hello-world"  → words: ["hello", "world"] (hyphen is boundary)
//! "foo.bar()"    → words: ["foo", "bar"] (punctuation is boundary)
//! "hello  world" → words: ["hello", "world"] (multiple spaces treated as one boundary)
//! ```
//!
//! Positions are char indices, same as [`crate::LineBuffer`].

#[must_use]
pub fn is_word_boundary(c: char) -> bool { c.is_whitespace() || c.is_ascii_punctuation() }

/// Char index of the start of the word before `cursor`. Skips any boundary characters
/// immediately to the left of the cursor first. Returns 0 if there is no such word.
#[must_use]
pub fn find_prev_word_start(text: &str, cursor: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut idx = cursor.min(chars.len());

    while idx > 0 && is_word_boundary(chars[idx - 1]) {
        idx -= 1;
    }
    while idx > 0 && !is_word_boundary(chars[idx - 1]) {
        idx -= 1;
    }

    idx
}

/// Char index of the start of the word after `cursor`. Skips the rest of the word under
/// the cursor, then any boundary characters. Returns the text length if there is no
/// next word.
#[must_use]
pub fn find_next_word_start(text: &str, cursor: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut idx = cursor.min(len);

    while idx < len && !is_word_boundary(chars[idx]) {
        idx += 1;
    }
    while idx < len && is_word_boundary(chars[idx]) {
        idx += 1;
    }

    idx
}
