// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Text splice primitives used by the editing commands.
//!
//! All indices are **char indices** (one `char` is one code unit for the purposes of
//! this crate, see [`crate::LineBuffer`]). Grapheme clusters are not taken into account.
//!
//! Callers are expected to pass valid indices (`0 <= from <= to <= len`). The commands
//! in [`crate::line_editor`] guard every call with a boundary check first. Out of range
//! indices are clamped to the end of the text, which keeps these functions panic free.

/// Number of code units (chars) in `text`.
#[must_use]
pub fn char_count(text: &str) -> usize { text.chars().count() }

/// Byte offset of the char at `char_index`. Returns `text.len()` when `char_index` is at
/// or past the end.
#[must_use]
pub fn byte_offset_of(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(byte_index, _)| byte_index)
}

/// Returns `text` with the half open char range `[from, to)` deleted.
///
/// The result collapses to an empty string when `text` has at most one char (even for
/// an empty range) or when the range covers the whole text. Deleting from index 0 trims
/// a prefix, anything else splices the left and right remainders together.
#[must_use]
pub fn remove_range(text: &str, from: usize, to: usize) -> String {
    debug_assert!(from <= to, "remove_range: from ({from}) > to ({to})");

    let len = char_count(text);
    if len <= 1 || len <= to.saturating_sub(from) {
        return String::new();
    }

    let end = byte_offset_of(text, to);

    // Delete leading characters.
    if from == 0 {
        return text[end..].to_string();
    }

    let start = byte_offset_of(text, from);
    let mut acc = String::with_capacity(text.len() - (end - start));
    acc.push_str(&text[..start]);
    acc.push_str(&text[end..]);
    acc
}

/// Returns `text` with `ins` spliced in before the char at `idx`. An `idx` of 0
/// prepends, an `idx` at or past the end appends.
#[must_use]
pub fn insert_at(text: &str, idx: usize, ins: &str) -> String {
    let mut acc = String::with_capacity(text.len() + ins.len());

    if idx == 0 {
        acc.push_str(ins);
        acc.push_str(text);
        return acc;
    }

    let split = byte_offset_of(text, idx);
    acc.push_str(&text[..split]);
    acc.push_str(ins);
    acc.push_str(&text[split..]);
    acc
}
