// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, IntoStaticStr};

/// The closed set of editing commands. Each one is a unit of work that the
/// [`crate::Editor`] interprets against its private state.
///
/// The name of each variant (e.g. `"backward-delete-char"`) is what shows up in the
/// logs and in [`crate::Editor::last_command()`].
///
/// Only [`Command::Complete`] and [`Command::Submit`] are asynchronous. Everything else
/// runs to completion in the turn it's dispatched in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Command {
    BackwardDeleteChar,
    DeleteChar,
    CursorHome,
    CursorEnd,
    CursorLeft,
    CursorRight,
    HistoryPrev,
    HistoryNext,
    KillToEndOfLine,
    Yank,
    Refresh,
    /// Insert a composed character. Also fires the keydown hook for it, at the time the
    /// insert actually runs.
    InsertChar(char),
    /// Ask the completion provider for text to splice in at the cursor. Async.
    Complete,
    /// Commit the line to history, clear it and hand it to the submit handler. Async.
    Submit,
    /// Accepted but has no effect. Incremental search is not supported.
    ReverseSearch,
    BackwardWord,
    ForwardWord,
}

impl Command {
    #[must_use]
    pub fn name(&self) -> &'static str { self.into() }

    /// Whether this command may suspend the [`crate::CommandQueue`].
    #[must_use]
    pub fn is_async(&self) -> bool { matches!(self, Command::Complete | Command::Submit) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_command_names() {
        assert_eq!(Command::BackwardDeleteChar.name(), "backward-delete-char");
        assert_eq!(Command::KillToEndOfLine.name(), "kill-to-end-of-line");
        assert_eq!(Command::InsertChar('x').name(), "insert-char");
        assert_eq!(Command::HistoryPrev.to_string(), "history-prev");
        assert_eq!(Command::ReverseSearch.to_string(), "reverse-search");
    }

    #[test]
    fn test_only_complete_and_submit_are_async() {
        assert!(Command::Complete.is_async());
        assert!(Command::Submit.is_async());
        assert!(!Command::InsertChar('a').is_async());
        assert!(!Command::Refresh.is_async());
    }
}
