// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{LineSnapshot, PinnedFuture};

/// Supplies text to splice in at the cursor when `Tab` is pressed.
///
/// The returned future owns everything it needs. Input keeps flowing while it runs,
/// but no command is applied until it resolves. It must resolve eventually, the
/// [`crate::EditorDriver`] applies no timeout.
pub trait CompletionProvider {
    /// `None` (or an empty string) means there's nothing to complete.
    fn complete(&mut self, line: LineSnapshot) -> PinnedFuture<Option<String>>;

    /// The line changed after a completion was spliced in. Dismiss any candidate list.
    fn session_ended(&mut self) {}
}

/// Receives each submitted line. Editing resumes once the returned future resolves.
pub trait SubmitHandler {
    fn submit(&mut self, text: String, line: LineSnapshot) -> PinnedFuture<()>;
}
