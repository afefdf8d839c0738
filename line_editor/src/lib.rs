// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_line_editor
//!
//! A line editing engine. It owns a single line of editable text and a cursor, turns
//! key presses into named editing commands, and tells the embedder (via hooks) when
//! the line changes or is submitted. It is the input editing core that sits under any
//! interactive command line style text field.
//!
//! Rendering and the physical input source are not part of this crate's core. They
//! are plugged in by the embedder:
//!
//! 1. Input arrives as [`InputEvent`]s. There are two streams:
//!    [`InputEvent::KeyDown`] for special and modified keys, and [`InputEvent::Char`]
//!    for composed printable characters. [`convert_crossterm_event()`] produces these
//!    from [`crossterm`] events.
//! 2. Rendering happens in the [`Editor::on_change()`] hook, which receives a
//!    [`LineSnapshot`] after every buffer affecting command.
//! 3. Completion and line submission are asynchronous round-trips to the embedder.
//!    See [`Editor::on_completion()`], [`Editor::on_enter()`] and [`Editor::resume()`].
//!
//! # The command queue
//!
//! Keystrokes typed while a completion or submission is in flight are not lost and not
//! reordered. The [`CommandQueue`] has two states:
//!
//! - **Idle** - every command is executed as soon as it is enqueued.
//! - **Suspended** - an async command is waiting for its collaborator. New commands are
//!   buffered in arrival order. When the collaborator hands back its ticket via
//!   [`Editor::resume()`], the buffered commands are replayed one at a time. If one of
//!   them is itself asynchronous, replay stops again until that one completes.
//!
//! There is no timeout and no cancellation. A collaborator that never hands its ticket
//! back keeps the queue suspended forever, and every keystroke after that is buffered
//! but never applied.
//!
//! # Key bindings
//!
//! | Key                     | Command                     |
//! |-------------------------|-----------------------------|
//! | Backspace               | backward-delete-char        |
//! | Delete, Ctrl-D          | delete-char                 |
//! | Tab                     | complete                    |
//! | Enter                   | submit                      |
//! | Home, Ctrl-A            | cursor-home                 |
//! | End, Ctrl-E             | cursor-end                  |
//! | Left, Ctrl-B            | cursor-left                 |
//! | Right, Ctrl-F           | cursor-right                |
//! | Up, Ctrl-P              | history-prev                |
//! | Down, Ctrl-N            | history-next                |
//! | Ctrl-K                  | kill-to-end-of-line         |
//! | Ctrl-Y                  | yank                        |
//! | Ctrl-L                  | refresh                     |
//! | Ctrl-R                  | reverse-search (no effect)  |
//! | Alt-B / Alt-F           | backward-word / forward-word|
//!
//! Pause, Caps Lock, Escape, Page Up, Page Down and Insert are consumed without a
//! command. Everything else is reported back to the caller as unhandled.
//!
//! # Async usage
//!
//! [`EditorDriver`] wires an [`Editor`] to a [`PinnedInputStream`] and to a
//! [`CompletionProvider`] / [`SubmitHandler`] pair, using [`tokio`].

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
// Production code is not allowed to use .unwrap() in functions that return Result.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod core;
pub mod driver;
pub mod input;
pub mod line_editor;
#[cfg(test)]
pub mod test_fixtures;

// Re-export.
pub use crate::core::*;
pub use driver::*;
pub use input::*;
pub use line_editor::*;

// Type aliases.
use crossterm::event::Event;
use futures_core::Stream;
use std::{future::Future, pin::Pin};

pub type CrosstermEventResult = Result<Event, std::io::Error>;

/// Async stream of raw terminal events. This is typically
/// [`crossterm::event::EventStream`], but tests supply their own (see
/// `test_fixtures::gen_input_stream`).
pub type PinnedInputStream<T> = Pin<Box<dyn Stream<Item = T>>>;

/// Boxed future returned by the async collaborators. These are driven on a single
/// logical thread, so they are not required to be [`Send`].
pub type PinnedFuture<T> = Pin<Box<dyn Future<Output = T>>>;

// Constants.
pub const HISTORY_SIZE_MAX: usize = 1_000;
