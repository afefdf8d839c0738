// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod command;
pub mod command_queue;
pub mod editor;
pub mod editor_error;
pub mod history;
pub mod key_translator;
pub mod line_buffer;

// Re-export.
pub use command::*;
pub use command_queue::*;
pub use editor::*;
pub use editor_error::*;
pub use history::*;
pub use key_translator::*;
pub use line_buffer::*;
