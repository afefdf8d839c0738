// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod crossterm_input;
pub mod input_event;

// Re-export.
pub use crossterm_input::*;
pub use input_event::*;
