// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod hook_recorder;
pub mod input_stream_mock;

// Re-export.
pub use hook_recorder::*;
pub use input_stream_mock::*;
