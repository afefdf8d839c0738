// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod log;
pub mod str_ops;
pub mod word_boundaries;

// Re-export.
pub use log::*;
pub use str_ops::*;
pub use word_boundaries::*;
