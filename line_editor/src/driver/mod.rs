// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod collaborators;
pub mod driver_error;
pub mod editor_driver;

// Re-export.
pub use collaborators::*;
pub use driver_error::*;
pub use editor_driver::*;
