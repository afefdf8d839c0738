// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::EditorError;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum DriverError {
    #[error("Failed to read from the input stream")]
    #[diagnostic(
        code(r3bl_line_editor::driver::input),
        help("The terminal may have been closed, or stdin is not a tty")
    )]
    Input(#[source] std::io::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Editor(#[from] EditorError),
}
