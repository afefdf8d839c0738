// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::TicketId;

/// Returned when a ticket is handed back to the [`crate::Editor`] at the wrong time.
/// The editor's state is unchanged when this happens.
#[derive(Debug, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum EditorError {
    #[error("Ticket {ticket} was handed back, but no async operation is in flight")]
    #[diagnostic(
        code(r3bl_line_editor::resume::nothing_in_flight),
        help("Each ticket can only be handed back once")
    )]
    NothingInFlight { ticket: TicketId },

    #[error("Ticket {received} was handed back, but {expected} is the one in flight")]
    #[diagnostic(
        code(r3bl_line_editor::resume::ticket_mismatch),
        help("The ticket probably belongs to an operation that already completed")
    )]
    TicketMismatch {
        expected: TicketId,
        received: TicketId,
    },
}
