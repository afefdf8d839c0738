// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::VecDeque, fmt};

use strum_macros::Display;

use crate::{Command, EditorError};

/// Identifies one asynchronous round trip. Every suspension gets a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TicketId(u64);

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "#{}", self.0) }
}

/// Which collaborator the queue is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum AsyncOp {
    Completion,
    Submission,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InFlight {
    pub id: TicketId,
    pub op: AsyncOp,
}

/// Handed to the completion provider. Give it back exactly once via
/// [`crate::Editor::resume_completion()`]. It can't be cloned, so it can't be handed
/// back twice.
#[must_use = "the editor stays suspended until this ticket is handed back"]
#[derive(Debug, PartialEq, Eq)]
pub struct CompletionTicket(pub(crate) TicketId);

/// Handed to the submit handler. Give it back exactly once via
/// [`crate::Editor::resume_submit()`].
#[must_use = "the editor stays suspended until this ticket is handed back"]
#[derive(Debug, PartialEq, Eq)]
pub struct SubmitTicket(pub(crate) TicketId);

impl CompletionTicket {
    #[must_use]
    pub fn id(&self) -> TicketId { self.0 }
}

impl SubmitTicket {
    #[must_use]
    pub fn id(&self) -> TicketId { self.0 }
}

/// ```text
///             enqueue(cmd) → run cmd now
///            ┌───────────┐
///            ▼           │
///          ┌────────────────┐  async cmd runs   ┌──────────────────────────────┐
///          │      Idle      │ ────────────────▶ │ Suspended { in_flight: Some, │
///          └────────────────┘                   │             pending }        │
///                  ▲                            └──────────────────────────────┘
///                  │ pending drained                 │ complete(id)     ▲
///                  │                                 ▼                  │ drained cmd
///          ┌──────────────────────────────────────────────┐             │ is async
///          │ Suspended { in_flight: None, pending } (drain)│ ───────────┘
///          └──────────────────────────────────────────────┘
/// ```
///
/// While suspended, `enqueue` buffers commands in arrival order. Idle always has an
/// empty queue, which the type makes impossible to get wrong.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SchedulerState {
    #[default]
    Idle,
    Suspended {
        /// `None` while the buffered commands are being replayed.
        in_flight: Option<InFlight>,
        pending: VecDeque<Command>,
    },
}

/// Serializes command dispatch against at most one in-flight async operation.
///
/// This is a single threaded, cooperative scheduler. "Suspended" means that an async
/// command has handed a ticket to a collaborator and control went back to the caller.
/// Nothing blocks. The queue itself never runs commands, it only decides *when* the
/// [`crate::Editor`] gets to run them:
///
/// 1. [`Self::enqueue()`] returns the command back if it should run right now.
/// 2. An async command calls [`Self::suspend()`] and passes the ticket on.
/// 3. [`Self::complete()`] accepts the ticket back, then [`Self::next_to_drain()`]
///    yields buffered commands one at a time in FIFO order, until either the buffer is
///    empty (back to idle) or a replayed command suspends again.
///
/// There is no timeout and no cancellation. If a ticket never comes back, the queue
/// stays suspended and everything enqueued after that point is buffered forever.
#[derive(Debug, Default)]
pub struct CommandQueue {
    state: SchedulerState,
    next_ticket: u64,
}

impl CommandQueue {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn state(&self) -> &SchedulerState { &self.state }

    #[must_use]
    pub fn is_suspended(&self) -> bool {
        matches!(self.state, SchedulerState::Suspended { .. })
    }

    #[must_use]
    pub fn in_flight(&self) -> Option<InFlight> {
        match &self.state {
            SchedulerState::Idle => None,
            SchedulerState::Suspended { in_flight, .. } => *in_flight,
        }
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        match &self.state {
            SchedulerState::Idle => 0,
            SchedulerState::Suspended { pending, .. } => pending.len(),
        }
    }

    /// Returns `Some(command)` if the queue is idle and the caller should run it now.
    /// Otherwise the command is buffered and `None` is returned.
    pub fn enqueue(&mut self, command: Command) -> Option<Command> {
        match &mut self.state {
            SchedulerState::Idle => Some(command),
            SchedulerState::Suspended { pending, .. } => {
                tracing::debug!(
                    command = command.name(),
                    pending = pending.len() + 1,
                    "queue suspended, buffering command"
                );
                pending.push_back(command);
                None
            }
        }
    }

    /// Mark `op` as in flight and return the id for its ticket. Called by the command
    /// that is currently running, which is only ever possible while idle or draining.
    pub fn suspend(&mut self, op: AsyncOp) -> TicketId {
        let id = TicketId(self.next_ticket);
        self.next_ticket += 1;
        let in_flight = Some(InFlight { id, op });

        match &mut self.state {
            SchedulerState::Idle => {
                self.state = SchedulerState::Suspended {
                    in_flight,
                    pending: VecDeque::new(),
                };
            }
            SchedulerState::Suspended {
                in_flight: slot, ..
            } => {
                debug_assert!(slot.is_none(), "suspend() while {slot:?} is in flight");
                *slot = in_flight;
            }
        }

        tracing::debug!(%id, %op, "queue suspended");
        id
    }

    /// Accept a ticket back. The queue stays suspended (in drain mode) until
    /// [`Self::next_to_drain()`] has handed out every buffered command.
    ///
    /// # Errors
    ///
    /// - [`EditorError::NothingInFlight`] if no async operation is awaiting completion.
    /// - [`EditorError::TicketMismatch`] if `id` is not the in-flight operation's id.
    ///
    /// The state is unchanged on error.
    pub fn complete(&mut self, id: TicketId) -> Result<AsyncOp, EditorError> {
        let SchedulerState::Suspended {
            in_flight: slot,
            pending,
        } = &mut self.state
        else {
            return Err(EditorError::NothingInFlight { ticket: id });
        };

        match *slot {
            Some(in_flight) if in_flight.id == id => {
                *slot = None;
                tracing::debug!(%id, op = %in_flight.op, pending = pending.len(), "queue resumed");
                Ok(in_flight.op)
            }
            Some(in_flight) => Err(EditorError::TicketMismatch {
                expected: in_flight.id,
                received: id,
            }),
            None => Err(EditorError::NothingInFlight { ticket: id }),
        }
    }

    /// Next buffered command to replay, if the queue is draining. Returns `None` when
    /// the buffer is empty (the queue goes back to idle) or when a replayed command has
    /// suspended the queue again (the rest waits for that ticket).
    pub fn next_to_drain(&mut self) -> Option<Command> {
        let SchedulerState::Suspended {
            in_flight: None,
            pending,
        } = &mut self.state
        else {
            return None;
        };

        let maybe_command = pending.pop_front();
        if maybe_command.is_none() {
            self.state = SchedulerState::Idle;
            tracing::debug!("queue drained, idle");
        }
        maybe_command
    }
}
