// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::Event;
use futures_util::StreamExt;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::{CompletionEvent, CompletionProvider, CrosstermEventResult, DriverError,
            Editor, EventPropagation, PinnedFuture, PinnedInputStream, Resumption,
            SubmitHandler, SubmitRequest, convert_crossterm_event};

/// What the editor's hooks forward to the driver. The hooks run synchronously inside
/// the editor, so they can't await anything. They just send.
#[derive(Debug)]
pub enum AsyncRequest {
    Completion(CompletionEvent),
    Submit(SubmitRequest),
}

/// Runs an [`Editor`] against an async stream of terminal events, and runs its async
/// collaborators.
///
/// At most one collaborator future is in flight at a time, because the editor never
/// hands out a second ticket before the first one comes back. While it's in flight,
/// input is still read and fed to the editor (which buffers the commands), so
/// unhandled keys like `Ctrl+C` still get back to the caller right away.
///
/// There is no timeout. A collaborator future that never resolves stops all editing.
pub struct EditorDriver {
    editor: Editor,
    pinned_input_stream: PinnedInputStream<CrosstermEventResult>,
    async_request_sender: UnboundedSender<AsyncRequest>,
    async_request_receiver: UnboundedReceiver<AsyncRequest>,
    completion_provider: Option<Box<dyn CompletionProvider>>,
    submit_handler: Option<Box<dyn SubmitHandler>>,
    in_flight: Option<PinnedFuture<Resumption>>,
    input_ended: bool,
}

impl std::fmt::Debug for EditorDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorDriver")
            .field("editor", &self.editor)
            .field("completion_provider", &self.completion_provider.is_some())
            .field("submit_handler", &self.submit_handler.is_some())
            .field("in_flight", &self.in_flight.is_some())
            .field("input_ended", &self.input_ended)
            .finish_non_exhaustive()
    }
}

impl EditorDriver {
    pub fn new(
        editor: Editor,
        pinned_input_stream: PinnedInputStream<CrosstermEventResult>,
    ) -> Self {
        let (async_request_sender, async_request_receiver) = unbounded_channel();
        Self {
            editor,
            pinned_input_stream,
            async_request_sender,
            async_request_receiver,
            completion_provider: None,
            submit_handler: None,
            in_flight: None,
            input_ended: false,
        }
    }

    /// Replaces any completion hook already installed on the editor.
    #[must_use]
    pub fn with_completion_provider(
        mut self,
        completion_provider: impl CompletionProvider + 'static,
    ) -> Self {
        let sender = self.async_request_sender.clone();
        self.editor.on_completion(move |completion_event| {
            // The receiver lives as long as the driver, which owns the editor.
            _ = sender.send(AsyncRequest::Completion(completion_event));
        });
        self.completion_provider = Some(Box::new(completion_provider));
        self
    }

    /// Replaces any enter hook already installed on the editor.
    #[must_use]
    pub fn with_submit_handler(mut self, submit_handler: impl SubmitHandler + 'static) -> Self {
        let sender = self.async_request_sender.clone();
        self.editor.on_enter(move |submit_request| {
            _ = sender.send(AsyncRequest::Submit(submit_request));
        });
        self.submit_handler = Some(Box::new(submit_handler));
        self
    }

    #[must_use]
    pub fn editor(&self) -> &Editor { &self.editor }

    pub fn editor_mut(&mut self) -> &mut Editor { &mut self.editor }

    #[must_use]
    pub fn into_editor(self) -> Editor { self.editor }

    #[must_use]
    pub fn has_in_flight(&self) -> bool { self.in_flight.is_some() }

    /// Feed input to the editor until an event arrives that it doesn't handle, and
    /// return that event. Mouse, resize and focus events are always returned, as are
    /// all events while the editor is inactive.
    ///
    /// Returns `Ok(None)` once the input stream has ended and the in-flight collaborator
    /// (if any) has finished. Calling this again keeps the in-flight state, so it's fine
    /// to call it in a loop.
    ///
    /// # Errors
    ///
    /// - [`DriverError::Input`] if the input stream yields an error.
    /// - [`DriverError::Editor`] if a ticket is rejected by the editor.
    pub async fn next_unhandled(&mut self) -> Result<Option<Event>, DriverError> {
        loop {
            if self.input_ended && self.in_flight.is_none() {
                return Ok(None);
            }

            tokio::select! {
                // Poll for events.
                // This branch is cancel safe because no state is declared inside the
                // future. If it is dropped, the next event stays in the stream.
                maybe_result_event = self.pinned_input_stream.next(), if !self.input_ended => {
                    match maybe_result_event {
                        Some(Ok(event)) => {
                            if let Some(event) = self.apply_event(event) {
                                return Ok(Some(event));
                            }
                        }
                        Some(Err(error)) => return Err(DriverError::Input(error)),
                        None => {
                            tracing::debug!(
                                in_flight = self.in_flight.is_some(),
                                "input stream ended"
                            );
                            self.input_ended = true;
                        }
                    }
                }

                // Poll the in-flight collaborator.
                // This branch is cancel safe because the future is only borrowed. If
                // it is dropped, the collaborator future stays in `self.in_flight`.
                resumption = await_in_flight(&mut self.in_flight) => {
                    self.in_flight = None;
                    self.editor.resume(resumption)?;
                    self.process_async_requests();
                }
            }
        }
    }

    /// Returns the event back if the editor didn't handle it.
    fn apply_event(&mut self, event: Event) -> Option<Event> {
        let propagation = match convert_crossterm_event(event.clone()) {
            Some(input_event) => self.editor.handle_input_event(input_event),
            None => EventPropagation::Propagate,
        };
        self.process_async_requests();

        match propagation {
            EventPropagation::Consumed => None,
            EventPropagation::Propagate => Some(event),
        }
    }

    fn process_async_requests(&mut self) {
        while let Ok(async_request) = self.async_request_receiver.try_recv() {
            match async_request {
                AsyncRequest::Completion(CompletionEvent::Requested(request)) => {
                    let Some(provider) = self.completion_provider.as_mut() else {
                        continue;
                    };
                    let future = provider.complete(request.line);
                    let ticket = request.ticket;
                    self.start(Box::pin(async move {
                        Resumption::Completion {
                            ticket,
                            completion: future.await,
                        }
                    }));
                }
                AsyncRequest::Completion(CompletionEvent::SessionEnded) => {
                    if let Some(provider) = self.completion_provider.as_mut() {
                        provider.session_ended();
                    }
                }
                AsyncRequest::Submit(request) => {
                    let Some(handler) = self.submit_handler.as_mut() else {
                        continue;
                    };
                    let future = handler.submit(request.text, request.line);
                    let ticket = request.ticket;
                    self.start(Box::pin(async move {
                        future.await;
                        Resumption::Submit { ticket }
                    }));
                }
            }
        }
    }

    fn start(&mut self, future: PinnedFuture<Resumption>) {
        debug_assert!(self.in_flight.is_none(), "second collaborator started");
        self.in_flight = Some(future);
    }
}

async fn await_in_flight(in_flight: &mut Option<PinnedFuture<Resumption>>) -> Resumption {
    match in_flight {
        Some(future) => future.await,
        None => std::future::pending().await,
    }
}
