// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt;

use crate::{AsyncOp, Command, CommandQueue, CompletionTicket, EditorError,
            EventPropagation, HISTORY_SIZE_MAX, History, InputEvent, Key, KeyBinding,
            KeyEvent, KillRegister, LineBuffer, LineSnapshot, SubmitTicket,
            translate_key_event};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    /// Committed history entries to keep. The oldest are dropped first.
    pub history_max_size: usize,
    pub start_active: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_max_size: HISTORY_SIZE_MAX,
            start_active: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorLiveness {
    Active,
    #[default]
    Inactive,
}

/// Passed to the keydown hook for every key the editor recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeydownInfo {
    pub key: Key,
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    /// Symbolic name for special keys (e.g. `"BACKSPACE"`), `None` for characters.
    pub name: Option<&'static str>,
    /// `true` when this came from the character stream.
    pub is_char: bool,
}

impl KeydownInfo {
    #[must_use]
    pub fn from_key_event(key_event: &KeyEvent) -> Self {
        let name = match key_event.key {
            Key::SpecialKey(special_key) => Some(special_key.name()),
            Key::Character(_) => None,
        };
        Self {
            key: key_event.key,
            shift: key_event.mask.shift(),
            control: key_event.mask.ctrl(),
            alt: key_event.mask.alt(),
            name,
            is_char: false,
        }
    }

    #[must_use]
    pub fn from_char(character: char) -> Self {
        Self {
            key: Key::Character(character),
            shift: false,
            control: false,
            alt: false,
            name: None,
            is_char: true,
        }
    }
}

/// The editor needs a completion. Hand `ticket` back via
/// [`Editor::resume_completion()`] once the provider has an answer.
#[derive(Debug, PartialEq, Eq)]
pub struct CompletionRequest {
    pub line: LineSnapshot,
    pub ticket: CompletionTicket,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CompletionEvent {
    Requested(CompletionRequest),
    /// The line changed after a completion was spliced in. A UI showing completion
    /// candidates should dismiss them.
    SessionEnded,
}

/// A line was submitted. It has already been committed to history, and the buffer
/// has been cleared (`line` is the cleared snapshot). Hand `ticket` back via
/// [`Editor::resume_submit()`] to let input through again.
#[derive(Debug, PartialEq, Eq)]
pub struct SubmitRequest {
    pub text: String,
    pub line: LineSnapshot,
    pub ticket: SubmitTicket,
}

/// What an async collaborator sends back. See [`Editor::resume()`].
#[derive(Debug, PartialEq, Eq)]
pub enum Resumption {
    Completion {
        ticket: CompletionTicket,
        completion: Option<String>,
    },
    Submit {
        ticket: SubmitTicket,
    },
}

pub type KeydownHook = Box<dyn FnMut(&KeydownInfo)>;
pub type ChangeHook = Box<dyn FnMut(&LineSnapshot)>;
pub type EnterHook = Box<dyn FnMut(SubmitRequest)>;
pub type CompletionHook = Box<dyn FnMut(CompletionEvent)>;

#[derive(Default)]
struct EditorHooks {
    on_keydown: Option<KeydownHook>,
    on_change: Option<ChangeHook>,
    on_enter: Option<EnterHook>,
    on_completion: Option<CompletionHook>,
}

impl fmt::Debug for EditorHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorHooks")
            .field("on_keydown", &self.on_keydown.is_some())
            .field("on_change", &self.on_change.is_some())
            .field("on_enter", &self.on_enter.is_some())
            .field("on_completion", &self.on_completion.is_some())
            .finish()
    }
}

/// Emacs style single line editor. It owns the line, the kill register, the history
/// and the [`CommandQueue`], and talks to the outside world only through hooks.
///
/// # Input
///
/// Feed key-downs and composed characters with [`Editor::handle_input_event()`] (or
/// the more specific [`Editor::handle_key_event()`] and [`Editor::handle_char()`]).
/// While the editor is inactive, every event comes back as
/// [`EventPropagation::Propagate`] and nothing happens.
///
/// # Output
///
/// - [`Editor::on_change()`] gets a [`LineSnapshot`] whenever a command touched the
///   line, and for [`Command::Refresh`].
/// - [`Editor::on_keydown()`] gets a [`KeydownInfo`] for every recognized key.
/// - [`Editor::on_completion()`] and [`Editor::on_enter()`] are the two async
///   collaborators. Without them, `Tab` does nothing and `Enter` only commits to history.
///
/// # Async commands
///
/// [`Command::Complete`] and [`Command::Submit`] suspend the editor and hand a ticket
/// to their hook. Until that ticket comes back through [`Editor::resume()`], every
/// command is buffered. After it comes back, the buffered commands run in arrival
/// order. A ticket that never comes back stalls the editor forever; there is no
/// timeout.
///
/// Hooks run synchronously while the editor is mutably borrowed, so they can't hand
/// the ticket back from inside the hook. Stash it, and call `resume` afterwards. The
/// [`crate::EditorDriver`] does exactly this with a channel.
#[derive(Debug, Default)]
pub struct Editor {
    liveness: EditorLiveness,
    line: LineBuffer,
    kill_register: KillRegister,
    history: History,
    queue: CommandQueue,
    completion_session_active: bool,
    last_command: Option<&'static str>,
    hooks: EditorHooks,
}

impl Editor {
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self {
            liveness: if config.start_active {
                EditorLiveness::Active
            } else {
                EditorLiveness::Inactive
            },
            history: History::with_max_size(config.history_max_size),
            ..Default::default()
        }
    }

    /// Replace the history, e.g. with one loaded from disk by the embedder.
    #[must_use]
    pub fn with_history(mut self, history: History) -> Self {
        self.history = history;
        self
    }

    pub fn activate(&mut self) {
        tracing::debug!("editor activated");
        self.liveness = EditorLiveness::Active;
    }

    pub fn deactivate(&mut self) {
        tracing::debug!("editor deactivated");
        self.liveness = EditorLiveness::Inactive;
    }

    #[must_use]
    pub fn is_active(&self) -> bool { self.liveness == EditorLiveness::Active }

    #[must_use]
    pub fn liveness(&self) -> EditorLiveness { self.liveness }

    pub fn on_keydown(&mut self, hook: impl FnMut(&KeydownInfo) + 'static) {
        self.hooks.on_keydown = Some(Box::new(hook));
    }

    pub fn on_change(&mut self, hook: impl FnMut(&LineSnapshot) + 'static) {
        self.hooks.on_change = Some(Box::new(hook));
    }

    pub fn on_enter(&mut self, hook: impl FnMut(SubmitRequest) + 'static) {
        self.hooks.on_enter = Some(Box::new(hook));
    }

    pub fn on_completion(&mut self, hook: impl FnMut(CompletionEvent) + 'static) {
        self.hooks.on_completion = Some(Box::new(hook));
    }

    /// Snapshot of the current line.
    #[must_use]
    pub fn line(&self) -> LineSnapshot { self.line.snapshot() }

    #[must_use]
    pub fn history(&self) -> &History { &self.history }

    #[must_use]
    pub fn kill_register(&self) -> &str { self.kill_register.get() }

    /// Name of the command that ran most recently, e.g. `"cursor-left"`.
    #[must_use]
    pub fn last_command(&self) -> Option<&'static str> { self.last_command }

    #[must_use]
    pub fn is_suspended(&self) -> bool { self.queue.is_suspended() }

    /// Commands waiting for the in-flight async operation.
    #[must_use]
    pub fn pending_len(&self) -> usize { self.queue.pending_len() }

    pub fn handle_input_event(&mut self, input_event: InputEvent) -> EventPropagation {
        match input_event {
            InputEvent::KeyDown(key_event) => self.handle_key_event(&key_event),
            InputEvent::Char(character) => self.handle_char(character),
        }
    }

    pub fn handle_key_event(&mut self, key_event: &KeyEvent) -> EventPropagation {
        if !self.is_active() {
            return EventPropagation::Propagate;
        }

        let Some(binding) = translate_key_event(key_event) else {
            return EventPropagation::Propagate;
        };

        if let KeyBinding::Run(command) = binding {
            self.enqueue(command);
        }
        self.notify_keydown(&KeydownInfo::from_key_event(key_event));

        EventPropagation::Consumed
    }

    /// A composed character always inserts, whatever modifiers produced it.
    pub fn handle_char(&mut self, character: char) -> EventPropagation {
        if !self.is_active() {
            return EventPropagation::Propagate;
        }
        self.enqueue(Command::InsertChar(character));
        EventPropagation::Consumed
    }

    /// Run `command` now, or buffer it if an async command is in flight. This works
    /// whether or not the editor is active.
    pub fn enqueue(&mut self, command: Command) {
        if let Some(command) = self.queue.enqueue(command) {
            self.dispatch(command);
        }
    }

    /// Hand a ticket back, then replay whatever was buffered in the meantime.
    ///
    /// # Errors
    ///
    /// [`EditorError`] if the ticket isn't the one in flight. Nothing changes in that
    /// case.
    pub fn resume(&mut self, resumption: Resumption) -> Result<(), EditorError> {
        match resumption {
            Resumption::Completion { ticket, completion } => {
                self.resume_completion(ticket, completion)
            }
            Resumption::Submit { ticket } => self.resume_submit(ticket),
        }
    }

    /// Splice `completion` in at the cursor (nothing is spliced for `None` or an empty
    /// string), open the completion session, and replay buffered commands.
    ///
    /// # Errors
    ///
    /// See [`Editor::resume()`].
    pub fn resume_completion(
        &mut self,
        ticket: CompletionTicket,
        completion: Option<String>,
    ) -> Result<(), EditorError> {
        self.queue.complete(ticket.id()).inspect_err(log_rejected)?;

        if let Some(completion) = completion.filter(|it| !it.is_empty()) {
            self.line.insert_str(&completion);
            self.notify_change();
        }
        self.completion_session_active = true;

        self.drain();
        Ok(())
    }

    /// # Errors
    ///
    /// See [`Editor::resume()`].
    pub fn resume_submit(&mut self, ticket: SubmitTicket) -> Result<(), EditorError> {
        self.queue.complete(ticket.id()).inspect_err(log_rejected)?;
        self.drain();
        Ok(())
    }
}

fn log_rejected(error: &EditorError) {
    tracing::warn!(%error, "resume rejected");
}

impl Editor {
    fn drain(&mut self) {
        while let Some(command) = self.queue.next_to_drain() {
            self.dispatch(command);
        }
    }

    fn dispatch(&mut self, command: Command) {
        tracing::debug!(
            command = command.name(),
            previous = self.last_command.unwrap_or("none"),
            "calling command"
        );
        self.last_command = Some(command.name());

        match command {
            Command::BackwardDeleteChar => {
                if self.line.backward_delete_char() {
                    self.notify_change();
                }
            }
            Command::DeleteChar => {
                if self.line.delete_char() {
                    self.notify_change();
                }
            }
            Command::CursorHome => {
                self.line.move_home();
                self.notify_change();
            }
            Command::CursorEnd => {
                self.line.move_end();
                self.notify_change();
            }
            Command::CursorLeft => {
                if self.line.move_left() {
                    self.notify_change();
                }
            }
            Command::CursorRight => {
                if self.line.move_right() {
                    self.notify_change();
                }
            }
            Command::BackwardWord => {
                if self.line.move_backward_word() {
                    self.notify_change();
                }
            }
            Command::ForwardWord => {
                if self.line.move_forward_word() {
                    self.notify_change();
                }
            }
            Command::HistoryPrev => {
                if self.history.has_prev() {
                    self.history.update(self.line.text());
                    let entry = self.history.prev();
                    self.line.replace(entry);
                    self.notify_change();
                }
            }
            Command::HistoryNext => {
                if self.history.has_next() {
                    self.history.update(self.line.text());
                    let entry = self.history.next();
                    self.line.replace(entry);
                    self.notify_change();
                }
            }
            Command::KillToEndOfLine => {
                let killed = self.line.kill_to_end();
                self.kill_register.set(killed);
                self.notify_change();
            }
            Command::Yank => {
                self.line.insert_str(self.kill_register.get());
                self.notify_change();
            }
            Command::Refresh => self.notify_change(),
            Command::InsertChar(character) => {
                self.line.insert_char(character);
                self.notify_change();
                self.notify_keydown(&KeydownInfo::from_char(character));
            }
            Command::Complete => self.request_completion(),
            Command::Submit => self.submit(),
            Command::ReverseSearch => {}
        }
    }

    fn request_completion(&mut self) {
        if self.hooks.on_completion.is_none() {
            return;
        }

        let id = self.queue.suspend(AsyncOp::Completion);
        let request = CompletionRequest {
            line: self.line.snapshot(),
            ticket: CompletionTicket(id),
        };
        if let Some(hook) = self.hooks.on_completion.as_mut() {
            hook(CompletionEvent::Requested(request));
        }
    }

    fn submit(&mut self) {
        if self.line.is_empty() {
            return;
        }

        let text = self.line.take();
        self.history.accept(&text);

        if self.hooks.on_enter.is_none() {
            return;
        }

        let id = self.queue.suspend(AsyncOp::Submission);
        let request = SubmitRequest {
            text,
            line: self.line.snapshot(),
            ticket: SubmitTicket(id),
        };
        if let Some(hook) = self.hooks.on_enter.as_mut() {
            hook(request);
        }
    }

    /// Ends an open completion session first, then reports the line.
    fn notify_change(&mut self) {
        if self.completion_session_active {
            self.completion_session_active = false;
            if let Some(hook) = self.hooks.on_completion.as_mut() {
                hook(CompletionEvent::SessionEnded);
            }
        }

        if let Some(hook) = self.hooks.on_change.as_mut() {
            hook(&self.line.snapshot());
        }
    }

    fn notify_keydown(&mut self, keydown_info: &KeydownInfo) {
        if let Some(hook) = self.hooks.on_keydown.as_mut() {
            hook(keydown_info);
        }
    }
}
