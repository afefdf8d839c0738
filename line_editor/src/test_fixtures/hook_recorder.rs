// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use crate::{CompletionEvent, CompletionRequest, Editor, EditorConfig, KeydownInfo,
            LineSnapshot, SubmitRequest};

#[derive(Debug, Default)]
struct Recorded {
    changes: Vec<LineSnapshot>,
    keydowns: Vec<KeydownInfo>,
    completion_requests: VecDeque<CompletionRequest>,
    sessions_ended: usize,
    submit_requests: VecDeque<SubmitRequest>,
}

/// Installs all four hooks on an [`Editor`] and records what they receive. Tickets are
/// kept so the test can hand them back (or not).
#[derive(Debug, Default, Clone)]
pub struct HookRecorder {
    inner: Rc<RefCell<Recorded>>,
}

impl HookRecorder {
    pub fn install(editor: &mut Editor) -> Self {
        let recorder = Self::default();

        let it = recorder.clone();
        editor.on_change(move |line| it.inner.borrow_mut().changes.push(line.clone()));

        let it = recorder.clone();
        editor.on_keydown(move |info| it.inner.borrow_mut().keydowns.push(*info));

        let it = recorder.clone();
        editor.on_completion(move |event| {
            let mut recorded = it.inner.borrow_mut();
            match event {
                CompletionEvent::Requested(request) => {
                    recorded.completion_requests.push_back(request);
                }
                CompletionEvent::SessionEnded => recorded.sessions_ended += 1,
            }
        });

        let it = recorder.clone();
        editor.on_enter(move |request| {
            it.inner.borrow_mut().submit_requests.push_back(request);
        });

        recorder
    }

    pub fn changes(&self) -> Vec<LineSnapshot> { self.inner.borrow().changes.clone() }

    pub fn keydowns(&self) -> Vec<KeydownInfo> { self.inner.borrow().keydowns.clone() }

    pub fn sessions_ended(&self) -> usize { self.inner.borrow().sessions_ended }

    pub fn pop_completion(&self) -> Option<CompletionRequest> {
        self.inner.borrow_mut().completion_requests.pop_front()
    }

    pub fn pop_submit(&self) -> Option<SubmitRequest> {
        self.inner.borrow_mut().submit_requests.pop_front()
    }
}

pub fn active_editor() -> Editor {
    Editor::new(EditorConfig {
        start_active: true,
        ..Default::default()
    })
}

/// Feed each char of `text` through the character stream.
pub fn type_str(editor: &mut Editor, text: &str) {
    for character in text.chars() {
        editor.handle_char(character);
    }
}
