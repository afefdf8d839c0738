// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Adapter from [`crossterm`] events to the editor's two input streams.
//!
//! # Kitty keyboard protocol support limitations
//!
//! Only [`KeyEventKind::Press`] is considered. In terminals that do not support the
//! [kitty keyboard protocol](https://sw.kovidgoyal.net/kitty/keyboard-protocol/) the
//! `kind` is always `Press`. Release and repeat events are dropped.

use crossterm::event::{Event, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind,
                       KeyModifiers};

use crate::{InputEvent, Key, KeyEvent, KeyState, ModifierKeysMask, SpecialKey};

/// Converts a crossterm [`Event`] into an [`InputEvent`].
///
/// - Printable characters with no Control or Alt become [`InputEvent::Char`] (Shift is
///   allowed, it's how upper case letters are typed).
/// - Characters with exactly one of Control or Alt become [`InputEvent::KeyDown`] with a
///   [`Key::Character`], so that the Control / Alt tables can see them.
/// - Characters with both Control and Alt are AltGr compositions (Windows reports AltGr
///   this way) and become [`InputEvent::Char`].
/// - Named keys become [`InputEvent::KeyDown`] with a [`Key::SpecialKey`].
/// - Everything else (mouse, resize, focus, paste, function keys, ...) is [`None`].
#[must_use]
pub fn convert_crossterm_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key_event) => convert_crossterm_key_event(key_event),
        _ => None,
    }
}

#[must_use]
pub fn convert_crossterm_key_event(key_event: CrosstermKeyEvent) -> Option<InputEvent> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    let mut mask = convert_key_modifiers(key_event.modifiers);

    let special_key = match key_event.code {
        KeyCode::Char(c) => {
            let is_alt_gr = mask.ctrl() && mask.alt();
            return Some(if (mask.ctrl() || mask.alt()) && !is_alt_gr {
                InputEvent::KeyDown(KeyEvent {
                    key: Key::Character(c),
                    mask,
                })
            } else {
                InputEvent::Char(c)
            });
        }
        KeyCode::Backspace => SpecialKey::Backspace,
        KeyCode::Tab => SpecialKey::Tab,
        KeyCode::BackTab => {
            mask.shift_key_state = KeyState::Pressed;
            SpecialKey::Tab
        }
        KeyCode::Enter => SpecialKey::Enter,
        KeyCode::Pause => SpecialKey::Pause,
        KeyCode::CapsLock => SpecialKey::CapsLock,
        KeyCode::Esc => SpecialKey::Escape,
        KeyCode::PageUp => SpecialKey::PageUp,
        KeyCode::PageDown => SpecialKey::PageDown,
        KeyCode::End => SpecialKey::End,
        KeyCode::Home => SpecialKey::Home,
        KeyCode::Left => SpecialKey::Left,
        KeyCode::Up => SpecialKey::Up,
        KeyCode::Right => SpecialKey::Right,
        KeyCode::Down => SpecialKey::Down,
        KeyCode::Insert => SpecialKey::Insert,
        KeyCode::Delete => SpecialKey::Delete,
        _ => return None,
    };

    Some(InputEvent::KeyDown(KeyEvent {
        key: Key::SpecialKey(special_key),
        mask,
    }))
}

#[must_use]
pub fn convert_key_modifiers(modifiers: KeyModifiers) -> ModifierKeysMask {
    ModifierKeysMask {
        shift_key_state: modifiers.intersects(KeyModifiers::SHIFT).into(),
        ctrl_key_state: modifiers.intersects(KeyModifiers::CONTROL).into(),
        alt_key_state: modifiers.intersects(KeyModifiers::ALT).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent, MouseEventKind};
    use pretty_assertions::assert_eq;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(CrosstermKeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_plain_and_shifted_chars_are_char_events() {
        assert_eq!(
            convert_crossterm_event(press(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(InputEvent::Char('a'))
        );
        assert_eq!(
            convert_crossterm_event(press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(InputEvent::Char('A'))
        );
    }

    #[test]
    fn test_ctrl_and_alt_chars_are_key_down() {
        assert_eq!(
            convert_crossterm_event(press(KeyCode::Char('k'), KeyModifiers::CONTROL)),
            Some(InputEvent::KeyDown(
                crate::key_event!(@char ModifierKeysMask::new().with_ctrl(), 'k')
            ))
        );
        assert_eq!(
            convert_crossterm_event(press(KeyCode::Char('b'), KeyModifiers::ALT)),
            Some(InputEvent::KeyDown(
                crate::key_event!(@char ModifierKeysMask::new().with_alt(), 'b')
            ))
        );
    }

    #[test]
    fn test_alt_gr_chars_are_char_events() {
        let ctrl_alt = KeyModifiers::CONTROL | KeyModifiers::ALT;
        assert_eq!(
            convert_crossterm_event(press(KeyCode::Char('@'), ctrl_alt)),
            Some(InputEvent::Char('@'))
        );
        assert_eq!(
            convert_crossterm_event(press(
                KeyCode::Char('€'),
                ctrl_alt | KeyModifiers::SHIFT
            )),
            Some(InputEvent::Char('€'))
        );
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(
            convert_crossterm_event(press(KeyCode::Enter, KeyModifiers::NONE)),
            Some(InputEvent::KeyDown(crate::key_event!(@special SpecialKey::Enter)))
        );
        assert_eq!(
            convert_crossterm_event(press(KeyCode::Esc, KeyModifiers::NONE)),
            Some(InputEvent::KeyDown(crate::key_event!(@special SpecialKey::Escape)))
        );
        assert_eq!(
            convert_crossterm_event(press(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(InputEvent::KeyDown(crate::key_event!(
                @special ModifierKeysMask::new().with_shift(), SpecialKey::Tab
            )))
        );
    }

    #[test]
    fn test_ignored_events() {
        assert_eq!(
            convert_crossterm_event(press(KeyCode::F(1), KeyModifiers::NONE)),
            None
        );
        assert_eq!(convert_crossterm_event(Event::Resize(80, 24)), None);
        assert_eq!(convert_crossterm_event(Event::FocusGained), None);

        let release = Event::Key(CrosstermKeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(convert_crossterm_event(release), None);

        let mouse = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(convert_crossterm_event(mouse), None);
    }
}
