// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Command, Key, KeyEvent, SpecialKey};

/// Whether the editor took ownership of an input event. The embedder should stop
/// default handling (echoing, scrolling, etc.) for [`EventPropagation::Consumed`]
/// events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventPropagation {
    Consumed,
    Propagate,
}

/// What a key-down maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyBinding {
    Run(Command),
    /// Consumed without running anything. These keys would otherwise be interpreted by
    /// the host (e.g. `Escape` or `PageUp`).
    Swallow,
}

/// Map a key-down to a binding. `None` means the key isn't bound and should be left
/// alone.
///
/// | Key                          | Binding                                |
/// |------------------------------|----------------------------------------|
/// | `Backspace`                  | [`Command::BackwardDeleteChar`]        |
/// | `Delete`, `Ctrl+d`           | [`Command::DeleteChar`]                |
/// | `Tab`                        | [`Command::Complete`]                  |
/// | `Enter`                      | [`Command::Submit`]                    |
/// | `Home`, `Ctrl+a`             | [`Command::CursorHome`]                |
/// | `End`, `Ctrl+e`              | [`Command::CursorEnd`]                 |
/// | `Left`, `Ctrl+b`             | [`Command::CursorLeft`]                |
/// | `Right`, `Ctrl+f`            | [`Command::CursorRight`]               |
/// | `Up`, `Ctrl+p`               | [`Command::HistoryPrev`]               |
/// | `Down`, `Ctrl+n`             | [`Command::HistoryNext`]               |
/// | `Ctrl+k`                     | [`Command::KillToEndOfLine`]           |
/// | `Ctrl+y`                     | [`Command::Yank`]                      |
/// | `Ctrl+l`                     | [`Command::Refresh`]                   |
/// | `Ctrl+r`                     | [`Command::ReverseSearch`]             |
/// | `Alt+b`                      | [`Command::BackwardWord`]              |
/// | `Alt+f`                      | [`Command::ForwardWord`]               |
/// | `Pause`, `CapsLock`, `Escape`, `PageUp`, `PageDown`, `Insert` | swallowed |
///
/// Special keys are matched no matter which modifiers are held. Letter bindings need
/// exactly one modifier, and are case insensitive (`Ctrl+Shift` is not `Ctrl`, but
/// `Ctrl+K` is `Ctrl+k`).
#[must_use]
pub fn translate_key_event(key_event: &KeyEvent) -> Option<KeyBinding> {
    match key_event.key {
        Key::SpecialKey(special_key) => Some(translate_special_key(special_key)),
        Key::Character(character) => {
            let character = character.to_ascii_lowercase();
            if key_event.mask.is_only_ctrl() {
                translate_ctrl_char(character).map(KeyBinding::Run)
            } else if key_event.mask.is_only_alt() {
                translate_alt_char(character).map(KeyBinding::Run)
            } else {
                None
            }
        }
    }
}

/// Every special key is bound to something, even if it's only swallowed.
#[must_use]
pub fn translate_special_key(special_key: SpecialKey) -> KeyBinding {
    match special_key {
        SpecialKey::Backspace => KeyBinding::Run(Command::BackwardDeleteChar),
        SpecialKey::Tab => KeyBinding::Run(Command::Complete),
        SpecialKey::Enter => KeyBinding::Run(Command::Submit),
        SpecialKey::End => KeyBinding::Run(Command::CursorEnd),
        SpecialKey::Home => KeyBinding::Run(Command::CursorHome),
        SpecialKey::Left => KeyBinding::Run(Command::CursorLeft),
        SpecialKey::Up => KeyBinding::Run(Command::HistoryPrev),
        SpecialKey::Right => KeyBinding::Run(Command::CursorRight),
        SpecialKey::Down => KeyBinding::Run(Command::HistoryNext),
        SpecialKey::Delete => KeyBinding::Run(Command::DeleteChar),
        SpecialKey::Pause
        | SpecialKey::CapsLock
        | SpecialKey::Escape
        | SpecialKey::PageUp
        | SpecialKey::PageDown
        | SpecialKey::Insert => KeyBinding::Swallow,
    }
}

fn translate_ctrl_char(character: char) -> Option<Command> {
    let command = match character {
        'a' => Command::CursorHome,
        'e' => Command::CursorEnd,
        'b' => Command::CursorLeft,
        'f' => Command::CursorRight,
        'd' => Command::DeleteChar,
        'p' => Command::HistoryPrev,
        'n' => Command::HistoryNext,
        'k' => Command::KillToEndOfLine,
        'y' => Command::Yank,
        'l' => Command::Refresh,
        'r' => Command::ReverseSearch,
        _ => return None,
    };
    Some(command)
}

fn translate_alt_char(character: char) -> Option<Command> {
    match character {
        'b' => Some(Command::BackwardWord),
        'f' => Some(Command::ForwardWord),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ModifierKeysMask, key_event};
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    fn ctrl() -> ModifierKeysMask { ModifierKeysMask::new().with_ctrl() }
    fn alt() -> ModifierKeysMask { ModifierKeysMask::new().with_alt() }

    #[test]
    fn test_special_keys_ignore_modifiers() {
        let masks = [
            ModifierKeysMask::new(),
            ctrl(),
            alt(),
            ModifierKeysMask::new().with_shift().with_ctrl().with_alt(),
        ];
        for mask in masks {
            assert_eq!(
                translate_key_event(&key_event!(@special mask, SpecialKey::Enter)),
                Some(KeyBinding::Run(Command::Submit))
            );
            assert_eq!(
                translate_key_event(&key_event!(@special mask, SpecialKey::Up)),
                Some(KeyBinding::Run(Command::HistoryPrev))
            );
        }
    }

    #[test]
    fn test_swallowed_keys() {
        for special_key in [
            SpecialKey::Pause,
            SpecialKey::CapsLock,
            SpecialKey::Escape,
            SpecialKey::PageUp,
            SpecialKey::PageDown,
            SpecialKey::Insert,
        ] {
            assert_eq!(translate_special_key(special_key), KeyBinding::Swallow);
        }
    }

    #[test]
    fn test_every_special_key_is_bound() {
        let (run, swallow): (Vec<_>, Vec<_>) = SpecialKey::iter()
            .map(translate_special_key)
            .partition(|binding| matches!(binding, KeyBinding::Run(_)));
        assert_eq!(run.len(), 10);
        assert_eq!(swallow.len(), 6);
    }

    #[test]
    fn test_ctrl_bindings_are_case_insensitive() {
        assert_eq!(
            translate_key_event(&key_event!(@char ctrl(), 'k')),
            Some(KeyBinding::Run(Command::KillToEndOfLine))
        );
        assert_eq!(
            translate_key_event(&key_event!(@char ctrl(), 'K')),
            Some(KeyBinding::Run(Command::KillToEndOfLine))
        );
        assert_eq!(
            translate_key_event(&key_event!(@char ctrl(), 'a')),
            Some(KeyBinding::Run(Command::CursorHome))
        );
        assert_eq!(
            translate_key_event(&key_event!(@char ctrl(), 'r')),
            Some(KeyBinding::Run(Command::ReverseSearch))
        );
        assert_eq!(translate_key_event(&key_event!(@char ctrl(), 'z')), None);
    }

    #[test]
    fn test_alt_bindings() {
        assert_eq!(
            translate_key_event(&key_event!(@char alt(), 'b')),
            Some(KeyBinding::Run(Command::BackwardWord))
        );
        assert_eq!(
            translate_key_event(&key_event!(@char alt(), 'F')),
            Some(KeyBinding::Run(Command::ForwardWord))
        );
        assert_eq!(translate_key_event(&key_event!(@char alt(), 'k')), None);
    }

    #[test]
    fn test_letters_need_exactly_one_modifier() {
        assert_eq!(translate_key_event(&key_event!(@char 'a')), None);
        assert_eq!(
            translate_key_event(&key_event!(@char ctrl().with_shift(), 'a')),
            None
        );
        assert_eq!(
            translate_key_event(&key_event!(@char ctrl().with_alt(), 'b')),
            None
        );
    }
}
