// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, IntoStaticStr};

/// Examples.
///
/// ```rust
/// use r3bl_line_editor::*;
///
/// let enter = key_event!(@special SpecialKey::Enter);
/// let ctrl_k = key_event!(@char ModifierKeysMask::new().with_ctrl(), 'k');
/// let alt_b = key_event!(@char ModifierKeysMask::new().with_alt(), 'b');
/// assert!(ctrl_k.mask.is_only_ctrl());
/// assert!(alt_b.mask.is_only_alt());
/// assert!(enter.mask.is_empty());
/// ```
#[macro_export]
macro_rules! key_event {
    // @char
    (@char $arg_char : expr) => {
        $crate::KeyEvent {
            key: $crate::Key::Character($arg_char),
            mask: $crate::ModifierKeysMask::new(),
        }
    };

    (@char $arg_modifiers : expr, $arg_char : expr) => {
        $crate::KeyEvent {
            key: $crate::Key::Character($arg_char),
            mask: $arg_modifiers,
        }
    };

    // @special
    (@special $arg_special : expr) => {
        $crate::KeyEvent {
            key: $crate::Key::SpecialKey($arg_special),
            mask: $crate::ModifierKeysMask::new(),
        }
    };

    (@special $arg_modifiers : expr, $arg_special : expr) => {
        $crate::KeyEvent {
            key: $crate::Key::SpecialKey($arg_special),
            mask: $arg_modifiers,
        }
    };
}

/// The two streams of input that the editor consumes.
///
/// - [`InputEvent::KeyDown`] carries special keys (arrows, enter, ...) and letter keys
///   pressed together with Control or Alt.
/// - [`InputEvent::Char`] carries a composed printable character. It always inserts
///   text, regardless of which modifiers were used to produce it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(KeyEvent),
    Char(char),
}

/// A raw key-down: which key, and which modifiers were held.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    pub mask: ModifierKeysMask,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// A letter, digit or symbol key. Only looked up in the Control and Alt tables.
    Character(char),
    SpecialKey(SpecialKey),
}

/// Keys that have a symbolic name. The name (e.g. `"BACKSPACE"`, `"PAGE_UP"`) is what
/// the keydown hook reports in [`crate::KeydownInfo::name`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SpecialKey {
    Backspace,
    Tab,
    Enter,
    Pause,
    CapsLock,
    Escape,
    PageUp,
    PageDown,
    End,
    Home,
    Left,
    Up,
    Right,
    Down,
    Insert,
    Delete,
}

impl SpecialKey {
    #[must_use]
    pub fn name(self) -> &'static str { self.into() }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModifierKeysMask {
    pub shift_key_state: KeyState,
    pub ctrl_key_state: KeyState,
    pub alt_key_state: KeyState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KeyState {
    Pressed,
    #[default]
    NotPressed,
}

impl KeyState {
    #[must_use]
    pub fn is_pressed(self) -> bool { matches!(self, KeyState::Pressed) }
}

impl From<bool> for KeyState {
    fn from(pressed: bool) -> Self {
        if pressed {
            KeyState::Pressed
        } else {
            KeyState::NotPressed
        }
    }
}

impl ModifierKeysMask {
    #[must_use]
    pub fn new() -> Self {
        ModifierKeysMask {
            shift_key_state: KeyState::NotPressed,
            ctrl_key_state: KeyState::NotPressed,
            alt_key_state: KeyState::NotPressed,
        }
    }

    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn shift(&self) -> bool { self.shift_key_state.is_pressed() }

    #[must_use]
    pub fn ctrl(&self) -> bool { self.ctrl_key_state.is_pressed() }

    #[must_use]
    pub fn alt(&self) -> bool { self.alt_key_state.is_pressed() }

    #[must_use]
    pub fn is_empty(&self) -> bool { !self.shift() && !self.ctrl() && !self.alt() }

    /// Control held, Shift and Alt not held.
    #[must_use]
    pub fn is_only_ctrl(&self) -> bool { self.ctrl() && !self.shift() && !self.alt() }

    /// Alt held, Control and Shift not held.
    #[must_use]
    pub fn is_only_alt(&self) -> bool { self.alt() && !self.ctrl() && !self.shift() }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use pretty_assertions::assert_eq;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_special_key_names() {
        assert_eq!(SpecialKey::Backspace.name(), "BACKSPACE");
        assert_eq!(SpecialKey::PageUp.name(), "PAGE_UP");
        assert_eq!(SpecialKey::CapsLock.name(), "CAPS_LOCK");
        assert_eq!(SpecialKey::Left.to_string(), "LEFT");
    }

    #[test]
    fn test_special_key_names_are_unique() {
        let names: HashSet<&str> = SpecialKey::iter().map(SpecialKey::name).collect();
        assert_eq!(names.len(), SpecialKey::COUNT);
    }

    #[test]
    fn test_mask_exclusivity() {
        let ctrl_shift = ModifierKeysMask::new().with_ctrl().with_shift();
        assert!(!ctrl_shift.is_only_ctrl());
        assert!(ModifierKeysMask::new().with_ctrl().is_only_ctrl());
        assert!(!ModifierKeysMask::new().with_alt().with_ctrl().is_only_alt());
        assert!(ModifierKeysMask::default().is_empty());
    }

    #[test]
    fn test_key_event_serde() {
        let event = InputEvent::KeyDown(key_event!(@special SpecialKey::Home));
        let json = serde_json::to_string(&event).unwrap();
        let back: InputEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
