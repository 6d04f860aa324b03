//! Keyboard vocabulary and its mapping onto navigation commands.

use crate::navigation::JumpTarget;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A named key as reported by the environment.
pub enum Key {
    /// Arrow down.
    Down,
    /// Arrow up.
    Up,
    /// Arrow right.
    Right,
    /// Arrow left.
    Left,
    /// Page down.
    PageDown,
    /// Page up.
    PageUp,
    /// Dedicated "forward" key.
    Forward,
    /// Dedicated "back" key.
    Back,
    /// Space bar.
    Space,
    /// Home.
    Home,
    /// End.
    End,
    /// Escape.
    Esc,
    /// Any other printable character.
    Char(char),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
/// Modifier flags held during a key press.
pub struct Modifiers {
    /// Shift.
    pub shift: bool,
    /// Control.
    pub ctrl: bool,
    /// Alt / option.
    pub alt: bool,
    /// Meta / command / super.
    pub meta: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// One key press.
pub struct KeyInput {
    /// The key itself.
    pub key: Key,
    /// Modifiers held with it.
    pub modifiers: Modifiers,
}

impl KeyInput {
    #[must_use]
    /// A press with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    #[must_use]
    /// A press with shift held.
    pub fn shifted(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                shift: true,
                ..Modifiers::default()
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What a key press asks the navigation layer to do.
pub enum Command {
    /// Move to the following section.
    Next,
    /// Move to the preceding section.
    Previous,
    /// Go directly to a fixed destination.
    Jump(JumpTarget),
    /// Enter or leave full-viewport mode.
    ToggleFullscreen,
}

impl Command {
    #[must_use]
    /// Maps a key press to a command. Presses with ctrl, alt or meta held belong to the host and
    /// are never interpreted.
    pub fn from_key(input: &KeyInput) -> Option<Self> {
        let m = input.modifiers;
        if m.ctrl || m.alt || m.meta {
            return None;
        }
        let command = match input.key {
            Key::Down | Key::Right | Key::PageDown | Key::Forward => Self::Next,
            Key::Up | Key::Left | Key::PageUp | Key::Back => Self::Previous,
            Key::Space if m.shift => Self::Previous,
            Key::Space => Self::Next,
            Key::Home => Self::Jump(JumpTarget::Header),
            Key::End => Self::Jump(JumpTarget::Footer),
            Key::Char('l') => Self::Jump(JumpTarget::Listing),
            Key::Char('f') => Self::ToggleFullscreen,
            Key::Esc | Key::Char(_) => return None,
        };
        Some(command)
    }
}

impl KeyInput {
    #[must_use]
    /// Translates a terminal key event; keys with no navigation meaning yield `None`.
    pub fn from_terminal(event: &KeyEvent) -> Option<Self> {
        let key = match event.code {
            KeyCode::Down => Key::Down,
            KeyCode::Up => Key::Up,
            KeyCode::Right => Key::Right,
            KeyCode::Left => Key::Left,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::Esc => Key::Esc,
            KeyCode::Char(' ') => Key::Space,
            KeyCode::Char(c) => Key::Char(c),
            _ => return None,
        };
        let modifiers = Modifiers {
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            meta: event.modifiers.contains(KeyModifiers::SUPER)
                || event.modifiers.contains(KeyModifiers::META),
        };
        Some(Self { key, modifiers })
    }
}

#[cfg(test)]
#[path = "tests/keys.rs"]
mod tests;
