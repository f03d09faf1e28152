//! Logical key vocabulary
//!
//! Every screen and widget works in terms of [`Key`] rather than raw crossterm events.
//! A literal space character and the named `space` key map to the same value.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A logical key as understood by the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Space,
    Enter,
    Esc,
    Backspace,
    Delete,
    /// Any single printable character other than space
    Char(char),
    /// Global interrupt (`ctrl+c`), handled before any screen sees input
    Interrupt,
}

impl Key {
    /// Build a key from a single character, folding `' '` into [`Key::Space`]
    pub fn from_char(c: char) -> Option<Self> {
        if c == ' ' {
            Some(Key::Space)
        } else if c.is_control() {
            None
        } else {
            Some(Key::Char(c))
        }
    }

    /// Map a crossterm key event to a logical key
    ///
    /// Release and repeat events are dropped, as are keys outside the vocabulary.
    pub fn from_event(event: KeyEvent) -> Option<Self> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Some(Key::Interrupt),
                _ => None,
            };
        }
        match event.code {
            KeyCode::Tab if event.modifiers.contains(KeyModifiers::SHIFT) => Some(Key::BackTab),
            KeyCode::Tab => Some(Key::Tab),
            KeyCode::BackTab => Some(Key::BackTab),
            KeyCode::Up => Some(Key::Up),
            KeyCode::Down => Some(Key::Down),
            KeyCode::Left => Some(Key::Left),
            KeyCode::Right => Some(Key::Right),
            KeyCode::Enter => Some(Key::Enter),
            KeyCode::Esc => Some(Key::Esc),
            KeyCode::Backspace => Some(Key::Backspace),
            KeyCode::Delete => Some(Key::Delete),
            KeyCode::Char(c) => Key::from_char(c),
            _ => None,
        }
    }

    /// Parse a key from its logical name (`"tab"`, `"shift+tab"`, `"space"`, `" "`, `"x"`...)
    pub fn parse(name: &str) -> Option<Self> {
        let key = match name {
            "tab" => Key::Tab,
            "shift+tab" => Key::BackTab,
            "up" => Key::Up,
            "down" => Key::Down,
            "left" => Key::Left,
            "right" => Key::Right,
            "space" => Key::Space,
            "enter" => Key::Enter,
            "esc" => Key::Esc,
            "backspace" => Key::Backspace,
            "delete" => Key::Delete,
            "ctrl+c" => Key::Interrupt,
            other => {
                let mut chars = other.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                return Key::from_char(c);
            }
        };
        Some(key)
    }

    /// Logical name of this key, the inverse of [`Key::parse`]
    pub fn name(&self) -> String {
        match self {
            Key::Tab => "tab".to_string(),
            Key::BackTab => "shift+tab".to_string(),
            Key::Up => "up".to_string(),
            Key::Down => "down".to_string(),
            Key::Left => "left".to_string(),
            Key::Right => "right".to_string(),
            Key::Space => "space".to_string(),
            Key::Enter => "enter".to_string(),
            Key::Esc => "esc".to_string(),
            Key::Backspace => "backspace".to_string(),
            Key::Delete => "delete".to_string(),
            Key::Char(c) => c.to_string(),
            Key::Interrupt => "ctrl+c".to_string(),
        }
    }

    /// Text to append when this key is typed into a text field
    pub fn typed_char(&self) -> Option<char> {
        match self {
            Key::Space => Some(' '),
            Key::Char(c) => Some(*c),
            _ => None,
        }
    }
}
