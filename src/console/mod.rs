//! Presentation-layer capabilities consumed by the encounter engine.
//!
//! The engine only ever renders whole frames of text and reads single keys
//! with a timeout. Everything terminal-specific lives behind [`Console`], and
//! gameplay timing is measured through an injected [`Clock`] so scoring can
//! be tested without real delays.

#![allow(unused_imports)]

pub mod autopilot;
pub mod clock;
pub mod scripted;
pub mod terminal;

pub use autopilot::AutoPilot;
pub use clock::{Clock, ManualClock, SystemClock};
pub use scripted::ScriptedConsole;
pub use terminal::TerminalConsole;

use std::time::Duration;

/// A UI-agnostic key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    Backspace,
    Other,
}

impl Key {
    /// Arrow keys in a fixed order, used by sequence-recall attacks.
    pub const ARROWS: [Key; 4] = [Key::Up, Key::Down, Key::Left, Key::Right];

    /// Short glyph used when drawing this key in a frame.
    pub fn glyph(&self) -> String {
        match self {
            Key::Char(' ') => "SPACE".to_string(),
            Key::Char(c) => c.to_ascii_uppercase().to_string(),
            Key::Up => "\u{2191}".to_string(),
            Key::Down => "\u{2193}".to_string(),
            Key::Left => "\u{2190}".to_string(),
            Key::Right => "\u{2192}".to_string(),
            Key::Enter => "ENTER".to_string(),
            Key::Esc => "ESC".to_string(),
            Key::Backspace => "BKSP".to_string(),
            Key::Other => "?".to_string(),
        }
    }

    /// Case-insensitive comparison for character keys; exact for the rest.
    pub fn matches(&self, other: &Key) -> bool {
        match (self, other) {
            (Key::Char(a), Key::Char(b)) => a.eq_ignore_ascii_case(b),
            (a, b) => a == b,
        }
    }

    /// Digit keys `1..=9` as a zero-based index.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Char(c) => c
                .to_digit(10)
                .filter(|d| *d >= 1)
                .map(|d| d as usize - 1),
            _ => None,
        }
    }

    /// Letter keys `a..=z` (any case) as a zero-based row index.
    pub fn as_letter_index(&self) -> Option<usize> {
        match self {
            Key::Char(c) if c.is_ascii_alphabetic() => {
                Some((c.to_ascii_lowercase() as u8 - b'a') as usize)
            }
            _ => None,
        }
    }
}

/// Result of a bounded key read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRead {
    Key(Key),
    Timeout,
}

impl KeyRead {
    pub fn key(&self) -> Option<Key> {
        match self {
            KeyRead::Key(k) => Some(*k),
            KeyRead::Timeout => None,
        }
    }
}

/// Frame output and keyed input for one encounter.
pub trait Console {
    /// Draw a full frame. Fire-and-forget: failures are logged, never surfaced.
    fn render_frame(&mut self, lines: &[String]);

    /// Block for at most `timeout` waiting for one key press.
    fn read_key(&mut self, timeout: Duration) -> KeyRead;

    /// Gameplay hold (a telegraph or memorisation window). Keys pressed during
    /// the hold are discarded. Always takes the full duration of game time.
    fn hold(&mut self, duration: Duration);

    /// Cosmetic pacing between frames. Implementations may skip it entirely.
    fn pause(&mut self, duration: Duration);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_matches_case_insensitive() {
        assert!(Key::Char('a').matches(&Key::Char('A')));
        assert!(!Key::Char('a').matches(&Key::Char('b')));
        assert!(Key::Up.matches(&Key::Up));
        assert!(!Key::Up.matches(&Key::Down));
    }

    #[test]
    fn test_key_as_index() {
        assert_eq!(Key::Char('1').as_index(), Some(0));
        assert_eq!(Key::Char('9').as_index(), Some(8));
        assert_eq!(Key::Char('0').as_index(), None);
        assert_eq!(Key::Char('x').as_index(), None);
        assert_eq!(Key::Enter.as_index(), None);
    }

    #[test]
    fn test_key_as_letter_index() {
        assert_eq!(Key::Char('a').as_letter_index(), Some(0));
        assert_eq!(Key::Char('C').as_letter_index(), Some(2));
        assert_eq!(Key::Char('3').as_letter_index(), None);
        assert_eq!(Key::Left.as_letter_index(), None);
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(Key::Char('z').glyph(), "Z");
        assert_eq!(Key::Char(' ').glyph(), "SPACE");
        assert_eq!(Key::Left.glyph(), "\u{2190}");
    }

    #[test]
    fn test_key_read_key() {
        assert_eq!(KeyRead::Key(Key::Enter).key(), Some(Key::Enter));
        assert_eq!(KeyRead::Timeout.key(), None);
    }
}
