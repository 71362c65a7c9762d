//! Keyboard mapping for the player paddle
//!
//! Key names follow the browser `KeyboardEvent.key` values.

use std::fmt;
use std::str::FromStr;

use crate::sim::InputState;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
}

impl Key {
    pub fn as_str(&self) -> &'static str {
        match self {
            Key::ArrowUp => "ArrowUp",
            Key::ArrowDown => "ArrowDown",
        }
    }
}

/// A key name the game does not listen to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKey(pub String);

impl fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unmapped key {:?}", self.0)
    }
}

impl std::error::Error for UnknownKey {}

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowUp" => Ok(Key::ArrowUp),
            "ArrowDown" => Ok(Key::ArrowDown),
            _ => Err(UnknownKey(s.to_string())),
        }
    }
}

/// Set or clear the flag bound to `key`
pub fn set_key(input: &mut InputState, key: Key, pressed: bool) {
    match key {
        Key::ArrowUp => input.up = pressed,
        Key::ArrowDown => input.down = pressed,
    }
}

/// Apply a key-down (`pressed`) or key-up event to the input flags.
///
/// Returns `false` for keys the game ignores.
pub fn key_event(input: &mut InputState, key: &str, pressed: bool) -> bool {
    match key.parse::<Key>() {
        Ok(key) => {
            set_key(input, key, pressed);
            true
        }
        Err(_) => false,
    }
}
