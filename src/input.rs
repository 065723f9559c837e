//! Platform-agnostic keyboard input.
//!
//! Provides a [`KeyCode`] enum that identifies physical keyboard keys, a
//! [`KeyboardState`] that tracks per-frame key presses, and the mapping from
//! winit key codes.

use std::collections::HashSet;

use winit::keyboard;

/// Physical keyboard key identifier.
///
/// Matches common physical key positions (US QWERTY layout names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum KeyCode {
    // Letters
    A,
    D,
    E,
    Q,
    R,
    S,
    V,
    W,

    // Digits
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,

    // Function keys
    F1,
    F2,
    F3,

    // Arrows
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Common keys
    Escape,

    // Punctuation / symbols
    BracketLeft,
    BracketRight,
}

/// Keys held down and keys newly pressed during the current frame.
///
/// Platform code feeds press/release events; frame code polls
/// [`just_pressed`](Self::just_pressed) and calls
/// [`end_frame`](Self::end_frame) once the frame is processed.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
    pressed_this_frame: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Auto-repeat of an already held key is ignored.
    pub fn key_pressed(&mut self, key: KeyCode) {
        if self.held.insert(key) {
            self.pressed_this_frame.insert(key);
        }
    }

    pub fn key_released(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    /// Whether `key` went down during the current frame
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.pressed_this_frame.contains(&key)
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Forget this frame's presses; held keys stay held
    pub fn end_frame(&mut self) {
        self.pressed_this_frame.clear();
    }

    /// Drop all state, e.g. when the window loses focus
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Convert a winit [`keyboard::KeyCode`] to a [`KeyCode`], if a mapping exists.
pub fn map_winit_key(key: keyboard::KeyCode) -> Option<KeyCode> {
    Some(match key {
        keyboard::KeyCode::KeyA => KeyCode::A,
        keyboard::KeyCode::KeyD => KeyCode::D,
        keyboard::KeyCode::KeyE => KeyCode::E,
        keyboard::KeyCode::KeyQ => KeyCode::Q,
        keyboard::KeyCode::KeyR => KeyCode::R,
        keyboard::KeyCode::KeyS => KeyCode::S,
        keyboard::KeyCode::KeyV => KeyCode::V,
        keyboard::KeyCode::KeyW => KeyCode::W,

        keyboard::KeyCode::Digit1 => KeyCode::Digit1,
        keyboard::KeyCode::Digit2 => KeyCode::Digit2,
        keyboard::KeyCode::Digit3 => KeyCode::Digit3,
        keyboard::KeyCode::Digit4 => KeyCode::Digit4,
        keyboard::KeyCode::Digit5 => KeyCode::Digit5,

        keyboard::KeyCode::F1 => KeyCode::F1,
        keyboard::KeyCode::F2 => KeyCode::F2,
        keyboard::KeyCode::F3 => KeyCode::F3,

        keyboard::KeyCode::ArrowUp => KeyCode::ArrowUp,
        keyboard::KeyCode::ArrowDown => KeyCode::ArrowDown,
        keyboard::KeyCode::ArrowLeft => KeyCode::ArrowLeft,
        keyboard::KeyCode::ArrowRight => KeyCode::ArrowRight,

        keyboard::KeyCode::Escape => KeyCode::Escape,

        keyboard::KeyCode::BracketLeft => KeyCode::BracketLeft,
        keyboard::KeyCode::BracketRight => KeyCode::BracketRight,

        _ => return None,
    })
}
