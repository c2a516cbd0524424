//! Human input sampling
//!
//! Hosts translate whatever their backend reports (keyboard, mouse, touch)
//! into one immutable [`InputSample`] per frame. [`InputTracker`] keeps the
//! held-key and pointer state between frames for hosts that receive events.

use serde::{Deserialize, Serialize};

/// Human input for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSample {
    pub up: bool,
    pub down: bool,
    /// Absolute pointer position in playfield coordinates; overrides the keys
    pub pointer_y: Option<f32>,
}

impl InputSample {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn keys(up: bool, down: bool) -> Self {
        Self {
            up,
            down,
            pointer_y: None,
        }
    }

    pub fn pointer(y: f32) -> Self {
        Self {
            pointer_y: Some(y),
            ..Self::default()
        }
    }

    /// Pointer position, if present and usable
    pub fn pointer_target(&self) -> Option<f32> {
        self.pointer_y.filter(|y| y.is_finite())
    }

    /// Discrete key intent: -1 = up, 0 = none, 1 = down. Up wins when both are held.
    pub fn key_dir(&self) -> i8 {
        if self.up {
            -1
        } else if self.down {
            1
        } else {
            0
        }
    }
}

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Pause,
}

impl Key {
    /// Map a DOM-style key name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" | "w" | "W" => Some(Key::Up),
            "ArrowDown" | "s" | "S" => Some(Key::Down),
            " " | "Spacebar" => Some(Key::Pause),
            _ => None,
        }
    }
}

/// What the host should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    TogglePause,
}

/// Accumulates input events between frames
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    up: bool,
    down: bool,
    pointer_y: Option<f32>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) -> KeyAction {
        match key {
            Key::Up => self.up = true,
            Key::Down => self.down = true,
            Key::Pause => return KeyAction::TogglePause,
        }
        KeyAction::None
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Up => self.up = false,
            Key::Down => self.down = false,
            Key::Pause => {}
        }
    }

    /// Pointer moved inside the playfield (already translated to playfield Y)
    pub fn pointer_moved(&mut self, y: f32) {
        self.pointer_y = Some(y);
    }

    /// Pointer left the playfield; keys take over again
    pub fn pointer_left(&mut self) {
        self.pointer_y = None;
    }

    pub fn sample(&self) -> InputSample {
        InputSample {
            up: self.up,
            down: self.down,
            pointer_y: self.pointer_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowUp"), Some(Key::Up));
        assert_eq!(Key::from_name("s"), Some(Key::Down));
        assert_eq!(Key::from_name(" "), Some(Key::Pause));
        assert_eq!(Key::from_name("Enter"), None);
    }

    #[test]
    fn test_tracker_holds_keys_until_released() {
        let mut tracker = InputTracker::new();
        assert_eq!(tracker.key_down(Key::Down), KeyAction::None);
        assert_eq!(tracker.sample().key_dir(), 1);

        tracker.key_down(Key::Up);
        assert_eq!(tracker.sample().key_dir(), -1, "Up wins when both are held");

        tracker.key_up(Key::Up);
        tracker.key_up(Key::Down);
        assert_eq!(tracker.sample(), InputSample::idle());
    }

    #[test]
    fn test_pause_key_requests_toggle() {
        let mut tracker = InputTracker::new();
        assert_eq!(tracker.key_down(Key::Pause), KeyAction::TogglePause);
        assert_eq!(tracker.sample(), InputSample::idle());
    }

    #[test]
    fn test_pointer_enter_and_leave() {
        let mut tracker = InputTracker::new();
        tracker.pointer_moved(120.0);
        assert_eq!(tracker.sample().pointer_target(), Some(120.0));
        tracker.pointer_left();
        assert_eq!(tracker.sample().pointer_target(), None);
    }

    #[test]
    fn test_non_finite_pointer_is_ignored() {
        assert_eq!(InputSample::pointer(f32::NAN).pointer_target(), None);
        assert_eq!(InputSample::pointer(f32::INFINITY).pointer_target(), None);
    }
}
