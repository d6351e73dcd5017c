//! Keyboard state table
//!
//! The host window system reports key presses and releases as they arrive;
//! the frame loop calls `update` once per frame and samples the table into
//! a `TickInput`.

use serde::{Deserialize, Serialize};

use crate::sim::{PaddleCommand, TickInput};

/// Keys the game can bind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    Escape,
}

impl Key {
    pub const COUNT: usize = 5;

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Press or release reported by the window system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Release,
}

/// Current and previous-frame state of one key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    pub pressed: bool,
    pub last_pressed: bool,
}

/// Fixed-size table of key states
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: [KeyState; Key::COUNT],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event from the window system
    pub fn handle(&mut self, key: Key, action: KeyAction) {
        self.keys[key.index()].pressed = action == KeyAction::Press;
    }

    pub fn press(&mut self, key: Key) {
        self.handle(key, KeyAction::Press);
    }

    pub fn release(&mut self, key: Key) {
        self.handle(key, KeyAction::Release);
    }

    /// Roll current state into previous state; call once per frame after sampling
    pub fn update(&mut self) {
        for state in &mut self.keys {
            state.last_pressed = state.pressed;
        }
    }

    pub fn state(&self, key: Key) -> KeyState {
        self.keys[key.index()]
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.keys[key.index()].pressed
    }

    /// Pressed now but not on the previous frame
    pub fn just_pressed(&self, key: Key) -> bool {
        let state = self.keys[key.index()];
        state.pressed && !state.last_pressed
    }

    /// Snapshot this frame's commands
    pub fn sample(&self, controls: &Controls) -> TickInput {
        TickInput {
            left: PaddleCommand::from_keys(
                self.is_pressed(controls.left_up),
                self.is_pressed(controls.left_down),
            ),
            right: PaddleCommand::from_keys(
                self.is_pressed(controls.right_up),
                self.is_pressed(controls.right_down),
            ),
            quit: self.is_pressed(controls.quit),
        }
    }
}

/// Key bindings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    pub left_up: Key,
    pub left_down: Key,
    pub right_up: Key,
    pub right_down: Key,
    pub quit: Key,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            left_up: Key::W,
            left_down: Key::S,
            right_up: Key::Up,
            right_down: Key::Down,
            quit: Key::Escape,
        }
    }
}
