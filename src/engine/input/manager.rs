// Input manager - maps winit key events onto the input state

use super::action::{default_bindings, Action};
use super::state::{InputSnapshot, InputState};
use std::collections::HashMap;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Translates physical keys into actions and tracks their state
pub struct InputManager {
    /// Key to action lookup
    bindings: HashMap<KeyCode, Action>,

    /// Current input state
    state: InputState,
}

impl InputManager {
    /// Create an input manager with the default key table
    pub fn new() -> Self {
        Self {
            bindings: default_bindings().into_iter().collect(),
            state: InputState::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(
                key_code,
                event.state == ElementState::Pressed,
                event.repeat,
            );
        }
    }

    /// Apply one key transition. Auto-repeat presses are ignored.
    pub fn process_key(&mut self, key: KeyCode, pressed: bool, repeat: bool) {
        let Some(action) = self.action_for(key) else {
            return;
        };

        if pressed {
            if !repeat {
                self.state.press(action);
            }
        } else {
            self.state.release(action);
        }
    }

    /// Get the action bound to a key
    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Snapshot for the player update
    pub fn snapshot(&self) -> InputSnapshot {
        self.state.snapshot()
    }

    /// Whether quit was requested this frame
    pub fn quit_requested(&self) -> bool {
        self.state.just_pressed(Action::Quit)
    }

    /// Start a new polling cycle: clears edge-triggered presses
    pub fn begin_frame(&mut self) {
        self.state.begin_frame();
    }

    /// Forget all held keys
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
