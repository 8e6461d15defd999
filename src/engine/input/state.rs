// Per-frame input state: held movement and edge-triggered presses

use super::action::Action;
use std::collections::HashSet;

/// The four logical inputs the player reads each tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub move_left: bool,
    pub move_right: bool,
    /// True only on the tick the jump key went down
    pub jump_pressed: bool,
    /// True only on the tick the punch key went down
    pub punch_pressed: bool,
}

impl InputSnapshot {
    /// Net horizontal direction: -1, 0 or +1
    pub fn horizontal(&self) -> f32 {
        let mut direction = 0.0;
        if self.move_left {
            direction -= 1.0;
        }
        if self.move_right {
            direction += 1.0;
        }
        direction
    }
}

/// Accumulates key events between ticks
#[derive(Debug, Default)]
pub struct InputState {
    /// Actions whose key is currently held
    pressed: HashSet<Action>,

    /// Actions whose key went down since the last `begin_frame`
    just_pressed: HashSet<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action went down this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Register a key-down. A key that is already held produces no new edge,
    /// and held-only actions never produce one.
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) && action.is_edge_triggered() {
            self.just_pressed.insert(action);
        }
    }

    /// Register a key-up
    pub(crate) fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    /// Clear edge-triggered state before the next polling cycle
    pub fn begin_frame(&mut self) {
        self.just_pressed.clear();
    }

    /// Drop everything, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
    }

    /// Collapse the current state into what the player consumes
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            move_left: self.is_pressed(Action::MoveLeft),
            move_right: self.is_pressed(Action::MoveRight),
            jump_pressed: self.just_pressed(Action::Jump),
            punch_pressed: self.just_pressed(Action::Punch),
        }
    }
}
