// Game action definitions and the fixed key table

use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (held)
    MoveLeft,
    MoveRight,

    // Edge-triggered
    Jump,
    Punch,

    // Meta actions
    Quit,
}

impl Action {
    /// Whether the action only matters on the tick its key goes down
    pub fn is_edge_triggered(&self) -> bool {
        matches!(self, Self::Jump | Self::Punch | Self::Quit)
    }
}

/// Default keyboard bindings. Not remappable.
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        // Movement (WASD and arrows)
        (KeyCode::KeyA, Action::MoveLeft),
        (KeyCode::ArrowLeft, Action::MoveLeft),
        (KeyCode::KeyD, Action::MoveRight),
        (KeyCode::ArrowRight, Action::MoveRight),
        // Actions
        (KeyCode::Space, Action::Jump),
        (KeyCode::KeyJ, Action::Punch),
        // Meta
        (KeyCode::Escape, Action::Quit),
    ]
}
