// Input handling system
//
// - `action`: game actions and the fixed key table
// - `state`: held and edge-triggered state, plus the per-tick snapshot
// - `manager`: turns winit key events into state changes
//
// Per tick: feed every key event to `InputManager`, read `snapshot()` for the
// update, then call `begin_frame()` so jump/punch fire only once.

pub mod action;
pub mod manager;
pub mod state;

// Re-export commonly used types
pub use manager::InputManager;
pub use state::InputSnapshot;
