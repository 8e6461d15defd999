// Game layer: the player character and the scene around it

pub mod config;
pub mod player;
pub mod scene;

pub use config::{WindowConfig, DEFAULT_WINDOW};
pub use scene::Scene;
