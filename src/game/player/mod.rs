// Player character

pub mod animation;
pub mod body;
pub mod character;
pub mod sprites;
pub mod state;
pub mod stats;

pub use character::Player;
pub use sprites::PlayerSprites;
pub use stats::{PlayerStats, BASE_STATS};
