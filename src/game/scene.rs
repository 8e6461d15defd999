// The playfield: ground band and the player

use super::config::WindowConfig;
use super::player::{Player, PlayerSprites, PlayerStats};
use crate::engine::input::InputSnapshot;
use crate::engine::renderer::{Canvas, SpriteBatch};

/// Everything on screen, laid out in the window's logical pixels
pub struct Scene {
    config: WindowConfig,
    player: Player,
}

impl Scene {
    /// Spawn the player on the ground line
    pub fn new(config: WindowConfig, sprites: PlayerSprites, stats: PlayerStats) -> Self {
        let player = Player::new(config.spawn_x, config.ground_y(), sprites, stats);
        Self { config, player }
    }

    /// Advance the simulation by `dt` seconds
    pub fn update(&mut self, dt: f32, input: &InputSnapshot) {
        self.player.update(dt, input);
    }

    /// Record this frame's draws, back to front
    pub fn render(&self, batch: &mut SpriteBatch) {
        batch.clear(self.config.clear_color);
        batch.fill_rect(self.config.ground_rect(), self.config.ground_color);
        self.player.render(batch);
    }
}
