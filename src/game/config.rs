// Window and scene layout

use crate::core::{Color, Rect};

/// Fixed window and scene layout
#[derive(Debug, Clone, Copy)]
pub struct WindowConfig {
    pub title: &'static str,
    /// Logical size in pixels. The scene is laid out in this space.
    pub width: u32,
    pub height: u32,
    /// Height of the ground band drawn at the bottom
    pub ground_band_height: i32,
    /// Distance from the bottom edge to the player's feet
    pub ground_line_offset: f32,
    /// Horizontal spawn position
    pub spawn_x: f32,
    pub clear_color: Color,
    pub ground_color: Color,
}

pub const DEFAULT_WINDOW: WindowConfig = WindowConfig {
    title: "Angry Panda",
    width: 960,
    height: 540,
    ground_band_height: 40,
    ground_line_offset: 80.0,
    spawn_x: 120.0,
    clear_color: Color::rgb(25, 25, 30),
    ground_color: Color::rgb(60, 60, 70),
};

impl WindowConfig {
    /// Y coordinate the player stands on
    pub fn ground_y(&self) -> f32 {
        self.height as f32 - self.ground_line_offset
    }

    /// The ground band along the bottom of the screen
    pub fn ground_rect(&self) -> Rect {
        Rect::new(
            0,
            self.height as i32 - self.ground_band_height,
            self.width as i32,
            self.ground_band_height,
        )
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        DEFAULT_WINDOW
    }
}
