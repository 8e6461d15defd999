// The player entity: ties physics, mode, animation and drawing together

use super::animation::PlayerAnimation;
use super::body::PlayerBody;
use super::sprites::PlayerSprites;
use super::state::PlayerMode;
use super::stats::PlayerStats;
use crate::core::{Color, Rect};
use crate::engine::assets::TextureHandle;
use crate::engine::input::InputSnapshot;
use crate::engine::renderer::{Canvas, Flip};

/// Body color when no image is available
pub const PLACEHOLDER_COLOR: Color = Color::rgb(220, 220, 220);
/// Fist overlay color
pub const FIST_COLOR: Color = Color::rgb(255, 140, 90);

/// What the body is drawn with this frame.
///
/// Frames and the base image draw at their own size; the placeholder uses
/// the stats' default size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerVisual {
    Texture {
        texture: TextureHandle,
        width: u32,
        height: u32,
    },
    Placeholder {
        width: u32,
        height: u32,
    },
}

impl PlayerVisual {
    /// Get the drawn size in pixels
    pub fn size(&self) -> (u32, u32) {
        match *self {
            Self::Texture { width, height, .. } | Self::Placeholder { width, height } => {
                (width, height)
            }
        }
    }
}

/// The player-controlled panda
#[derive(Debug, Clone)]
pub struct Player {
    // Simulation
    /// Position, velocity, ground contact and punch timer
    body: PlayerBody,
    /// Facing, current mode and per-clip playback
    animation: PlayerAnimation,

    // Presentation
    /// Images the player can be drawn with
    sprites: PlayerSprites,
    /// Movement and layout constants
    stats: PlayerStats,
}

impl Player {
    /// Spawn with feet at `(x, ground_y)`.
    ///
    /// The initial mode is classified from the spawn state, which is airborne
    /// until the first update settles the body.
    pub fn new(x: f32, ground_y: f32, sprites: PlayerSprites, stats: PlayerStats) -> Self {
        let body = PlayerBody::spawn(x, ground_y);
        let mode = PlayerMode::classify(&body, &stats);

        Self {
            body,
            animation: PlayerAnimation::new(mode),
            sprites,
            stats,
        }
    }

    /// Get the mode classified on the last update
    pub fn mode(&self) -> PlayerMode {
        self.animation.mode()
    }

    /// Check if the player faces left (drawn mirrored)
    pub fn facing_left(&self) -> bool {
        self.animation.facing_left()
    }

    /// Advance one tick.
    ///
    /// Order matters: physics, then facing, then mode, then animation. The
    /// mode is re-derived from the body every time, never carried over.
    pub fn update(&mut self, dt: f32, input: &InputSnapshot) {
        self.body.step(dt, input, &self.stats);
        self.animation.update_facing(self.body.vx);

        let mode = PlayerMode::classify(&self.body, &self.stats);
        self.animation.update(dt, mode, &self.sprites);
    }

    /// Pick what to draw.
    ///
    /// The active mode's clip frame if the clip has any, else the base image,
    /// else a placeholder rectangle. Airborne has no clip and always falls
    /// through to the base image.
    pub fn visual(&self) -> PlayerVisual {
        let frame = self.sprites.clip(self.mode()).and_then(|clip| {
            let texture = clip.frame(self.animation.current_frame())?;
            let (width, height) = clip.frame_size();
            Some(PlayerVisual::Texture {
                texture,
                width,
                height,
            })
        });

        if let Some(visual) = frame {
            return visual;
        }

        let (width, height) = self.stats.placeholder_size;
        match self.sprites.base {
            Some(base) if base.width > 0 && base.height > 0 => PlayerVisual::Texture {
                texture: base.texture,
                width: base.width,
                height: base.height,
            },
            Some(base) => PlayerVisual::Texture {
                texture: base.texture,
                width,
                height,
            },
            None => PlayerVisual::Placeholder { width, height },
        }
    }

    /// Screen rectangle of the body, standing on the feet position
    pub fn body_rect(&self) -> Rect {
        let (width, height) = self.visual().size();
        Rect::from_feet(self.body.x, self.body.y, width as i32, height as i32)
    }

    /// Fist rectangle in front of the body while punching
    pub fn fist_rect(&self) -> Option<Rect> {
        if !self.body.is_punching() {
            return None;
        }

        let body = self.body_rect();
        let (fist_w, fist_h) = self.stats.fist_size;
        let x = if self.facing_left() {
            body.x.saturating_sub(fist_w)
        } else {
            body.right()
        };
        let y = body.y.saturating_add(self.stats.fist_offset_y);

        Some(Rect::new(x, y, fist_w, fist_h))
    }

    /// Draw the body, mirrored when facing left, then the fist while punching
    pub fn render(&self, canvas: &mut dyn Canvas) {
        let rect = self.body_rect();
        match self.visual() {
            PlayerVisual::Texture { texture, .. } => {
                canvas.draw_texture(texture, rect, Flip::horizontal_if(self.facing_left()));
            }
            PlayerVisual::Placeholder { .. } => canvas.fill_rect(rect, PLACEHOLDER_COLOR),
        }

        if let Some(fist) = self.fist_rect() {
            canvas.fill_rect(fist, FIST_COLOR);
        }
    }
}
