// The player's image set: base image plus idle, walk and punch clips

use super::state::PlayerMode;
use super::stats::PlayerStats;
use crate::engine::assets::{AnimationClip, FrameSource, StaticImage, TextureCache, TextureStore};
use log::warn;

/// Static image in the assets root, used when no clip applies
pub const BASE_IMAGE: &str = "Opanda.bmp";

/// Idle frames. The directory keeps its historical `idel` spelling.
pub const IDLE_FRAMES: FrameSource = FrameSource {
    subdir: "idel",
    prefix: "idle",
    fallback_prefixes: &["idel"],
    extension: "bmp",
};

/// Walk frames, with `rewalk` as the older prefix
pub const WALK_FRAMES: FrameSource = FrameSource {
    subdir: "walk",
    prefix: "walk",
    fallback_prefixes: &["rewalk"],
    extension: "bmp",
};

/// Punch frames, with `repunch` as the older prefix
pub const PUNCH_FRAMES: FrameSource = FrameSource {
    subdir: "punch",
    prefix: "punch",
    fallback_prefixes: &["repunch"],
    extension: "bmp",
};

/// Everything the player can be drawn with. Any part may be missing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSprites {
    /// Fallback image, also drawn while airborne
    pub base: Option<StaticImage>,
    pub idle: AnimationClip,
    pub walk: AnimationClip,
    pub punch: AnimationClip,
}

impl PlayerSprites {
    /// No textures at all: the player is drawn as a placeholder rectangle
    pub fn placeholder(stats: &PlayerStats) -> Self {
        let size = stats.placeholder_size;
        Self {
            base: None,
            idle: AnimationClip::empty("idle", stats.idle_frame_duration, size),
            walk: AnimationClip::empty("walk", stats.walk_frame_duration, size),
            punch: AnimationClip::empty("punch", stats.punch_frame_duration, size),
        }
    }

    /// Load the base image then each clip. Missing pieces are logged and left empty.
    pub fn load(cache: &mut TextureCache, store: &mut dyn TextureStore, stats: &PlayerStats) -> Self {
        let root = cache.loader().base_path();
        if !root.is_dir() {
            warn!(
                "Assets root {} not found, drawing placeholders",
                root.display()
            );
            return Self::placeholder(stats);
        }

        let base = match cache.load_image(BASE_IMAGE, store) {
            Ok(image) => Some(image),
            Err(e) => {
                warn!("Base image unavailable: {}", e);
                None
            }
        };

        let default_size = base.map_or(stats.placeholder_size, |b| (b.width, b.height));

        let idle = cache.load_animation(
            "idle",
            &IDLE_FRAMES,
            stats.idle_frame_duration,
            default_size,
            store,
        );
        let walk = cache.load_animation(
            "walk",
            &WALK_FRAMES,
            stats.walk_frame_duration,
            default_size,
            store,
        );
        let punch = cache.load_animation(
            "punch",
            &PUNCH_FRAMES,
            stats.punch_frame_duration,
            default_size,
            store,
        );

        Self {
            base,
            idle,
            walk,
            punch,
        }
    }

    /// Clip for a mode, `None` while airborne
    pub fn clip(&self, mode: PlayerMode) -> Option<&AnimationClip> {
        match mode {
            PlayerMode::Idle => Some(&self.idle),
            PlayerMode::Walk => Some(&self.walk),
            PlayerMode::Punch => Some(&self.punch),
            PlayerMode::Airborne => None,
        }
    }
}
