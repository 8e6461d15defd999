// Frame stepping for the player's clips

use super::sprites::PlayerSprites;
use super::state::PlayerMode;
use crate::engine::assets::AnimationClip;

/// Playback position within one clip
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationTrack {
    frame_index: usize,
    elapsed: f32,
}

impl AnimationTrack {
    /// Get the current frame index
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Accumulate `dt`; once a frame's duration is reached, move to the next
    /// frame (wrapping) and start counting again from zero.
    ///
    /// At most one frame is advanced per call. Empty clips reset the track.
    pub fn advance(&mut self, dt: f32, clip: &AnimationClip) {
        let frame_count = clip.frame_count();
        if frame_count == 0 {
            self.reset();
            return;
        }

        self.elapsed += dt;
        if self.elapsed >= clip.frame_duration() {
            self.elapsed = 0.0;
            self.frame_index = (self.frame_index + 1) % frame_count;
        }
    }

    pub fn reset(&mut self) {
        self.frame_index = 0;
        self.elapsed = 0.0;
    }
}

/// Facing, active mode and one track per clip
#[derive(Debug, Clone, Default)]
pub struct PlayerAnimation {
    facing_left: bool,
    mode: PlayerMode,
    idle: AnimationTrack,
    walk: AnimationTrack,
    punch: AnimationTrack,
}

impl PlayerAnimation {
    pub fn new(mode: PlayerMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn facing_left(&self) -> bool {
        self.facing_left
    }

    pub fn mode(&self) -> PlayerMode {
        self.mode
    }

    /// Face the direction of travel; keep the last facing when standing still
    pub fn update_facing(&mut self, vx: f32) {
        if vx < 0.0 {
            self.facing_left = true;
        } else if vx > 0.0 {
            self.facing_left = false;
        }
    }

    /// Switch to `mode` and step its track. Every other track is reset.
    pub fn update(&mut self, dt: f32, mode: PlayerMode, sprites: &PlayerSprites) {
        self.mode = mode;

        for candidate in [PlayerMode::Idle, PlayerMode::Walk, PlayerMode::Punch] {
            let Some(clip) = sprites.clip(candidate) else {
                continue;
            };
            let Some(track) = self.track_mut(candidate) else {
                continue;
            };

            if candidate == mode {
                track.advance(dt, clip);
            } else {
                track.reset();
            }
        }
    }

    /// Track for a mode, `None` while airborne
    pub fn track(&self, mode: PlayerMode) -> Option<&AnimationTrack> {
        match mode {
            PlayerMode::Idle => Some(&self.idle),
            PlayerMode::Walk => Some(&self.walk),
            PlayerMode::Punch => Some(&self.punch),
            PlayerMode::Airborne => None,
        }
    }

    fn track_mut(&mut self, mode: PlayerMode) -> Option<&mut AnimationTrack> {
        match mode {
            PlayerMode::Idle => Some(&mut self.idle),
            PlayerMode::Walk => Some(&mut self.walk),
            PlayerMode::Punch => Some(&mut self.punch),
            PlayerMode::Airborne => None,
        }
    }

    /// Frame to show for the active mode
    pub fn current_frame(&self) -> usize {
        self.track(self.mode).map_or(0, AnimationTrack::frame_index)
    }
}
