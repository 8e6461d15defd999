// Player mode classification

use super::body::PlayerBody;
use super::stats::PlayerStats;

/// What the player is doing this tick, re-derived from the body every update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerMode {
    #[default]
    Idle,
    Walk,
    Punch,
    /// Off the ground and not punching. Has no clip.
    Airborne,
}

impl PlayerMode {
    /// Priority: punch, then walk, then idle, otherwise airborne
    pub fn classify(body: &PlayerBody, stats: &PlayerStats) -> Self {
        let moving = body.vx.abs() >= stats.walk_threshold;

        if body.is_punching() {
            Self::Punch
        } else if body.on_ground && moving {
            Self::Walk
        } else if body.on_ground {
            Self::Idle
        } else {
            Self::Airborne
        }
    }
}
