// Player tuning values

/// Movement, timing and layout constants for the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerStats {
    // Movement
    /// Horizontal speed while a direction is held (pixels/second)
    pub move_speed: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_velocity: f32,
    /// Downward acceleration (pixels/second²)
    pub gravity: f32,
    /// Below this |vx| the player counts as standing still
    pub walk_threshold: f32,

    // Punch
    /// How long a punch stays active (seconds)
    pub punch_duration: f32,

    // Animation
    pub idle_frame_duration: f32,
    pub walk_frame_duration: f32,
    pub punch_frame_duration: f32,

    // Drawing
    /// Body size when neither a frame nor the base image is available
    pub placeholder_size: (u32, u32),
    /// Fist overlay size
    pub fist_size: (i32, i32),
    /// Fist offset down from the top of the body
    pub fist_offset_y: i32,
}

pub const BASE_STATS: PlayerStats = PlayerStats {
    move_speed: 260.0,
    jump_velocity: -520.0,
    gravity: 1400.0,
    walk_threshold: 0.01,

    punch_duration: 0.18,

    idle_frame_duration: 0.12,
    walk_frame_duration: 0.10,
    punch_frame_duration: 0.06,

    placeholder_size: (48, 64),
    fist_size: (20, 12),
    fist_offset_y: 24,
};

impl Default for PlayerStats {
    fn default() -> Self {
        BASE_STATS
    }
}
