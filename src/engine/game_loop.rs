// Game loop timing
//
// Variable timestep: every frame advances the simulation by the wall-clock
// time since the previous frame, read from a monotonic clock. The delta is
// not clamped, so a long stall is passed straight to physics.
//
// TODO: switch to a fixed-timestep accumulator once large-delta tunneling matters.
use std::time::{Duration, Instant};

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Recompute the FPS average every N frames
const FPS_UPDATE_INTERVAL: u64 = 10;

/// Frame timing state
pub struct FrameClock {
    /// Time of last frame, `None` until the first tick
    last_frame_time: Option<Instant>,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl FrameClock {
    /// Create a clock that starts on its first tick.
    ///
    /// The first tick reports a delta of zero, so time spent before the loop
    /// runs (window creation, asset loading) never reaches the simulation.
    pub fn new() -> Self {
        Self {
            last_frame_time: None,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame, returns seconds elapsed since the previous one
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Begin a new frame at an explicit instant
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let frame_time = match self.last_frame_time {
            Some(last) => now.saturating_duration_since(last),
            None => Duration::ZERO,
        };
        self.last_frame_time = Some(now);
        self.frame_count += 1;

        // Store frame time for FPS calculation
        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        if self.frame_count % FPS_UPDATE_INTERVAL == 0 {
            self.update_fps();
            log::debug!("{:.1} fps", self.current_fps);
        }

        frame_time.as_secs_f32()
    }

    /// Update FPS calculation
    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        // Calculate average frame time
        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        // Convert to FPS
        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
