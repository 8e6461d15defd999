// Player kinematics: movement, jumping, gravity and the ground clamp

use super::stats::PlayerStats;
use crate::engine::input::InputSnapshot;

/// Position and velocity of the player. `y` is the feet line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerBody {
    pub x: f32,
    /// Feet line, grows downward
    pub y: f32,
    /// Horizontal velocity (pixels/second)
    pub vx: f32,
    /// Vertical velocity, negative is up
    pub vy: f32,
    /// Floor the feet are clamped to
    pub ground_y: f32,
    pub on_ground: bool,
    /// Seconds left on the current punch (0 when not punching)
    pub punch_timer: f32,
}

impl PlayerBody {
    /// Place the player at rest with its feet at `(x, ground_y)`.
    ///
    /// The body starts with `on_ground == false`; the first step settles it
    /// onto the ground, so a jump held on the very first tick is ignored.
    pub fn spawn(x: f32, ground_y: f32) -> Self {
        Self {
            x,
            y: ground_y,
            vx: 0.0,
            vy: 0.0,
            ground_y,
            on_ground: false,
            punch_timer: 0.0,
        }
    }

    /// Check if a punch is still running
    pub fn is_punching(&self) -> bool {
        self.punch_timer > 0.0
    }

    /// Advance one tick.
    ///
    /// Horizontal velocity comes straight from the held keys. A jump only
    /// starts from the ground, and a punch press always restarts the timer.
    /// Gravity is integrated before position, then the feet are clamped to
    /// the ground line.
    pub fn step(&mut self, dt: f32, input: &InputSnapshot, stats: &PlayerStats) {
        self.vx = input.horizontal() * stats.move_speed;

        if self.on_ground && input.jump_pressed {
            self.vy = stats.jump_velocity;
            self.on_ground = false;
        }

        // Restart, never extend
        if input.punch_pressed {
            self.punch_timer = stats.punch_duration;
        }

        self.vy += stats.gravity * dt;
        self.x += self.vx * dt;
        self.y += self.vy * dt;

        if self.y >= self.ground_y {
            self.y = self.ground_y;
            self.vy = 0.0;
            self.on_ground = true;
        }

        self.punch_timer = (self.punch_timer - dt).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::player::stats::BASE_STATS;
    use approx::assert_relative_eq;

    const GROUND: f32 = 460.0;
    const DT: f32 = 1.0 / 60.0;

    fn grounded() -> PlayerBody {
        let mut body = PlayerBody::spawn(120.0, GROUND);
        body.step(DT, &InputSnapshot::default(), &BASE_STATS);
        body
    }

    fn held(left: bool, right: bool) -> InputSnapshot {
        InputSnapshot {
            move_left: left,
            move_right: right,
            ..Default::default()
        }
    }

    #[test]
    fn test_spawn_settles_on_first_step() {
        let mut body = PlayerBody::spawn(120.0, GROUND);
        assert!(!body.on_ground);

        body.step(DT, &InputSnapshot::default(), &BASE_STATS);
        assert!(body.on_ground);
        assert_eq!(body.y, GROUND);
        assert_eq!(body.vy, 0.0);
    }

    #[test]
    fn test_never_below_ground() {
        for dt in [0.0, 0.001, DT, 0.1, 0.5, 2.0, 30.0] {
            let mut body = PlayerBody::spawn(0.0, GROUND);
            body.y = GROUND - 300.0;
            body.vy = 900.0;
            body.step(dt, &InputSnapshot::default(), &BASE_STATS);
            assert!(body.y <= GROUND, "dt={dt} put feet at {}", body.y);
        }
    }

    #[test]
    fn test_landing_is_idempotent() {
        let mut body = grounded();
        for _ in 0..10 {
            body.step(DT, &InputSnapshot::default(), &BASE_STATS);
            assert_eq!(body.y, GROUND);
            assert_eq!(body.vy, 0.0);
            assert!(body.on_ground);
        }
    }

    #[test]
    fn test_horizontal_velocity_from_keys() {
        let mut body = grounded();

        body.step(DT, &held(false, true), &BASE_STATS);
        assert_eq!(body.vx, BASE_STATS.move_speed);

        body.step(DT, &held(true, false), &BASE_STATS);
        assert_eq!(body.vx, -BASE_STATS.move_speed);

        body.step(DT, &held(true, true), &BASE_STATS);
        assert_eq!(body.vx, 0.0);

        body.step(DT, &held(false, false), &BASE_STATS);
        assert_eq!(body.vx, 0.0);
    }

    #[test]
    fn test_jump_from_ground() {
        let mut body = grounded();
        let jump = InputSnapshot {
            jump_pressed: true,
            ..Default::default()
        };

        body.step(DT, &jump, &BASE_STATS);
        assert!(!body.on_ground);
        assert_relative_eq!(body.vy, BASE_STATS.jump_velocity + BASE_STATS.gravity * DT);
        assert!(body.y < GROUND);
    }

    #[test]
    fn test_jump_ignored_while_airborne() {
        let mut body = PlayerBody::spawn(0.0, GROUND);
        body.y = GROUND - 100.0;
        body.vy = -50.0;
        let jump = InputSnapshot {
            jump_pressed: true,
            ..Default::default()
        };

        body.step(DT, &jump, &BASE_STATS);
        assert_relative_eq!(body.vy, -50.0 + BASE_STATS.gravity * DT);
    }

    #[test]
    fn test_jump_ignored_on_spawn_tick() {
        let mut body = PlayerBody::spawn(0.0, GROUND);
        let jump = InputSnapshot {
            jump_pressed: true,
            ..Default::default()
        };

        body.step(DT, &jump, &BASE_STATS);
        assert!(body.on_ground);
        assert_eq!(body.y, GROUND);
    }

    #[test]
    fn test_jump_returns_to_ground() {
        let mut body = grounded();
        let jump = InputSnapshot {
            jump_pressed: true,
            ..Default::default()
        };
        body.step(DT, &jump, &BASE_STATS);

        let mut ticks = 0;
        while !body.on_ground {
            body.step(DT, &InputSnapshot::default(), &BASE_STATS);
            ticks += 1;
            assert!(ticks < 600, "never landed");
        }
        assert_eq!(body.y, GROUND);
    }

    #[test]
    fn test_punch_retrigger_restarts_timer() {
        let mut body = grounded();
        body.punch_timer = 0.05;
        let punch = InputSnapshot {
            punch_pressed: true,
            ..Default::default()
        };

        body.step(0.0, &punch, &BASE_STATS);
        assert_eq!(body.punch_timer, BASE_STATS.punch_duration);

        // A second press restarts from the full duration rather than adding to it
        body.step(0.0, &punch, &BASE_STATS);
        assert_eq!(body.punch_timer, BASE_STATS.punch_duration);
    }

    #[test]
    fn test_punch_timer_counts_down_to_zero() {
        let mut body = grounded();
        body.punch_timer = 0.05;

        body.step(0.03, &InputSnapshot::default(), &BASE_STATS);
        assert_relative_eq!(body.punch_timer, 0.02, epsilon = 1e-6);

        body.step(0.03, &InputSnapshot::default(), &BASE_STATS);
        assert_eq!(body.punch_timer, 0.0);
        assert!(!body.is_punching());
    }

    #[test]
    fn test_walk_one_second() {
        let mut body = PlayerBody::spawn(120.0, GROUND);
        for _ in 0..60 {
            body.step(DT, &held(false, true), &BASE_STATS);
        }
        assert_relative_eq!(body.x, 380.0, epsilon = 0.01);
        assert_eq!(body.y, GROUND);
    }
}
