//! Paddle actors.
//!
//! Both paddles share one type; the [`Side`] field decides which edge the
//! paddle defends and where its face plane sits. A paddle never moves on
//! its own: it is always traveling toward the last target it was given, at
//! the configured speed, and parks exactly on the target rather than
//! oscillating around it.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::types::Side;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Center of the paddle along the y axis.
    pub y: f64,
    /// Where the paddle is headed, already clamped onto the field.
    pub target: f64,
    /// Signed travel speed: positive toward the bottom wall, zero when
    /// parked.
    pub vel: f64,
    pub score: u32,
}

impl Paddle {
    /// A parked paddle at mid-field with an empty score.
    pub fn new(side: Side) -> Self {
        Paddle {
            side,
            y: 0.5,
            target: 0.5,
            vel: 0.0,
            score: 0,
        }
    }

    /// Move toward the target for `dt` seconds. Overshoot parks the paddle
    /// exactly on the target and zeroes its velocity.
    pub fn advance(&mut self, dt: f64) {
        self.y += self.vel * dt;
        if (self.vel > 0.0 && self.y >= self.target) || (self.vel < 0.0 && self.y <= self.target) {
            self.y = self.target;
            self.vel = 0.0;
        }
    }

    /// Aim the paddle at `y`, clamped so the whole paddle stays on the
    /// field. A target equal to the current position parks immediately.
    pub fn set_target(&mut self, y: f64, config: &GameConfig) {
        let half = config.paddle_size / 2.0;
        let target = y.clamp(half, 1.0 - half);

        self.target = target;
        self.vel = if self.y < target {
            config.paddle_speed
        } else if self.y > target {
            -config.paddle_speed
        } else {
            0.0
        };
    }

    /// The x plane of the paddle's face: the surface the ball bounces off.
    pub fn face_x(&self, config: &GameConfig) -> f64 {
        match self.side {
            Side::Player => config.paddle_thickness,
            Side::Computer => 1.0 - config.paddle_thickness,
        }
    }

    /// y coordinate of the paddle's top end.
    pub fn top(&self, config: &GameConfig) -> f64 {
        self.y - config.paddle_size / 2.0
    }

    /// y coordinate of the paddle's bottom end.
    pub fn bottom(&self, config: &GameConfig) -> f64 {
        self.y + config.paddle_size / 2.0
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn test_new_paddle_is_parked_mid_field() {
        let paddle = Paddle::new(Side::Player);
        assert_eq!(paddle.y, 0.5);
        assert_eq!(paddle.target, 0.5);
        assert_eq!(paddle.vel, 0.0);
        assert_eq!(paddle.score, 0);
    }

    #[test]
    fn test_advance_moves_toward_target() {
        let mut paddle = Paddle::new(Side::Player);
        paddle.set_target(0.8, &config());
        assert_eq!(paddle.vel, 1.0);

        paddle.advance(0.1);
        assert!((paddle.y - 0.6).abs() < 1e-12, "got y={}", paddle.y);
        assert_eq!(paddle.vel, 1.0, "still short of the target, keep moving");
    }

    #[test]
    fn test_advance_parks_on_overshoot() {
        let mut paddle = Paddle::new(Side::Player);
        paddle.set_target(0.6, &config());

        // 0.2s at speed 1.0 would land at 0.7, past the target
        paddle.advance(0.2);
        assert_eq!(paddle.y, 0.6);
        assert_eq!(paddle.vel, 0.0);
    }

    #[test]
    fn test_advance_parks_moving_up_too() {
        let mut paddle = Paddle::new(Side::Computer);
        paddle.set_target(0.3, &config());
        assert_eq!(paddle.vel, -1.0);

        paddle.advance(0.25);
        assert_eq!(paddle.y, 0.3);
        assert_eq!(paddle.vel, 0.0);
    }

    #[test]
    fn test_set_target_clamps_to_field() {
        let mut paddle = Paddle::new(Side::Player);

        paddle.set_target(0.05, &config());
        assert!((paddle.target - 0.1).abs() < 1e-12, "got {}", paddle.target);

        paddle.set_target(0.99, &config());
        assert!((paddle.target - 0.9).abs() < 1e-12, "got {}", paddle.target);
    }

    #[test]
    fn test_target_at_current_position_parks() {
        let mut paddle = Paddle::new(Side::Player);
        paddle.set_target(0.8, &config());
        assert!(paddle.vel > 0.0);

        paddle.set_target(0.5, &config());
        assert_eq!(paddle.vel, 0.0, "no residual velocity on an equal target");
    }

    #[test]
    fn test_geometry_helpers() {
        let config = config();
        let player = Paddle::new(Side::Player);
        let computer = Paddle::new(Side::Computer);

        assert!((player.face_x(&config) - 0.02).abs() < 1e-12);
        assert!((computer.face_x(&config) - 0.98).abs() < 1e-12);
        assert!((player.top(&config) - 0.4).abs() < 1e-12);
        assert!((player.bottom(&config) - 0.6).abs() < 1e-12);
    }
}
