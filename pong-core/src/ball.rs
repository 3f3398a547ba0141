//! Ball kinematics.
//!
//! The ball carries scalar speed and along-path acceleration plus their
//! vector decomposition along the current direction. Per advance of `dt`
//! seconds the motion law is
//!
//! ```text
//!   pos   += (acc * dt + vel) * dt
//!   speed +=  accel * dt
//!   vel   +=  acc * dt
//! ```
//!
//! so the position update folds the acceleration in with the pre-step
//! velocity. Collision detection solves the same law in closed form, which
//! keeps detected contact times and integrated positions in exact agreement.

use std::f64::consts::{FRAC_PI_4, PI};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::types::Vec2;

/// The ball: position, its vector motion state, and the scalar state the
/// vectors are decomposed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    /// Scalar speed along the current direction.
    pub speed: f64,
    /// Scalar acceleration along the current direction.
    pub accel: f64,
    /// Heading in radians from the +x axis, positive toward the bottom wall.
    pub direction: f64,
}

impl Ball {
    /// A freshly served ball at the center of the field.
    pub fn new(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let mut ball = Ball {
            pos: Vec2::new(0.5, 0.5),
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            speed: config.ball_speed,
            accel: config.ball_acceleration,
            direction: 0.0,
        };
        ball.reset(config, rng);
        ball
    }

    /// Integrate the motion law over `dt` seconds and return the new
    /// position. Callers are responsible for making sure the path is clear
    /// for the whole interval.
    pub fn advance(&mut self, dt: f64) -> Vec2 {
        self.pos += (self.acc * dt + self.vel) * dt;
        self.speed += self.accel * dt;
        self.vel += self.acc * dt;
        self.pos
    }

    /// The y coordinate the motion law yields `t` seconds from now, without
    /// advancing any state.
    pub fn y_at(&self, t: f64) -> f64 {
        self.pos.y + (self.acc.y * t + self.vel.y) * t
    }

    /// Point the motion state along `angle`, preserving the scalar speed
    /// and acceleration.
    pub fn set_direction(&mut self, angle: f64) {
        self.direction = angle;
        let unit = Vec2::from_angle(angle);
        self.vel = unit * self.speed;
        self.acc = unit * self.accel;
    }

    /// Re-serve: back to the center at base speed and acceleration, heading
    /// within 45 degrees of horizontal toward a uniformly random side.
    pub fn reset(&mut self, config: &GameConfig, rng: &mut impl Rng) {
        self.pos = Vec2::new(0.5, 0.5);
        self.speed = config.ball_speed;
        self.accel = config.ball_acceleration;

        let mut angle = rng.gen_range(-FRAC_PI_4..FRAC_PI_4);
        if rng.gen_bool(0.5) {
            angle += PI;
        }
        self.set_direction(angle);
    }
}

// =============================================================================
// Tests
// =============================================================================
