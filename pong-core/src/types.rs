//! Core data types shared across the simulation.
//!
//! ## Coordinate system
//!
//! The field is the unit square, matching how the renderer addresses it:
//!
//! ```text
//!   (0,0) ──────── x ────────→ (1,0)
//!     │   top wall
//!     y     player ▌      ▐ computer
//!     │   bottom wall
//!     ↓
//!   (0,1) ──────────────────── (1,1)
//! ```
//!
//! The player defends the left edge, the computer the right. All lengths are
//! fractions of the field edge, times are in seconds, and angles are in
//! radians measured from the +x axis with positive y pointing down (so a
//! positive angle heads toward the bottom wall).

use serde::{Deserialize, Serialize};

// =============================================================================
// Vectors
// =============================================================================

/// A 2D vector over the field, used for positions, velocities, and
/// accelerations alike.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    /// Unit vector pointing along `angle` radians from the +x axis.
    pub fn from_angle(angle: f64) -> Self {
        Vec2 {
            x: angle.cos(),
            y: angle.sin(),
        }
    }

    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, other: Vec2) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, scalar: f64) -> Vec2 {
        Vec2::new(self.x * scalar, self.y * scalar)
    }
}

// =============================================================================
// Game vocabulary
// =============================================================================

/// Which side of the field a paddle defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left edge, driven by the human pointer.
    Player,
    /// Right edge, driven by the ball chaser.
    Computer,
}

impl Side {
    /// Display name used on the scoreboard.
    pub fn label(&self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Computer => "Computer",
        }
    }
}

/// Lifecycle of a round.
///
/// The only transitions are toggle (stopped/paused -> playing,
/// playing -> paused), focus loss (playing -> paused), and a miss
/// (playing -> stopped).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Stopped,
    Playing,
    Paused,
}

/// A horizontal boundary: the walls, and a paddle's two corner arcs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
}

// =============================================================================
// Collision outcomes
// =============================================================================

/// The surface the ball makes contact with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    /// Flat front of a paddle. `offset` is the signed distance from the
    /// paddle center to the ball center at contact time, positive downward.
    PaddleFace { side: Side, offset: f64 },
    /// Quarter-circle cap on a paddle end.
    PaddleCorner { side: Side, corner: Edge },
    /// Top or bottom field wall.
    Wall(Edge),
}

/// A resolved contact within the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Seconds from the start of the pass until the contact.
    pub time: f64,
    pub surface: Surface,
}

/// What the ball does with the remaining time budget of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PassOutcome {
    /// No contact: the full budget can be integrated in one step.
    Clear,
    /// A bounce at an exact time within the budget.
    Bounce(Contact),
    /// The ball gets past the named side's paddle; the opponent scores.
    Miss(Side),
}

// =============================================================================
// Constants
// =============================================================================

pub mod constants {
    /// Threshold below which a quadratic or velocity component is treated
    /// as degenerate.
    pub const EPSILON: f64 = 1e-10;
}

// =============================================================================
// Tests
// =============================================================================
