//! # Pong Core
//!
//! Simulation core for a human-vs-computer Pong game played on a unit
//! square. The ball moves under constant along-path acceleration and
//! collisions are resolved at their exact contact times inside each frame,
//! so behavior is independent of the caller's frame rate.
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - `types`: shared geometry and state types (vectors, sides, contacts)
//! - `config`: game tunables and their YAML file form
//! - `ball`: ball kinematics and serving
//! - `paddle`: paddle motion, targeting, and scoring
//! - `collision`: exact-time contact detection and bounce resolution
//! - `game`: the game manager tying it all together

pub mod ball;
pub mod collision;
pub mod config;
pub mod game;
pub mod paddle;
pub mod types;
