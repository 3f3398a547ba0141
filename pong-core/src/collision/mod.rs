//! Exact-time collision handling.
//!
//! Instead of stepping the ball and checking for overlap afterwards, the
//! detector solves the motion law against each surface in closed form and
//! reports the earliest contact inside the frame's time budget:
//!
//! ```text
//!   frame budget dt
//!   ├──────────┬──────────────────┤
//!   0          t*                 dt
//!              └─ contact: advance to t*, bounce, repeat on dt - t*
//! ```
//!
//! Detection ([`detection`]) produces a [`crate::types::PassOutcome`];
//! resolution ([`resolution`]) turns an accepted contact into the ball's
//! outgoing direction. Fast balls cannot tunnel through paddles or walls,
//! because contact times come from the trajectory itself rather than from
//! sampled positions.

pub mod detection;
pub mod resolution;

pub use detection::*;
pub use resolution::*;
