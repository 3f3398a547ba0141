//! Outgoing direction for each contact surface.
//!
//! Paddles steer rather than reflect: where the ball lands on the face
//! decides the return angle, so play stays controllable.
//!
//! ```text
//!              offset            tangent of return angle
//!    top    -size/2  ─────────  -tan(max_angle)
//!    center    0     ─────────   0   (straight out)
//!    bottom +size/2  ─────────  +tan(max_angle)
//! ```
//!
//! The mapping is linear in the tangent, not in the angle itself, and the
//! corner arcs saturate it: any corner contact returns at the full
//! `max_angle`. Walls are plain mirrors.

use crate::ball::Ball;
use crate::config::GameConfig;
use crate::types::{Edge, Side, Surface};

/// Horizontal sign of a return leaving `side`'s paddle.
fn outward_x(side: Side) -> f64 {
    match side {
        Side::Player => 1.0,
        Side::Computer => -1.0,
    }
}

/// The ball's new heading after bouncing off `surface`.
///
/// For walls this reads the ball's current velocity, so it must be called
/// after the ball has been advanced to the contact itself.
pub fn bounce_direction(surface: &Surface, ball: &Ball, config: &GameConfig) -> f64 {
    let max_tan = config.max_angle_rad().tan();

    match *surface {
        Surface::PaddleFace { side, offset } => {
            let steer = max_tan * 2.0 * offset / config.paddle_size;
            steer.atan2(outward_x(side))
        }
        Surface::PaddleCorner { side, corner } => {
            let steer = match corner {
                Edge::Top => -max_tan,
                Edge::Bottom => max_tan,
            };
            steer.atan2(outward_x(side))
        }
        Surface::Wall(_) => (-ball.vel.y).atan2(ball.vel.x),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    fn ball_with_vel(vel: Vec2) -> Ball {
        let mut ball = Ball::new(&config(), &mut StdRng::seed_from_u64(0));
        ball.vel = vel;
        ball
    }

    #[test]
    fn test_center_face_returns_level() {
        let config = config();
        let ball = ball_with_vel(Vec2::new(0.5, 0.0));

        let player = bounce_direction(
            &Surface::PaddleFace { side: Side::Player, offset: 0.0 },
            &ball,
            &config,
        );
        assert!(player.abs() < 1e-12, "player center hit must return level, got {}", player);

        let computer = bounce_direction(
            &Surface::PaddleFace { side: Side::Computer, offset: 0.0 },
            &ball,
            &config,
        );
        assert!(
            (computer.abs() - std::f64::consts::PI).abs() < 1e-12,
            "computer center hit must return level leftward, got {}",
            computer
        );
    }

    #[test]
    fn test_face_edges_reach_max_angle() {
        let config = config();
        let ball = ball_with_vel(Vec2::new(0.5, 0.0));
        let max = config.max_angle_rad();

        let down = bounce_direction(
            &Surface::PaddleFace { side: Side::Player, offset: config.paddle_size / 2.0 },
            &ball,
            &config,
        );
        assert!((down - max).abs() < 1e-9, "got {}", down);

        let up = bounce_direction(
            &Surface::PaddleFace { side: Side::Player, offset: -config.paddle_size / 2.0 },
            &ball,
            &config,
        );
        assert!((up + max).abs() < 1e-9, "got {}", up);
    }

    #[test]
    fn test_face_steering_is_linear_in_tangent() {
        let config = config();
        let ball = ball_with_vel(Vec2::new(0.5, 0.0));

        let dir = bounce_direction(
            &Surface::PaddleFace { side: Side::Player, offset: config.paddle_size / 4.0 },
            &ball,
            &config,
        );
        assert!(
            (dir.tan() - config.max_angle_rad().tan() / 2.0).abs() < 1e-9,
            "half the edge offset must give half the edge tangent, got tan {}",
            dir.tan()
        );
    }

    #[test]
    fn test_corners_saturate_the_angle() {
        let config = config();
        let ball = ball_with_vel(Vec2::new(0.5, 0.0));
        let max = config.max_angle_rad();
        let pi = std::f64::consts::PI;

        let cases = [
            (Side::Player, Edge::Top, -max),
            (Side::Player, Edge::Bottom, max),
            (Side::Computer, Edge::Top, -(pi - max)),
            (Side::Computer, Edge::Bottom, pi - max),
        ];
        for (side, corner, expected) in cases {
            let dir = bounce_direction(&Surface::PaddleCorner { side, corner }, &ball, &config);
            assert!(
                (dir - expected).abs() < 1e-9,
                "{:?} {:?} corner: expected {}, got {}",
                side,
                corner,
                expected,
                dir
            );
        }
    }

    #[test]
    fn test_wall_mirror_flips_vertical_only() {
        let config = config();
        let ball = ball_with_vel(Vec2::new(0.3, 0.4));

        let dir = bounce_direction(&Surface::Wall(Edge::Bottom), &ball, &config);
        let out = Vec2::from_angle(dir) * ball.vel.magnitude();
        assert!((out.x - 0.3).abs() < 1e-9, "horizontal component must carry over, got {}", out.x);
        assert!((out.y + 0.4).abs() < 1e-9, "vertical component must flip, got {}", out.y);
    }
}
