//! Contact detection against paddles and walls.
//!
//! All candidate surfaces are tested in closed form against the ball's
//! motion law. Because the acceleration vector stays collinear with the
//! velocity between bounces, the trajectory is a straight line traversed at
//! varying speed, which keeps every crossing a quadratic (or linear) solve.
//!
//! Candidates are only evaluated for surfaces the unobstructed end-of-budget
//! projection actually gets past; everything else is unreachable within the
//! frame and skipped outright.

use crate::ball::Ball;
use crate::config::GameConfig;
use crate::paddle::Paddle;
use crate::types::{constants, Contact, Edge, PassOutcome, Side, Surface, Vec2};

/// Roots of `a*t^2 + b*t + c = 0`, largest first.
///
/// Falls back to the linear solution when `a` is negligible (a linear root
/// is reported in both slots), and reports nothing when the coefficients
/// are entirely degenerate or the roots are complex.
fn solve_quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    if a.abs() < constants::EPSILON {
        if b.abs() < constants::EPSILON {
            return None;
        }
        let root = -c / b;
        return Some((root, root));
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let d = discriminant.sqrt();
    Some(((-b + d) / (2.0 * a), (-b - d) / (2.0 * a)))
}

/// Contact of the ball with a paddle's face plane.
///
/// Returns the crossing time of `plane_x` together with the signed offset
/// from the paddle center at that moment, or `None` when the crossing falls
/// outside the paddle's reach. The paddle is extrapolated at its current
/// velocity, so a moving paddle is met where it will be, not where it is.
fn face_hit(ball: &Ball, plane_x: f64, paddle: &Paddle, config: &GameConfig) -> Option<(f64, f64)> {
    let (r1, r2) = solve_quadratic(ball.acc.x, ball.vel.x, ball.pos.x - plane_x)?;
    let time = r1.max(r2);

    let offset = ball.y_at(time) - (paddle.y + paddle.vel * time);
    if offset.abs() > config.paddle_size / 2.0 {
        return None;
    }
    Some((time, offset))
}

/// Contact times of the ball with the circle of `radius` around `corner`.
///
/// The trajectory line is intersected with the circle first (solved along
/// the y axis), then each geometric crossing is mapped back to the time the
/// ball reaches it. A ball moving horizontally never yields corner contacts:
/// the y parameterization degenerates, and the face check already owns that
/// trajectory.
fn corner_hits(ball: &Ball, corner: Vec2, radius: f64) -> [Option<f64>; 2] {
    if ball.vel.y.abs() < constants::EPSILON {
        return [None, None];
    }

    let a = ball.vel.x / ball.vel.y;
    let b = (ball.pos.x - corner.x) - a * (ball.pos.y - corner.y);

    let (s1, s2) = match solve_quadratic(a * a + 1.0, 2.0 * a * b, b * b - radius * radius) {
        Some(roots) => roots,
        None => return [None, None],
    };

    let time_to = |s: f64| {
        let (t1, t2) = solve_quadratic(ball.acc.y, ball.vel.y, ball.pos.y - (corner.y + s))?;
        Some(t1.max(t2))
    };

    [time_to(s1), time_to(s2)]
}

/// Find what the ball does within the next `budget` seconds.
///
/// # Arguments
///
/// * `ball` - current ball state; its velocity and acceleration are assumed
///   collinear
/// * `player`, `computer` - the paddles, extrapolated at their current
///   velocities
/// * `budget` - remaining time in the frame, in seconds
///
/// # Returns
///
/// The earliest accepted contact as a [`PassOutcome::Bounce`], a
/// [`PassOutcome::Miss`] when the ball gets past a paddle untouched, or
/// [`PassOutcome::Clear`] when the whole budget is free of contacts.
///
/// A candidate is accepted when its time lands in `(0, budget]` and is no
/// later than the best one so far. Later candidates win exact ties, so the
/// evaluation order is part of the contract: player face, player corners,
/// computer face, computer corners, then the walls, which therefore take
/// any simultaneous paddle contact.
pub fn first_contact(
    ball: &Ball,
    player: &Paddle,
    computer: &Paddle,
    budget: f64,
    config: &GameConfig,
) -> PassOutcome {
    let radius = config.ball_radius;
    let thickness = config.paddle_thickness;

    // Per-axis unobstructed projection to the end of the budget
    let x_end = ball.pos.x + (ball.acc.x * budget + ball.vel.x) * budget;
    let y_end = ball.pos.y + (ball.acc.y * budget + ball.vel.y) * budget;

    let mut miss = None;
    if x_end < thickness {
        miss = Some(Side::Player);
    }
    if x_end > 1.0 - thickness {
        miss = Some(Side::Computer);
    }

    let mut best: Option<Contact> = None;
    let mut consider = |time: f64, surface: Surface| {
        let limit = best.map_or(budget, |contact| contact.time);
        if time > 0.0 && time <= limit {
            best = Some(Contact { time, surface });
        }
    };

    if x_end < thickness + radius {
        if let Some((time, offset)) = face_hit(ball, thickness + radius, player, config) {
            consider(time, Surface::PaddleFace { side: Side::Player, offset });
        }
        let corners = [
            (player.top(config), Edge::Top),
            (player.bottom(config), Edge::Bottom),
        ];
        for (corner_y, corner) in corners {
            let hits = corner_hits(ball, Vec2::new(thickness, corner_y), radius);
            for time in hits.into_iter().flatten() {
                consider(time, Surface::PaddleCorner { side: Side::Player, corner });
            }
        }
    }

    if x_end > 1.0 - thickness - radius {
        if let Some((time, offset)) = face_hit(ball, 1.0 - thickness - radius, computer, config) {
            consider(time, Surface::PaddleFace { side: Side::Computer, offset });
        }
        let corners = [
            (computer.top(config), Edge::Top),
            (computer.bottom(config), Edge::Bottom),
        ];
        for (corner_y, corner) in corners {
            let hits = corner_hits(ball, Vec2::new(1.0 - thickness, corner_y), radius);
            for time in hits.into_iter().flatten() {
                consider(time, Surface::PaddleCorner { side: Side::Computer, corner });
            }
        }
    }

    if y_end < radius {
        if let Some((r1, r2)) = solve_quadratic(ball.acc.y, ball.vel.y, ball.pos.y - radius) {
            consider(r1.max(r2), Surface::Wall(Edge::Top));
        }
    }
    if y_end > 1.0 - radius {
        if let Some((r1, r2)) = solve_quadratic(ball.acc.y, ball.vel.y, ball.pos.y - (1.0 - radius))
        {
            consider(r1.max(r2), Surface::Wall(Edge::Bottom));
        }
    }

    // A bounce found anywhere in the budget keeps the ball in play, even
    // when the projection sailed past a goal line
    if let Some(contact) = best {
        return PassOutcome::Bounce(contact);
    }
    if let Some(side) = miss {
        return PassOutcome::Miss(side);
    }
    PassOutcome::Clear
}

// =============================================================================
// Tests
// =============================================================================
