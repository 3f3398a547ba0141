//! The game manager: actors, status machine, and the frame update loop.
//!
//! One external driver delivers elapsed-time ticks; `update` spends each
//! tick by repeatedly asking the detector for the earliest contact in the
//! remaining budget, advancing every actor to that instant, bouncing, and
//! continuing with what is left. A single tick can therefore contain any
//! number of bounces, and motion is identical whether the driver runs at
//! 30 or 240 frames per second.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::ball::Ball;
use crate::collision::{bounce_direction, first_contact};
use crate::config::GameConfig;
use crate::paddle::Paddle;
use crate::types::{PassOutcome, Side, Status};

/// Owns the ball, both paddles, the RNG, and the round lifecycle. All
/// mutation goes through the tick and control methods; renderers read the
/// state through the getters.
pub struct GameManager {
    config: GameConfig,
    ball: Ball,
    player: Paddle,
    computer: Paddle,
    rng: StdRng,
    status: Status,
}

impl GameManager {
    /// A fresh stopped game with an entropy-seeded serve.
    pub fn new(config: GameConfig) -> Self {
        Self::from_rng(config, StdRng::from_entropy())
    }

    /// A fresh stopped game with a deterministic serve sequence.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let ball = Ball::new(&config, &mut rng);
        GameManager {
            config,
            ball,
            player: Paddle::new(Side::Player),
            computer: Paddle::new(Side::Computer),
            rng,
            status: Status::Stopped,
        }
    }

    // =========================================================================
    // Tick
    // =========================================================================

    /// Spend `dt` seconds of play. Does nothing unless the game is playing.
    ///
    /// Each loop iteration either finishes the frame or consumes a strictly
    /// positive slice of the budget at a bounce, so the loop terminates. A
    /// miss ends the frame on the spot: the opponent scores, the ball
    /// re-serves, and any leftover budget is dropped with the round.
    pub fn update(&mut self, dt: f64) {
        if self.status != Status::Playing {
            return;
        }

        let mut budget = dt;
        while budget > 0.0 {
            match first_contact(&self.ball, &self.player, &self.computer, budget, &self.config) {
                PassOutcome::Clear => {
                    self.advance_actors(budget);
                    return;
                }
                PassOutcome::Bounce(contact) => {
                    self.advance_actors(contact.time);
                    let direction = bounce_direction(&contact.surface, &self.ball, &self.config);
                    self.ball.set_direction(direction);
                    budget -= contact.time;
                }
                PassOutcome::Miss(loser) => {
                    match loser {
                        Side::Player => self.computer.score += 1,
                        Side::Computer => self.player.score += 1,
                    }
                    self.ball.reset(&self.config, &mut self.rng);
                    self.status = Status::Stopped;
                    return;
                }
            }
        }
    }

    /// Advance every actor by `dt` and let the chaser re-aim at the ball.
    /// Paddles move first so the ball meets them where detection said they
    /// would be.
    fn advance_actors(&mut self, dt: f64) {
        self.player.advance(dt);
        self.computer.advance(dt);
        let pos = self.ball.advance(dt);
        self.computer.set_target(pos.y, &self.config);
    }

    // =========================================================================
    // Control signals
    // =========================================================================

    /// The click signal: start a stopped game, pause a running one, resume
    /// a paused one.
    pub fn toggle_status(&mut self) {
        self.status = match self.status {
            Status::Playing => Status::Paused,
            Status::Stopped | Status::Paused => Status::Playing,
        };
    }

    /// The focus-lost signal: pause a running game, leave anything else be.
    pub fn lose_focus(&mut self) {
        if self.status == Status::Playing {
            self.status = Status::Paused;
        }
    }

    /// Aim the human paddle at `fraction` of the field height.
    pub fn set_player_target(&mut self, fraction: f64) {
        self.player.set_target(fraction, &self.config);
    }

    // =========================================================================
    // Scripting
    // =========================================================================

    /// Place the ball. Intended for scripted rallies and tests.
    pub fn set_ball_position(&mut self, x: f64, y: f64) {
        self.ball.pos = crate::types::Vec2::new(x, y);
    }

    /// Override the ball's scalar motion state and heading.
    pub fn set_ball_motion(&mut self, speed: f64, accel: f64, direction: f64) {
        self.ball.speed = speed;
        self.ball.accel = accel;
        self.ball.set_direction(direction);
    }

    // =========================================================================
    // Paint surface
    // =========================================================================

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn player(&self) -> &Paddle {
        &self.player
    }

    pub fn computer(&self) -> &Paddle {
        &self.computer
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Overlay line for the renderer, or `None` while playing.
    pub fn status_text(&self) -> Option<&'static str> {
        match self.status {
            Status::Stopped => Some("Click to start"),
            Status::Paused => Some("Game paused. Click to resume"),
            Status::Playing => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> GameManager {
        GameManager::with_seed(GameConfig::default(), 7)
    }

    #[test]
    fn test_new_game_is_stopped_and_scoreless() {
        let game = game();
        assert_eq!(game.status(), Status::Stopped);
        assert_eq!(game.player().score, 0);
        assert_eq!(game.computer().score, 0);
    }

    #[test]
    fn test_same_seed_serves_identically() {
        let a = GameManager::with_seed(GameConfig::default(), 42);
        let b = GameManager::with_seed(GameConfig::default(), 42);
        assert_eq!(a.ball().direction, b.ball().direction);
    }

    #[test]
    fn test_toggle_walks_the_status_cycle() {
        let mut game = game();

        game.toggle_status();
        assert_eq!(game.status(), Status::Playing);
        game.toggle_status();
        assert_eq!(game.status(), Status::Paused);
        game.toggle_status();
        assert_eq!(game.status(), Status::Playing);
    }

    #[test]
    fn test_focus_loss_only_pauses_a_running_game() {
        let mut game = game();

        game.lose_focus();
        assert_eq!(game.status(), Status::Stopped, "stopped stays stopped");

        game.toggle_status();
        game.lose_focus();
        assert_eq!(game.status(), Status::Paused);

        game.lose_focus();
        assert_eq!(game.status(), Status::Paused, "already paused, no change");
    }

    #[test]
    fn test_update_is_a_noop_unless_playing() {
        let mut game = game();
        let before = *game.ball();

        game.update(0.5);
        assert_eq!(game.ball().pos, before.pos, "stopped game must not move");

        game.toggle_status();
        game.toggle_status();
        game.update(0.5);
        assert_eq!(game.ball().pos, before.pos, "paused game must not move");
    }

    #[test]
    fn test_update_moves_the_ball_while_playing() {
        let mut game = game();
        let before = game.ball().pos;

        game.toggle_status();
        game.update(0.1);
        assert_ne!(game.ball().pos, before);
    }

    #[test]
    fn test_miss_scores_resets_and_stops() {
        let mut game = game();
        game.toggle_status();

        // Horizontal ball aimed well above the parked player paddle
        game.set_ball_position(0.5, 0.15);
        game.set_ball_motion(0.5, 0.0, std::f64::consts::PI);

        game.update(2.0);

        assert_eq!(game.status(), Status::Stopped);
        assert_eq!(game.computer().score, 1, "computer takes the point");
        assert_eq!(game.player().score, 0);
        assert_eq!(game.ball().pos, crate::types::Vec2::new(0.5, 0.5), "ball re-serves");
    }

    #[test]
    fn test_computer_chases_the_ball() {
        let mut game = game();
        game.toggle_status();

        game.set_ball_position(0.5, 0.2);
        game.set_ball_motion(0.5, 0.0, 0.0);

        game.update(0.1);
        assert_eq!(game.computer().target, 0.2, "chaser re-aims at the ball's y");
        assert!(game.computer().vel < 0.0, "chaser heads up toward the ball");
    }

    #[test]
    fn test_player_target_routes_to_the_left_paddle() {
        let mut game = game();
        game.set_player_target(0.7);
        assert!((game.player().target - 0.7).abs() < 1e-12);
        assert_eq!(game.computer().target, 0.5, "right paddle is not the pointer's");
    }

    #[test]
    fn test_status_text_matches_status() {
        let mut game = game();
        assert_eq!(game.status_text(), Some("Click to start"));

        game.toggle_status();
        assert_eq!(game.status_text(), None);

        game.lose_focus();
        assert_eq!(game.status_text(), Some("Game paused. Click to resume"));
    }
}
