//! Game state and core simulation types
//!
//! Everything the step reads or writes lives in `GameState`; the host owns it
//! and hands it to `tick` by reference.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::settings::Config;

/// Which side of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Keyboard paddle on the left edge
    Player,
    /// Tracker paddle on the right edge
    Computer,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Radius
    pub size: f32,
}

impl Ball {
    /// Ball at court center with the match-start velocity
    pub fn new(config: &Config) -> Self {
        Self {
            pos: config.center(),
            vel: Vec2::splat(config.ball_start_speed),
            size: config.ball_size,
        }
    }

    /// Put the ball back on the center spot and serve it toward the side that
    /// just conceded
    pub fn serve(&mut self, center: Vec2, dy: f32) {
        self.pos = center;
        self.vel.x = -self.vel.x;
        self.vel.y = dy;
    }
}

/// A paddle; width and height are shared and live in `Config`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top edge
    pub y: f32,
}

impl Paddle {
    /// Paddle vertically centered in the court
    pub fn centered(config: &Config) -> Self {
        Self {
            y: config.court_height / 2.0 - config.paddle_height / 2.0,
        }
    }

    /// Vertical center
    pub fn center(&self, height: f32) -> f32 {
        self.y + height / 2.0
    }

    /// Whether `y` lies strictly between the top and bottom edges
    pub fn spans(&self, y: f32, height: f32) -> bool {
        y > self.y && y < self.y + height
    }

    /// Step up by `speed`, never past the top wall
    pub fn move_up(&mut self, speed: f32) {
        if self.y > 0.0 {
            self.y = (self.y - speed).max(0.0);
        }
    }

    /// Step down by `speed`, never past `max_y`
    pub fn move_down(&mut self, speed: f32, max_y: f32) {
        if self.y < max_y {
            self.y = (self.y + speed).min(max_y);
        }
    }

    /// Follow the ball's current height, holding inside the deadband.
    ///
    /// Not predictive and not clamped to the court.
    pub fn track(&mut self, ball_y: f32, height: f32, speed: f32, deadband: f32) {
        let center = self.center(height);
        if center < ball_y - deadband {
            self.y += speed;
        } else if center > ball_y + deadband {
            self.y -= speed;
        }
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub computer: u32,
}

impl Score {
    /// Credit one point
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Computer => self.computer += 1,
        }
    }
}

/// Seed wrapper, kept with the state so a session can be replayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub rng_state: RngState,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ball: Ball,
    /// Left paddle
    pub player: Paddle,
    /// Right paddle
    pub computer: Paddle,
    pub score: Score,
}

impl GameState {
    /// Match-start state: ball and both paddles centered, scores at zero
    pub fn new(config: &Config, seed: u64) -> Self {
        Self {
            rng_state: RngState::new(seed),
            time_ticks: 0,
            ball: Ball::new(config),
            player: Paddle::centered(config),
            computer: Paddle::centered(config),
            score: Score::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_start_layout() {
        let config = Config::default();
        let state = GameState::new(&config, 7);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(state.ball.vel, Vec2::new(7.0, 7.0));
        assert_eq!(state.ball.size, 10.0);
        assert_eq!(state.player.y, 150.0);
        assert_eq!(state.computer.y, 150.0);
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn test_paddle_clamps_at_walls() {
        let mut paddle = Paddle { y: 6.0 };
        paddle.move_up(8.0);
        assert_eq!(paddle.y, 0.0);
        paddle.move_up(8.0);
        assert_eq!(paddle.y, 0.0);

        let mut paddle = Paddle { y: 296.0 };
        paddle.move_down(8.0, 300.0);
        assert_eq!(paddle.y, 300.0);
        paddle.move_down(8.0, 300.0);
        assert_eq!(paddle.y, 300.0);
    }

    #[test]
    fn test_spans_is_strict() {
        let paddle = Paddle { y: 150.0 };
        assert!(paddle.spans(200.0, 100.0));
        assert!(!paddle.spans(150.0, 100.0));
        assert!(!paddle.spans(250.0, 100.0));
    }

    #[test]
    fn test_track_deadband() {
        // center = 200
        let mut paddle = Paddle { y: 150.0 };
        paddle.track(235.0, 100.0, 6.0, 35.0);
        assert_eq!(paddle.y, 150.0);
        paddle.track(165.0, 100.0, 6.0, 35.0);
        assert_eq!(paddle.y, 150.0);

        paddle.track(236.0, 100.0, 6.0, 35.0);
        assert_eq!(paddle.y, 156.0);
        paddle.track(100.0, 100.0, 6.0, 35.0);
        assert_eq!(paddle.y, 150.0);
    }

    #[test]
    fn test_track_is_unclamped() {
        let mut paddle = Paddle { y: 0.0 };
        paddle.track(-500.0, 100.0, 6.0, 35.0);
        assert_eq!(paddle.y, -6.0);
    }

    #[test]
    fn test_serve_flips_dx() {
        let mut ball = Ball::new(&Config::default());
        ball.pos = Vec2::new(-3.0, 50.0);
        ball.vel = Vec2::new(-7.0, 2.0);
        ball.serve(Vec2::new(400.0, 200.0), -1.5);
        assert_eq!(ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(ball.vel, Vec2::new(7.0, -1.5));
    }
}
