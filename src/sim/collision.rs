//! Collision detection and response against the court walls and paddles
//!
//! Tests are edge-vs-line comparisons on the ball's post-move position. There
//! is no penetration correction: the ball may sit past a wall or paddle face
//! for up to one tick of travel.

use super::state::{Ball, Paddle, Side};
use crate::settings::Config;

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Top or bottom wall
    Wall,
    /// A paddle face
    Paddle(Side),
}

/// Bounce off the top or bottom wall by inverting dy
pub fn wall_bounce(ball: &mut Ball, court_height: f32) -> Option<Collision> {
    if ball.pos.y + ball.size > court_height || ball.pos.y - ball.size < 0.0 {
        ball.vel.y = -ball.vel.y;
        Some(Collision::Wall)
    } else {
        None
    }
}

/// The paddle the ball is currently travelling toward
pub fn facing_side(ball: &Ball) -> Side {
    if ball.vel.x < 0.0 {
        Side::Player
    } else {
        Side::Computer
    }
}

/// Whether the ball's leading edge has crossed the face of the paddle on
/// `side` while its center is within the paddle's span
pub fn touches_paddle(ball: &Ball, paddle: &Paddle, side: Side, config: &Config) -> bool {
    let crossed = match side {
        Side::Player => ball.pos.x - ball.size < config.paddle_width,
        Side::Computer => ball.pos.x + ball.size > config.court_width - config.paddle_width,
    };
    crossed && paddle.spans(ball.pos.y, config.paddle_height)
}

/// Send the ball back with a return angle proportional to where it struck
pub fn return_off_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config) {
    ball.vel.x = -ball.vel.x;
    let diff = ball.pos.y - paddle.center(config.paddle_height);
    ball.vel.y = diff * config.return_angle_factor;
}

/// Test only the paddle the ball is heading for, and return it if hit
pub fn paddle_bounce(
    ball: &mut Ball,
    player: &Paddle,
    computer: &Paddle,
    config: &Config,
) -> Option<Collision> {
    let side = facing_side(ball);
    let paddle = match side {
        Side::Player => player,
        Side::Computer => computer,
    };
    if touches_paddle(ball, paddle, side, config) {
        return_off_paddle(ball, paddle, config);
        Some(Collision::Paddle(side))
    } else {
        None
    }
}
