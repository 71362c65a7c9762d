//! Per-frame simulation tick
//!
//! Advances the game by one frame. Motion is a fixed amount per tick with no
//! delta-time scaling, so game speed follows the host's frame rate.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Collision, paddle_bounce, wall_bounce};
use super::state::{GameState, Score, Side};
use crate::settings::Config;

/// Input flags for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    /// Move player paddle up
    pub up: bool,
    /// Move player paddle down
    pub down: bool,
}

/// A point was scored this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEvent {
    /// Side that won the point
    pub scorer: Side,
    /// Scores after the point
    pub score: Score,
}

/// Advance the game state by one tick
///
/// `rng` is only drawn from when a point is scored.
pub fn tick<R: Rng>(
    state: &mut GameState,
    input: &InputState,
    config: &Config,
    rng: &mut R,
) -> Option<ScoreEvent> {
    state.time_ticks += 1;

    move_paddles(state, input, config);
    move_ball(state, config, rng)
}

/// Player paddle follows the input flags; computer paddle tracks the ball
pub fn move_paddles(state: &mut GameState, input: &InputState, config: &Config) {
    // Both flags may apply in the same tick
    if input.up {
        state.player.move_up(config.player_speed);
    }
    if input.down {
        state.player.move_down(config.player_speed, config.paddle_max_y());
    }

    state.computer.track(
        state.ball.pos.y,
        config.paddle_height,
        config.computer_speed,
        config.computer_deadband,
    );
}

/// Move the ball, resolve collisions, then check for a point
pub fn move_ball<R: Rng>(
    state: &mut GameState,
    config: &Config,
    rng: &mut R,
) -> Option<ScoreEvent> {
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    wall_bounce(ball, config.court_height);

    if let Some(Collision::Paddle(side)) =
        paddle_bounce(ball, &state.player, &state.computer, config)
    {
        log::debug!(
            "{:?} paddle return at y={:.1}, dy={:.2}",
            side,
            ball.pos.y,
            ball.vel.y
        );
    }

    let scorer = if ball.pos.x < 0.0 {
        Side::Computer
    } else if ball.pos.x > config.court_width {
        Side::Player
    } else {
        return None;
    };

    state.score.award(scorer);
    reset_ball(state, config, rng);

    Some(ScoreEvent {
        scorer,
        score: state.score,
    })
}

/// Serve from the center toward the side that just conceded
pub fn reset_ball<R: Rng>(state: &mut GameState, config: &Config, rng: &mut R) {
    let range = config.serve_dy_range;
    let dy = rng.random_range(-range..range);
    state.ball.serve(config.center(), dy);
    log::debug!("Serve dx={:.1}, dy={:.2}", state.ball.vel.x, dy);
}
