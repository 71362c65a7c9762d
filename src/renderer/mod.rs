//! Rendering module
//!
//! The simulation never draws. After each tick the host hands the state to
//! `draw_frame`, which issues primitives to whatever `Surface` it owns.

pub mod commands;

pub use commands::{CommandBuffer, DrawCommand};

use crate::settings::Config;
use crate::sim::GameState;

/// A 2D drawing target
pub trait Surface {
    /// Wipe the previous frame
    fn clear_frame(&mut self);
    /// Filled circle centered at `(x, y)`
    fn draw_circle(&mut self, x: f32, y: f32, r: f32);
    /// Filled rectangle with top-left corner at `(x, y)`
    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Update the scoreboard
    fn set_score_display(&mut self, player: u32, computer: u32);
}

/// Draw one frame: ball, player paddle on the left edge, computer paddle on
/// the right edge, then the scoreboard
pub fn draw_frame<S: Surface + ?Sized>(state: &GameState, config: &Config, surface: &mut S) {
    surface.clear_frame();

    let ball = &state.ball;
    surface.draw_circle(ball.pos.x, ball.pos.y, ball.size);

    surface.draw_rect(0.0, state.player.y, config.paddle_width, config.paddle_height);
    surface.draw_rect(
        config.court_width - config.paddle_width,
        state.computer.y,
        config.paddle_width,
        config.paddle_height,
    );

    surface.set_score_display(state.score.player, state.score.computer);
}
