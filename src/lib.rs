//! Court Pong - a classic two-paddle court game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, scoring)
//! - `renderer`: Render collaborator interface (draw commands, no backend)
//! - `platform`: Host-side input handling
//! - `game`: Frame host composing tick-then-draw
//! - `settings`: Court and tuning configuration

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{Config, ConfigError};

/// Game configuration constants
pub mod consts {
    /// Court dimensions
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 400.0;

    /// Paddle defaults (shared by both paddles)
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Player paddle travel per tick
    pub const PLAYER_SPEED: f32 = 8.0;
    /// Computer paddle travel per tick
    pub const COMPUTER_SPEED: f32 = 6.0;
    /// Computer holds while its center is within this distance of the ball
    pub const COMPUTER_DEADBAND: f32 = 35.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    /// Initial velocity on both axes at match start
    pub const BALL_START_SPEED: f32 = 7.0;
    /// dy = (hit_y - paddle_center) * RETURN_ANGLE_FACTOR after a paddle hit
    pub const RETURN_ANGLE_FACTOR: f32 = 0.2;
    /// Serve dy is drawn uniformly from [-SERVE_DY_RANGE, SERVE_DY_RANGE)
    pub const SERVE_DY_RANGE: f32 = 5.0;
}
