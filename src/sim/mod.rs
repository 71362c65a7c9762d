//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick increments only
//! - Injected RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Collision, paddle_bounce, wall_bounce};
pub use state::{Ball, GameState, Paddle, RngState, Score, Side};
pub use tick::{InputState, ScoreEvent, tick};
