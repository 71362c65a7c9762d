//! Frame host
//!
//! Owns the session (state, input flags, config, seeded RNG) and composes one
//! tick followed by one draw per display refresh. One frame is one tick.

use rand_pcg::Pcg32;

use crate::platform::{self, Key};
use crate::renderer::{Surface, draw_frame};
use crate::settings::{Config, ConfigError};
use crate::sim::{GameState, InputState, ScoreEvent, tick};

/// Game instance holding all session state
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    pub input: InputState,
    config: Config,
    rng: Pcg32,
}

impl Game {
    /// Start a session with the given seed; the config must validate
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(config, seed))
    }

    fn start(config: Config, seed: u64) -> Self {
        let state = GameState::new(&config, seed);
        let rng = state.rng_state.to_rng();
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state,
            input: InputState::default(),
            config,
            rng,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Forward a key-down/key-up event; returns `false` for ignored keys
    pub fn key_event(&mut self, key: &str, pressed: bool) -> bool {
        platform::key_event(&mut self.input, key, pressed)
    }

    /// Press or release one of the game's keys
    pub fn set_key(&mut self, key: Key, pressed: bool) {
        platform::set_key(&mut self.input, key, pressed);
    }

    /// Advance the simulation only
    pub fn update(&mut self) -> Option<ScoreEvent> {
        let event = tick(&mut self.state, &self.input, &self.config, &mut self.rng);
        if let Some(event) = &event {
            log::info!(
                "{:?} scores ({} - {})",
                event.scorer,
                event.score.player,
                event.score.computer
            );
        }
        event
    }

    /// Draw the current state only
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        draw_frame(&self.state, &self.config, surface);
    }

    /// One display refresh: tick, then draw
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<ScoreEvent> {
        let event = self.update();
        self.render(surface);
        event
    }

    /// Throw the session away and start over, keeping the config
    pub fn restart(&mut self, seed: u64) {
        *self = Self::start(self.config, seed);
    }
}
