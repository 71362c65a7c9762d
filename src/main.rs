//! Court Pong entry point
//!
//! Runs the game headless: one frame per loop iteration, draw commands go to
//! an in-memory buffer, score events go to the log.

use court_pong::Game;
use court_pong::platform::Key;
use court_pong::renderer::CommandBuffer;
use court_pong::settings::Config;

/// Frames to play (about one minute at 60 Hz)
const DEMO_FRAMES: u32 = 3600;

fn main() {
    env_logger::init();
    log::info!("Court Pong (headless) starting...");

    let seed: u64 = rand::random();
    let mut game = match Game::new(Config::default(), seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Default court config rejected: {e}");
            std::process::exit(1);
        }
    };
    let mut surface = CommandBuffer::new();

    for frame in 0..DEMO_FRAMES {
        // Scripted player: sweep the paddle up and down
        let going_up = (frame / 60) % 2 == 0;
        game.set_key(Key::ArrowUp, going_up);
        game.set_key(Key::ArrowDown, !going_up);

        game.frame(&mut surface);
    }

    let score = game.state.score;
    log::info!(
        "Finished {} frames: player {} - computer {}",
        game.state.time_ticks,
        score.player,
        score.computer
    );
    println!("Player {} - Computer {}", score.player, score.computer);
}
