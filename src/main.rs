//! Wall Pong entry point
//!
//! Parses the session mode, sets up logging and the terminal, and runs the
//! game loop. Log output goes to stderr; redirect it (`2>pong.log`) to keep
//! it off the game screen.

use std::process::ExitCode;

use clap::Parser;

use wall_pong::game::ExitReason;
use wall_pong::input::KeyBindings;
use wall_pong::platform::TerminalPlatform;
use wall_pong::{CascadeMode, Game, GameConfig};

#[derive(Parser)]
#[command(version, about = "Paddle versus wall (or paddle versus paddle) in the terminal")]
struct Cli {
    /// Two paddles (W/S and I/K) instead of one paddle against the far wall
    #[arg(long)]
    two_player: bool,

    /// Collision pass structure: "classic" or "per-paddle"
    #[arg(long, default_value = "classic", value_parser = parse_cascade)]
    cascade: CascadeMode,
}

fn parse_cascade(s: &str) -> Result<CascadeMode, String> {
    CascadeMode::from_str(s).ok_or_else(|| format!("unknown cascade mode '{s}'"))
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let config = if cli.two_player {
        GameConfig::two_player()
    } else {
        GameConfig::single_player()
    }
    .with_cascade(cli.cascade);

    log::info!("Wall Pong starting...");
    match serde_json::to_string(&config) {
        Ok(json) => log::debug!("Config: {}", json),
        Err(e) => log::warn!("Could not serialize config: {}", e),
    }

    let mut platform = match TerminalPlatform::init(KeyBindings::default()) {
        Ok(platform) => platform,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("wall-pong: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut game = Game::new(config);
    let result = game.run_loop(&mut platform);
    drop(platform);

    match result {
        Ok(ExitReason::Quit) => {
            println!("bye");
            ExitCode::SUCCESS
        }
        Ok(ExitReason::GameOver) => {
            println!("game over after {} frames", game.frames());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("wall-pong: {e}");
            ExitCode::FAILURE
        }
    }
}
