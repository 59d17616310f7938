use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{info, warn};
use obstacle_snake::config::{FRAME_POLL_INTERVAL_MS, GameConfig};
use obstacle_snake::error::Result;
use obstacle_snake::game::GameState;
use obstacle_snake::input::{GameInput, InputHandler};
use obstacle_snake::logging::{default_log_path, init_file_logger};
use obstacle_snake::renderer;
use obstacle_snake::settings::{Settings, load_settings, settings_path};
use obstacle_snake::terminal_runtime::{TerminalSession, install_panic_hook};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Starting difficulty: novice, intermediate or expert.
    #[arg(long)]
    difficulty: Option<String>,

    /// Number of obstacles placed each session.
    #[arg(long)]
    obstacles: Option<usize>,

    /// Seed for obstacle and food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Log file path (defaults to the platform data directory).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(error) = init_file_logger(&log_path, cli.verbose) {
        eprintln!("Logging disabled ({}): {error}", log_path.display());
    }

    let settings = load_settings().unwrap_or_else(|error| {
        eprintln!("Ignoring {}: {error}", settings_path().display());
        warn!("ignoring settings file: {error}");
        Settings::default()
    });

    let mut state = build_state(&cli, &settings)?;

    install_panic_hook();
    run(&mut state)?;
    info!("exiting with score {}", state.score);
    Ok(())
}

fn build_state(cli: &Cli, settings: &Settings) -> Result<GameState> {
    let config = GameConfig {
        obstacle_count: cli
            .obstacles
            .or(settings.obstacles)
            .unwrap_or(GameConfig::default().obstacle_count),
        seed: cli.seed,
        ..GameConfig::default()
    };
    let mut state = GameState::new(config)?;

    if let Some(name) = cli.difficulty.as_deref().or(settings.difficulty.as_deref()) {
        state.set_difficulty_by_name(name);
    }

    Ok(state)
}

fn run(state: &mut GameState) -> Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut last_frame = Instant::now();

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, state))?;

        if let Some(game_input) = input.poll_input(Duration::from_millis(FRAME_POLL_INTERVAL_MS))? {
            if game_input == GameInput::Quit {
                break;
            }

            state.apply_input(game_input);
        }

        let now = Instant::now();
        state.advance(now - last_frame);
        last_frame = now;
    }

    Ok(())
}
