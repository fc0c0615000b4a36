use std::panic;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use lead_snake::error::AppError;
use lead_snake::game::GameState;
use lead_snake::input::GameInput;
use lead_snake::logging::init_file_logger;
use lead_snake::renderer;
use lead_snake::session::GameSession;
use lead_snake::terminal_input::poll_input;
use lead_snake::terminal_runtime::{TerminalSession, cleanup_terminal_best_effort};

/// Upper bound on how long one input poll may block, so redraws stay prompt.
const MAX_POLL_WAIT: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Append log records to this file (filter with RUST_LOG).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Print the final game state as JSON after quitting.
    #[arg(long = "print-final-state")]
    print_final_state: bool,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_file_logger(path)?;
    }

    install_panic_hook();

    let final_state = run(&cli)?;

    if cli.print_final_state {
        println!("{}", serde_json::to_string_pretty(&final_state)?);
    }

    Ok(())
}

fn run(cli: &Cli) -> Result<GameState, AppError> {
    let mut terminal = TerminalSession::enter()?;
    let now = Instant::now();
    let mut session = match cli.seed {
        Some(seed) => GameSession::start_with_seed(seed, now),
        None => GameSession::start(now),
    };

    loop {
        terminal
            .terminal_mut()
            .draw(|frame| renderer::render(frame, session.snapshot()))?;

        let wait = session
            .next_wakeup(Instant::now())
            .map_or(MAX_POLL_WAIT, |until_tick| until_tick.min(MAX_POLL_WAIT));

        if let Some(game_input) = poll_input(wait)? {
            if matches!(game_input, GameInput::Quit) {
                break;
            }

            handle_input(&mut session, game_input);
        }

        session.update(Instant::now());
    }

    // Scheduler is stopped before the terminal is restored.
    Ok(session.teardown())
}

fn handle_input(session: &mut GameSession, input: GameInput) {
    match input {
        GameInput::Direction(direction) => {
            session.handle_directional_input(direction);
        }
        GameInput::GestureStart(point) => session.handle_gesture_start(point),
        GameInput::GestureEnd(point) => {
            session.handle_gesture_end(point);
        }
        GameInput::Confirm if session.snapshot().over => session.reset(),
        GameInput::Confirm | GameInput::Quit => {}
    }
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort();
        default_hook(panic_info);
    }));
}
