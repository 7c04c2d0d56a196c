//! Hambert's Quest entry point
//!
//! The native build has no window: it runs the game headless with the
//! autopilot at a fixed 60 Hz and prints the session leaderboard.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hamberts_quest::platform::{AutopilotInput, FixedClock, NullSink, run_frame};
use hamberts_quest::sim::{GameEvent, GamePhase, GameState, SimError};
use hamberts_quest::tuning::{Tuning, TuningError};
use hamberts_quest::{Leaderboard, RunRecord};
use thiserror::Error;

const FRAME_DT: f32 = 1.0 / 60.0;

/// Headless autopilot runs of Hambert's Quest
#[derive(Debug, Parser)]
#[command(version, about)]
struct Options {
    /// Runs to play before printing the leaderboard
    #[arg(long, value_name = "COUNT", default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    runs: u32,

    /// RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file overriding the default tuning
    #[arg(long, value_name = "PATH")]
    tuning: Option<PathBuf>,

    /// Frame limit for the whole session (default: five simulated minutes)
    #[arg(long, value_name = "COUNT", default_value_t = 5 * 60 * 60, value_parser = clap::value_parser!(u64).range(1..))]
    max_frames: u64,

    /// Print the effective tuning as JSON and exit
    #[arg(long)]
    dump_tuning: bool,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Tuning(#[from] TuningError),
    #[error(transparent)]
    Sim(#[from] SimError),
}

fn run(options: &Options) -> Result<(), AppError> {
    let tuning = match &options.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    if options.dump_tuning {
        println!("{}", tuning.to_json()?);
        return Ok(());
    }

    let seed = options.seed.unwrap_or_else(rand::random);
    let mut state = GameState::new(seed, tuning)?;
    log::info!("Game initialized with seed: {}", seed);

    let mut input = AutopilotInput;
    let mut clock = FixedClock::new(FRAME_DT);
    let mut sink = NullSink::default();
    let mut board = Leaderboard::new();
    let mut finished = 0;

    while sink.frames < options.max_frames && finished < options.runs {
        for event in run_frame(&mut state, &mut input, &mut clock, &mut sink)? {
            log::debug!("{:?}", event);
            if let GameEvent::Crashed { .. } = event {
                board.record(RunRecord::from_state(&state));
                finished += 1;
            }
        }
    }

    if finished < options.runs && state.phase == GamePhase::Playing {
        log::info!(
            "Frame limit reached mid-run ({} pecans, {} generations)",
            state.score,
            state.generation
        );
        board.record(RunRecord::from_state(&state));
    }

    println!("\nSession leaderboard ({} frames):", sink.frames);
    if board.is_empty() {
        println!("  no runs played");
    }
    for (i, entry) in board.entries().iter().enumerate() {
        println!(
            "  #{:<2} {:>4} pecans  {:>4} rows  {:>7.1}s",
            i + 1,
            entry.score,
            entry.generations,
            entry.seconds
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let options = Options::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Hambert's Quest (headless) starting...");

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
