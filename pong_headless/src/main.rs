mod autopilot;
mod cli;
mod error;
mod session;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use pong_engine::{Config, GameRng, ServeRule, SimulationEngine};
use tracing_subscriber::filter::EnvFilter;

use crate::cli::Args;
use crate::error::DriverError;
use crate::session::{run_session, SessionOptions};

fn main() -> ExitCode {
    // Logs go to stderr so `--json` output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), DriverError> {
    let mut config = Config::default();
    if args.serve_toward_scorer {
        config.serve_rule = ServeRule::TowardScorer;
    }

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let mut engine = SimulationEngine::new(config, rng)?;

    let options = SessionOptions {
        frames: args.frames,
        fps: args.fps,
        autopilot: args.autopilot,
        json: args.json,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = run_session(&mut engine, &options, &mut out)?;

    if args.json {
        serde_json::to_writer_pretty(&mut out, &summary)?;
        writeln!(out)?;
    } else {
        writeln!(
            out,
            "Player {} - {} Computer after {} frames ({:.1}s), longest rally {} frames, {} returns",
            summary.human,
            summary.opponent,
            summary.frames,
            summary.seconds,
            summary.longest_rally,
            summary.paddle_hits,
        )?;
    }

    Ok(())
}
