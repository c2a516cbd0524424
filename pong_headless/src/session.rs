use std::io::Write;

use pong_engine::{InputSample, Side, SimulationEngine, Snapshot};
use serde::Serialize;
use tracing::{debug, info};

use crate::autopilot::Autopilot;
use crate::error::DriverError;

/// How the host loop drives the engine
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub frames: u64,
    pub fps: f32,
    pub autopilot: bool,
    pub json: bool,
}

/// One line of `--json` output, written when a point is scored
#[derive(Debug, Serialize)]
struct PointLine {
    frame: u64,
    scorer: Side,
    snapshot: Snapshot,
}

/// End-of-run report
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub frames: u64,
    pub seconds: f32,
    pub policy: String,
    pub human: u32,
    pub opponent: u32,
    pub longest_rally: u64,
    pub paddle_hits: u64,
    pub final_frame: Snapshot,
}

/// Own the frame loop: sample input, step, then read the state like a renderer would
pub fn run_session<W: Write>(
    engine: &mut SimulationEngine,
    options: &SessionOptions,
    out: &mut W,
) -> Result<Summary, DriverError> {
    if !(options.fps.is_finite() && options.fps > 0.0) {
        return Err(DriverError::InvalidFps(options.fps));
    }
    let dt = 1.0 / options.fps;

    let mut pilot = Autopilot::new();
    let mut rally = 0u64;
    let mut longest_rally = 0u64;
    let mut paddle_hits = 0u64;

    info!(
        frames = options.frames,
        fps = options.fps,
        autopilot = options.autopilot,
        policy = engine.policy_name(),
        "session started"
    );

    for frame in 0..options.frames {
        let input = if options.autopilot {
            pilot.sample(engine)
        } else {
            InputSample::idle()
        };

        let scored = engine.step(dt, input);
        rally += 1;

        if let Some(side) = engine.state().events().paddle_hit {
            paddle_hits += 1;
            debug!(frame, side = side.label(), "paddle hit");
        }

        if let Some(event) = scored {
            longest_rally = longest_rally.max(rally);
            rally = 0;
            if options.json {
                let line = PointLine {
                    frame,
                    scorer: event.scorer,
                    snapshot: engine.snapshot(),
                };
                serde_json::to_writer(&mut *out, &line)?;
                writeln!(out)?;
            }
        }
    }
    longest_rally = longest_rally.max(rally);

    let score = engine.score();
    let summary = Summary {
        frames: options.frames,
        seconds: engine.state().time().now,
        policy: engine.policy_name().to_string(),
        human: score.human,
        opponent: score.opponent,
        longest_rally,
        paddle_hits,
        final_frame: engine.snapshot(),
    };

    info!(
        human = summary.human,
        opponent = summary.opponent,
        longest_rally,
        "session finished"
    );

    Ok(summary)
}
