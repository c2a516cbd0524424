use clap::Parser;

/// Run the Pong simulation without a screen and report the score
#[derive(Debug, Parser)]
#[command(name = "pong-headless", version, about)]
pub struct Args {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 3600)]
    pub frames: u64,

    /// RNG seed for serve directions and angles (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Host frame rate, used for the elapsed time passed to each step
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// Let a scripted player hold the arrow keys to chase the ball
    #[arg(long)]
    pub autopilot: bool,

    /// Serve toward the side that just scored instead of the side that conceded
    #[arg(long)]
    pub serve_toward_scorer: bool,

    /// Print one JSON line per point and a JSON summary instead of text
    #[arg(long)]
    pub json: bool,
}
