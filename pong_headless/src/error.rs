use pong_engine::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("invalid game configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("frame rate must be positive and finite, got {0}")]
    InvalidFps(f32),

    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
