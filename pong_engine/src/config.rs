use std::f32::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::Params;
use crate::Side;

/// Who receives the ball after a point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServeRule {
    /// The side that conceded receives the next serve
    #[default]
    TowardConceder,
    /// The ball is launched back toward the side that scored
    TowardScorer,
}

impl ServeRule {
    pub fn receiver(self, scorer: Side) -> Side {
        match self {
            ServeRule::TowardConceder => scorer.other(),
            ServeRule::TowardScorer => scorer,
        }
    }
}

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be non-negative and finite, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("paddle height {paddle} exceeds playfield height {playfield}")]
    PaddleTooTall { paddle: f32, playfield: f32 },

    #[error("ball diameter {diameter} does not fit in playfield height {playfield}")]
    BallTooLarge { diameter: f32, playfield: f32 },

    #[error("paddles overlap: inset {inset} and width {width} leave no gap in a playfield {playfield} wide")]
    PaddlesOverlap { inset: f32, width: f32, playfield: f32 },

    #[error("maximum ball speed {max} is below the initial speed {initial}")]
    MaxSpeedBelowInitial { max: f32, initial: f32 },

    #[error("{field} must lie in {range}, got {value}")]
    AngleOutOfRange {
        field: &'static str,
        range: &'static str,
        value: f32,
    },
}

/// Game configuration, fixed for the lifetime of an engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub human_paddle_speed: f32,
    pub opponent_paddle_speed: f32,
    pub opponent_dead_zone: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_increment: f32,
    pub ball_speed_max: f32,
    pub bounce_nudge: f32,
    pub max_bounce_angle: f32,
    pub serve_angle: f32,
    pub serve_rule: ServeRule,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playfield_width: Params::PLAYFIELD_WIDTH,
            playfield_height: Params::PLAYFIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            human_paddle_speed: Params::HUMAN_PADDLE_SPEED,
            opponent_paddle_speed: Params::OPPONENT_PADDLE_SPEED,
            opponent_dead_zone: Params::OPPONENT_DEAD_ZONE,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            ball_speed_max: Params::BALL_SPEED_MAX,
            bounce_nudge: Params::BOUNCE_NUDGE,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            serve_angle: Params::SERVE_ANGLE,
            serve_rule: ServeRule::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the left edge X position of a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Human => self.paddle_inset,
            Side::Opponent => self.playfield_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Max per-step vertical movement of a paddle
    pub fn paddle_speed(&self, side: Side) -> f32 {
        match side {
            Side::Human => self.human_paddle_speed,
            Side::Opponent => self.opponent_paddle_speed,
        }
    }

    /// Clamp a paddle's top edge to the playfield
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.playfield_height - self.paddle_height)
    }

    /// Check every value the simulation relies on.
    ///
    /// An engine is only ever built from a config that passed this check, so
    /// the clamps and range samples inside the step never see an empty range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("human_paddle_speed", self.human_paddle_speed),
            ("opponent_paddle_speed", self.opponent_paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed_initial", self.ball_speed_initial),
            ("ball_speed_max", self.ball_speed_max),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("paddle_inset", self.paddle_inset),
            ("opponent_dead_zone", self.opponent_dead_zone),
            ("ball_speed_increment", self.ball_speed_increment),
            ("bounce_nudge", self.bounce_nudge),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.paddle_height > self.playfield_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                playfield: self.playfield_height,
            });
        }

        let diameter = self.ball_radius * 2.0;
        if diameter >= self.playfield_height {
            return Err(ConfigError::BallTooLarge {
                diameter,
                playfield: self.playfield_height,
            });
        }

        if 2.0 * (self.paddle_inset + self.paddle_width) >= self.playfield_width {
            return Err(ConfigError::PaddlesOverlap {
                inset: self.paddle_inset,
                width: self.paddle_width,
                playfield: self.playfield_width,
            });
        }

        if self.ball_speed_max < self.ball_speed_initial {
            return Err(ConfigError::MaxSpeedBelowInitial {
                max: self.ball_speed_max,
                initial: self.ball_speed_initial,
            });
        }

        if !(self.max_bounce_angle > 0.0 && self.max_bounce_angle < FRAC_PI_2) {
            return Err(ConfigError::AngleOutOfRange {
                field: "max_bounce_angle",
                range: "(0, π/2)",
                value: self.max_bounce_angle,
            });
        }
        if !(self.serve_angle >= 0.0 && self.serve_angle < FRAC_PI_2) {
            return Err(ConfigError::AngleOutOfRange {
                field: "serve_angle",
                range: "[0, π/2)",
                value: self.serve_angle,
            });
        }

        Ok(())
    }
}
