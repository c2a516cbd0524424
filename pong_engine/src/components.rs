use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::map::Aabb;
use crate::{Config, GameRng};

/// Which paddle a component or event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, driven by the host's input samples
    Human,
    /// Right paddle, driven by the opponent policy
    Opponent,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }

    /// Horizontal sign pointing toward this side's wall (left = -1, right = +1)
    pub fn direction(self) -> f32 {
        match self {
            Side::Human => -1.0,
            Side::Opponent => 1.0,
        }
    }

    /// Scoreboard caption
    pub fn label(self) -> &'static str {
        match self {
            Side::Human => "Player",
            Side::Opponent => "Computer",
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,     // Left edge, fixed after creation
    pub y: f32,     // Top edge (clamped to playfield)
    pub speed: f32, // Max vertical movement per step
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, speed: f32) -> Self {
        Self { side, x, y, speed }
    }

    pub fn center_y(&self, height: f32) -> f32 {
        self.y + height / 2.0
    }

    pub fn rect(&self, config: &Config) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + config.paddle_width, self.y + config.paddle_height),
        )
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,  // Displacement per step
    pub speed: f32, // Magnitude of `vel`, kept separately for bounce recomputes
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            speed: vel.length(),
        }
    }

    /// Re-center the ball and launch it at the initial speed.
    ///
    /// `toward` picks the side the ball travels to; `None` flips a coin.
    /// The launch angle is uniform in `[-serve_angle, serve_angle)`.
    pub fn reset(
        &mut self,
        center: Vec2,
        config: &Config,
        toward: Option<Side>,
        rng: &mut GameRng,
    ) {
        use rand::Rng;

        let side = toward.unwrap_or_else(|| {
            if rng.0.gen_bool(0.5) {
                Side::Opponent
            } else {
                Side::Human
            }
        });
        let angle: f32 = if config.serve_angle > 0.0 {
            rng.0.gen_range(-config.serve_angle..config.serve_angle)
        } else {
            0.0
        };

        self.pos = center;
        self.speed = config.ball_speed_initial;
        self.vel = Vec2::new(
            side.direction() * self.speed * angle.cos(),
            self.speed * angle.sin(),
        );
    }
}

/// Movement observed for a paddle during the last step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_delta(delta: f32) -> Self {
        let dir = if delta < 0.0 {
            -1
        } else if delta > 0.0 {
            1
        } else {
            0
        };
        Self { dir }
    }
}
