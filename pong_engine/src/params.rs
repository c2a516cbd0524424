use std::f32::consts::PI;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_INSET: f32 = 12.0; // distance from the side walls
    pub const HUMAN_PADDLE_SPEED: f32 = 6.0; // units per step
    pub const OPPONENT_PADDLE_SPEED: f32 = 5.0; // units per step
    pub const OPPONENT_DEAD_ZONE: f32 = 4.0;

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED_INITIAL: f32 = 5.0;
    pub const BALL_SPEED_INCREMENT: f32 = 0.25; // added on every paddle hit
    pub const BALL_SPEED_MAX: f32 = 12.0;
    pub const BOUNCE_NUDGE: f32 = 0.5;

    // Angles (radians)
    pub const MAX_BOUNCE_ANGLE: f32 = PI / 3.0; // 60°
    pub const SERVE_ANGLE: f32 = PI / 8.0; // ±22.5°
}
