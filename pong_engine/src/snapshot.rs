use serde::{Deserialize, Serialize};

use crate::EngineState;

/// Flat, serializable view of one frame for renderers and score displays
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_vx: f32,
    pub ball_vy: f32,
    pub ball_speed: f32,
    pub paddle_human_y: f32,
    pub paddle_opponent_y: f32,
    pub score_human: u32,
    pub score_opponent: u32,
    pub paused: bool,
}

impl Snapshot {
    pub fn capture(state: &EngineState) -> Self {
        let ball = state.ball();
        let score = state.score();
        Self {
            tick: state.time().tick,
            ball_x: ball.pos.x,
            ball_y: ball.pos.y,
            ball_vx: ball.vel.x,
            ball_vy: ball.vel.y,
            ball_speed: ball.speed,
            paddle_human_y: state.paddle(crate::Side::Human).y,
            paddle_opponent_y: state.paddle(crate::Side::Opponent).y,
            score_human: score.human,
            score_opponent: score.opponent,
            paused: state.is_paused(),
        }
    }
}
