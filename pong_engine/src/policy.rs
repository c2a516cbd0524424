//! Opponent control policies

use crate::{Ball, Config, Paddle};

/// Decides how far the opponent paddle wants to move each step.
///
/// The engine clamps whatever is returned to the paddle's max speed and to
/// the playfield, so a policy only expresses intent.
pub trait OpponentPolicy: Send {
    /// Signed vertical movement for this step (negative = up)
    fn target_move(&mut self, paddle: &Paddle, ball: &Ball, config: &Config) -> f32;

    /// Called whenever the ball is relaunched
    fn reset(&mut self) {}

    fn name(&self) -> &str;
}

/// Follows the ball's current height at a capped speed.
///
/// Strategy:
/// 1. Measure the gap between the paddle center and the ball.
/// 2. Inside the dead zone, hold still so the paddle does not jitter.
/// 3. Otherwise close the gap, never faster than the paddle's speed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackingPolicy;

impl OpponentPolicy for TrackingPolicy {
    fn target_move(&mut self, paddle: &Paddle, ball: &Ball, config: &Config) -> f32 {
        let delta = ball.pos.y - paddle.center_y(config.paddle_height);
        if delta.abs() > config.opponent_dead_zone {
            delta.clamp(-paddle.speed, paddle.speed)
        } else {
            0.0
        }
    }

    fn name(&self) -> &str {
        "tracking"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;
    use glam::Vec2;

    fn opponent(config: &Config, y: f32) -> Paddle {
        Paddle::new(
            Side::Opponent,
            config.paddle_x(Side::Opponent),
            y,
            config.opponent_paddle_speed,
        )
    }

    #[test]
    fn test_tracking_holds_inside_dead_zone() {
        let config = Config::new();
        let paddle = opponent(&config, 200.0); // center 250
        let ball = Ball::new(Vec2::new(400.0, 253.9), Vec2::new(5.0, 0.0));
        assert_eq!(TrackingPolicy.target_move(&paddle, &ball, &config), 0.0);
    }

    #[test]
    fn test_tracking_moves_at_most_max_speed() {
        let config = Config::new();
        let paddle = opponent(&config, 200.0);

        let below = Ball::new(Vec2::new(400.0, 400.0), Vec2::new(5.0, 0.0));
        assert_eq!(TrackingPolicy.target_move(&paddle, &below, &config), 5.0);

        let above = Ball::new(Vec2::new(400.0, 10.0), Vec2::new(5.0, 0.0));
        assert_eq!(TrackingPolicy.target_move(&paddle, &above, &config), -5.0);
    }

    #[test]
    fn test_tracking_closes_small_gap_exactly() {
        let config = Config::new();
        let paddle = opponent(&config, 200.0);
        let ball = Ball::new(Vec2::new(400.0, 254.5), Vec2::new(5.0, 0.0));
        assert_eq!(TrackingPolicy.target_move(&paddle, &ball, &config), 4.5);
    }
}
