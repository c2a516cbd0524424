use crate::policy::OpponentPolicy;
use crate::systems::read_ball;
use crate::{Ball, Config, Paddle, PaddleIntent, Side};
use hecs::World;

/// Move the opponent paddle by what the policy asks for, capped at its speed
pub fn move_opponent(world: &mut World, policy: &mut dyn OpponentPolicy, config: &Config) {
    let Some(ball) = read_ball(world) else {
        return;
    };

    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &mut PaddleIntent)>() {
        if paddle.side != Side::Opponent {
            continue;
        }

        let wanted = policy.target_move(paddle, &ball, config);
        let delta = if wanted.is_finite() {
            wanted.clamp(-paddle.speed, paddle.speed)
        } else {
            0.0
        };

        let before = paddle.y;
        paddle.y = config.clamp_paddle_y(paddle.y + delta);
        *intent = PaddleIntent::from_delta(paddle.y - before);
    }
}

/// Move ball by one step of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
