use hecs::World;

use crate::{Config, InputSample, Paddle, PaddleIntent, Side};

/// Move the human paddle from this step's input sample.
///
/// A pointer position centers the paddle on it and wins over the keys;
/// otherwise a held key moves the paddle by its speed.
pub fn apply_human_input(world: &mut World, input: &InputSample, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &mut PaddleIntent)>() {
        if paddle.side != Side::Human {
            continue;
        }

        let before = paddle.y;
        if let Some(pointer_y) = input.pointer_target() {
            paddle.y = pointer_y - config.paddle_height / 2.0;
        } else {
            paddle.y += input.key_dir() as f32 * paddle.speed;
        }

        paddle.y = config.clamp_paddle_y(paddle.y);
        *intent = PaddleIntent::from_delta(paddle.y - before);
    }
}
