pub mod collision;
pub mod input;
pub mod movement;
pub mod scoring;

pub use collision::*;
pub use input::*;
pub use movement::*;
pub use scoring::*;

use crate::{Ball, Paddle};
use hecs::World;

/// Copy of the ball, if one exists
pub(crate) fn read_ball(world: &World) -> Option<Ball> {
    world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball)
}

/// Write a ball value back into the world
pub(crate) fn write_ball(world: &mut World, value: Ball) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        *ball = value;
    }
}

/// Copies of all paddles, human first
pub(crate) fn read_paddles(world: &World) -> Vec<Paddle> {
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|p| p.side != crate::Side::Human);
    paddles
}
