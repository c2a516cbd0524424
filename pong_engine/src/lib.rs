//! Single-player Pong simulation
//!
//! The host owns the frame loop: each frame it builds an [`InputSample`],
//! calls [`SimulationEngine::step`], then reads the state (or a
//! [`Snapshot`]) to draw. The engine never draws and never blocks.

pub mod components;
pub mod config;
pub mod engine;
pub mod input;
pub mod map;
pub mod params;
pub mod policy;
pub mod resources;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use engine::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use policy::*;
pub use resources::*;
pub use snapshot::*;

pub use glam;

use hecs::World;

/// Helper to create a paddle entity at its side's fixed X
pub fn create_paddle(world: &mut World, config: &Config, side: Side, y: f32) -> hecs::Entity {
    let paddle = Paddle::new(side, config.paddle_x(side), y, config.paddle_speed(side));
    world.spawn((paddle, PaddleIntent::new()))
}

/// Helper to create the ball entity; its speed is the velocity's magnitude
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
