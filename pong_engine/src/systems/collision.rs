use crate::systems::{read_ball, read_paddles, write_ball};
use crate::{Ball, Config, Events, Paddle, Side};
use glam::Vec2;
use hecs::World;
use tracing::debug;

/// Reflect the ball off the top and bottom walls
pub fn check_walls(world: &mut World, config: &Config, events: &mut Events) {
    let radius = config.ball_radius;
    let height = config.playfield_height;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y - radius < 0.0 {
            ball.pos.y = radius;
            ball.vel.y = -ball.vel.y;
            events.wall_hit = true;
        } else if ball.pos.y + radius > height {
            ball.pos.y = height - radius;
            ball.vel.y = -ball.vel.y;
            events.wall_hit = true;
        }
    }
}

/// Bounce the ball off any paddle it overlaps
pub fn check_paddles(world: &mut World, config: &Config, events: &mut Events) {
    let Some(mut ball) = read_ball(world) else {
        return; // No ball in world
    };

    let radius = config.ball_radius;
    let mut hit = false;

    for paddle in read_paddles(world) {
        // Only test once the ball's edge has reached the paddle's band
        let reached = match paddle.side {
            Side::Human => ball.pos.x - radius < paddle.x + config.paddle_width,
            Side::Opponent => ball.pos.x + radius > paddle.x,
        };
        if !reached || !paddle.rect(config).intersects_circle(ball.pos, radius) {
            continue;
        }

        bounce_off(&mut ball, &paddle, config);
        events.paddle_hit = Some(paddle.side);
        hit = true;
        debug!(
            side = ?paddle.side,
            speed = ball.speed,
            vx = ball.vel.x,
            vy = ball.vel.y,
            "ball returned"
        );
    }

    if hit {
        write_ball(world, ball);
    }
}

/// Apply a paddle bounce to `ball`: new velocity plus a nudge out of the paddle face
pub fn bounce_off(ball: &mut Ball, paddle: &Paddle, config: &Config) {
    let center_y = paddle.rect(config).center().y;
    let relative_intersect = (ball.pos.y - center_y) / (config.paddle_height / 2.0);

    let (vel, speed) = bounce_velocity(relative_intersect, ball.speed, paddle.side, config);
    ball.vel = vel;
    ball.speed = speed;

    let clearance = config.ball_radius + config.bounce_nudge;
    ball.pos.x = match paddle.side {
        Side::Human => paddle.x + config.paddle_width + clearance,
        Side::Opponent => paddle.x - clearance,
    };
}

/// Velocity after hitting `side`'s paddle at `relative_intersect` (-1 = top edge, 1 = bottom edge).
///
/// Returns the new velocity and the new scalar speed. The speed grows by the
/// configured increment up to the maximum, and the ball always leaves toward
/// the other side.
pub fn bounce_velocity(
    relative_intersect: f32,
    speed: f32,
    side: Side,
    config: &Config,
) -> (Vec2, f32) {
    let relative_intersect = relative_intersect.clamp(-1.0, 1.0);
    let angle = relative_intersect * config.max_bounce_angle;
    let speed = (speed + config.ball_speed_increment).min(config.ball_speed_max);
    let dir = side.other().direction();

    (
        Vec2::new(dir * speed * angle.cos(), speed * angle.sin()),
        speed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};

    fn setup_world() -> (World, Config, Events) {
        (World::new(), Config::new(), Events::new())
    }

    fn the_ball(world: &World) -> Ball {
        read_ball(world).expect("ball should exist")
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 5.0), Vec2::new(4.0, -3.0));

        check_walls(&mut world, &config, &mut events);

        let ball = the_ball(&world);
        assert_eq!(ball.vel, Vec2::new(4.0, 3.0), "Only vy should flip");
        assert_eq!(ball.pos.y, config.ball_radius, "Ball should sit on the wall");
        assert!(events.wall_hit);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 497.0), Vec2::new(4.0, 3.0));

        check_walls(&mut world, &config, &mut events);

        let ball = the_ball(&world);
        assert_eq!(ball.vel.y, -3.0);
        assert_eq!(ball.pos.y, config.playfield_height - config.ball_radius);
        assert!(events.wall_hit);
    }

    #[test]
    fn test_ball_touching_wall_is_left_alone() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 8.0), Vec2::new(4.0, -3.0));

        check_walls(&mut world, &config, &mut events);

        assert_eq!(the_ball(&world).vel.y, -3.0);
        assert!(!events.wall_hit);
    }

    #[test]
    fn test_centered_hit_on_human_paddle() {
        // 800x500 field, radius 8, paddle 100 tall with its top at 200
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Human, 200.0);
        create_ball(&mut world, Vec2::new(30.0, 250.0), Vec2::new(-5.0, 0.0));

        check_paddles(&mut world, &config, &mut events);

        let ball = the_ball(&world);
        assert!((ball.vel.x - 5.25).abs() < 1e-5, "got vx {}", ball.vel.x);
        assert!(ball.vel.y.abs() < 1e-5);
        assert_eq!(ball.speed, 5.25);
        assert_eq!(ball.pos.x, 12.0 + 12.0 + 8.0 + 0.5, "Ball nudged out of the paddle");
        assert_eq!(events.paddle_hit, Some(Side::Human));
    }

    #[test]
    fn test_ball_collides_with_opponent_paddle() {
        let (mut world, config, mut events) = setup_world();
        let paddle_x = config.paddle_x(Side::Opponent);
        create_paddle(&mut world, &config, Side::Opponent, 200.0);
        create_ball(&mut world, Vec2::new(paddle_x - 4.0, 250.0), Vec2::new(6.0, 1.0));

        check_paddles(&mut world, &config, &mut events);

        let ball = the_ball(&world);
        assert!(ball.vel.x < 0.0, "Ball should head back to the human");
        assert_eq!(ball.pos.x, paddle_x - config.ball_radius - config.bounce_nudge);
        assert_eq!(events.paddle_hit, Some(Side::Opponent));
    }

    #[test]
    fn test_ball_trajectory_affected_by_hit_position() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Human, 200.0);
        create_ball(&mut world, Vec2::new(30.0, 205.0), Vec2::new(-5.0, 0.0));

        check_paddles(&mut world, &config, &mut events);
        assert!(the_ball(&world).vel.y < 0.0, "Top hit should deflect upward");

        world.clear();
        create_paddle(&mut world, &config, Side::Human, 200.0);
        create_ball(&mut world, Vec2::new(30.0, 295.0), Vec2::new(-5.0, 0.0));

        check_paddles(&mut world, &config, &mut events);
        assert!(the_ball(&world).vel.y > 0.0, "Bottom hit should deflect downward");
    }

    #[test]
    fn test_ball_speed_caps_at_max() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Human, 200.0);
        create_ball(&mut world, Vec2::new(30.0, 250.0), Vec2::new(-11.9, 0.0));

        check_paddles(&mut world, &config, &mut events);

        assert_eq!(the_ball(&world).speed, config.ball_speed_max);
    }

    #[test]
    fn test_ball_outside_band_is_not_tested() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Human, 200.0);
        create_ball(&mut world, Vec2::new(200.0, 250.0), Vec2::new(-5.0, 0.0));

        check_paddles(&mut world, &config, &mut events);

        assert_eq!(the_ball(&world).vel, Vec2::new(-5.0, 0.0));
        assert_eq!(events.paddle_hit, None);
    }

    #[test]
    fn test_ball_missing_paddle_passes() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Human, 0.0);
        create_ball(&mut world, Vec2::new(20.0, 400.0), Vec2::new(-5.0, 0.0));

        check_paddles(&mut world, &config, &mut events);

        assert_eq!(events.paddle_hit, None);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Human, 200.0);

        check_paddles(&mut world, &config, &mut events);
        check_walls(&mut world, &config, &mut events);

        assert_eq!(events, Events::default());
    }

    #[test]
    fn test_bounce_velocity_preserves_speed_magnitude() {
        let config = Config::new();
        for rel in [-1.0, -0.6, -0.1, 0.0, 0.3, 0.99, 1.0, 1.4] {
            let (vel, speed) = bounce_velocity(rel, 7.0, Side::Opponent, &config);
            assert!((vel.length_squared() - speed * speed).abs() < 1e-3);
            assert!(vel.x < 0.0);
        }
    }

    #[test]
    fn test_bounce_velocity_edge_hit_is_sixty_degrees() {
        let config = Config::new();
        let (vel, speed) = bounce_velocity(1.0, 5.0, Side::Human, &config);
        let angle = vel.y.atan2(vel.x);
        assert!((angle - config.max_bounce_angle).abs() < 1e-5);
        assert_eq!(speed, 5.25);
    }
}
