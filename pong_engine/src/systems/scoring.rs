use crate::map::Playfield;
use crate::{Ball, Config, Events, GameRng, Score, ScoreEvent, Side};
use hecs::World;

/// Check if the ball fully left the playfield past a paddle (scoring).
///
/// On a point the score is incremented, the event is recorded and the ball
/// is relaunched from the center toward the side chosen by the serve rule.
pub fn check_scoring(
    world: &mut World,
    field: &Playfield,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<ScoreEvent> {
    let radius = config.ball_radius;
    let mut scored = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x + radius < 0.0 {
            Side::Opponent
        } else if ball.pos.x - radius > field.width {
            Side::Human
        } else {
            continue;
        };

        score.increment(scorer);
        let event = ScoreEvent { scorer };
        events.scored = Some(event);
        scored = Some(event);

        let receiver = config.serve_rule.receiver(scorer);
        ball.reset(field.ball_spawn(), config, Some(receiver), rng);
    }

    scored
}
