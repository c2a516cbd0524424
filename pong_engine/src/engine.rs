use glam::Vec2;
use hecs::{Entity, World};
use tracing::{debug, info};

use crate::map::Playfield;
use crate::policy::{OpponentPolicy, TrackingPolicy};
use crate::systems::*;
use crate::{
    create_paddle, Ball, Config, ConfigError, Events, GameRng, InputSample, Paddle, PaddleIntent,
    Score, ScoreEvent, Side, Snapshot, Time,
};

/// Everything the simulation owns. Read-only outside the engine.
pub struct EngineState {
    pub(crate) world: World,
    pub(crate) human: Entity,
    pub(crate) opponent: Entity,
    pub(crate) ball: Entity,
    pub(crate) score: Score,
    pub(crate) time: Time,
    pub(crate) events: Events,
    pub(crate) paused: bool,
}

impl EngineState {
    pub fn paddle(&self, side: Side) -> Paddle {
        let entity = match side {
            Side::Human => self.human,
            Side::Opponent => self.opponent,
        };
        // Paddles and ball are spawned once and never despawned
        debug_assert!(self.world.contains(entity), "{side:?} paddle missing");
        self.world
            .get::<&Paddle>(entity)
            .map(|paddle| *paddle)
            .unwrap_or_else(|_| Paddle::new(side, 0.0, 0.0, 0.0))
    }

    /// Movement direction each paddle took on the last step
    pub fn paddle_intent(&self, side: Side) -> PaddleIntent {
        let entity = match side {
            Side::Human => self.human,
            Side::Opponent => self.opponent,
        };
        self.world
            .get::<&PaddleIntent>(entity)
            .map(|intent| *intent)
            .unwrap_or_default()
    }

    pub fn ball(&self) -> Ball {
        debug_assert!(self.world.contains(self.ball), "ball missing");
        self.world
            .get::<&Ball>(self.ball)
            .map(|ball| *ball)
            .unwrap_or_else(|_| Ball::new(Vec2::ZERO, Vec2::ZERO))
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn time(&self) -> Time {
        self.time
    }

    /// Events of the last unpaused step
    pub fn events(&self) -> Events {
        self.events
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

/// Owns the game state and advances it one step per host frame
pub struct SimulationEngine {
    state: EngineState,
    config: Config,
    field: Playfield,
    rng: GameRng,
    policy: Box<dyn OpponentPolicy>,
}

impl SimulationEngine {
    /// Build an engine with both paddles centered and the ball served toward a random side
    pub fn new(config: Config, mut rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let field = Playfield::new(&config);
        let mut world = World::new();

        let paddle_y = field.centered_top(config.paddle_height);
        let human = create_paddle(&mut world, &config, Side::Human, paddle_y);
        let opponent = create_paddle(&mut world, &config, Side::Opponent, paddle_y);

        let mut ball = Ball::new(field.ball_spawn(), Vec2::ZERO);
        ball.reset(field.ball_spawn(), &config, None, &mut rng);
        let ball = world.spawn((ball,));

        info!(
            width = field.width,
            height = field.height,
            serve_rule = ?config.serve_rule,
            "simulation engine ready"
        );

        Ok(Self {
            state: EngineState {
                world,
                human,
                opponent,
                ball,
                score: Score::new(),
                time: Time::new(),
                events: Events::new(),
                paused: false,
            },
            config,
            field,
            rng,
            policy: Box::new(TrackingPolicy),
        })
    }

    /// Default configuration with a seeded RNG
    pub fn with_seed(seed: u64) -> Result<Self, ConfigError> {
        Self::new(Config::default(), GameRng::new(seed))
    }

    /// Replace the opponent's control policy
    pub fn with_policy(mut self, policy: impl OpponentPolicy + 'static) -> Self {
        debug!(policy = policy.name(), "opponent policy installed");
        self.policy = Box::new(policy);
        self
    }

    /// Advance the simulation by one step.
    ///
    /// Motion is a fixed displacement per step; `elapsed_seconds` is only
    /// accumulated into [`Time`]. Does nothing while paused.
    pub fn step(&mut self, elapsed_seconds: f32, input: InputSample) -> Option<ScoreEvent> {
        if self.state.paused {
            return None;
        }

        let state = &mut self.state;
        state.events.clear();
        state.time.advance(elapsed_seconds);

        // 1. Human paddle from input
        apply_human_input(&mut state.world, &input, &self.config);

        // 2. Opponent paddle from policy
        move_opponent(&mut state.world, &mut *self.policy, &self.config);

        // 3. Move ball
        move_ball(&mut state.world);

        // 4. Walls, then paddles
        check_walls(&mut state.world, &self.config, &mut state.events);
        check_paddles(&mut state.world, &self.config, &mut state.events);

        // 5. Ball left the field
        let scored = check_scoring(
            &mut state.world,
            &self.field,
            &self.config,
            &mut state.score,
            &mut state.events,
            &mut self.rng,
        );

        if let Some(event) = scored {
            self.policy.reset();
            info!(
                scorer = event.scorer.label(),
                human = state.score.human,
                opponent = state.score.opponent,
                tick = state.time.tick,
                "point scored"
            );
        }

        scored
    }

    /// Re-center the ball and serve it toward `toward` (random when `None`).
    /// Scores and the pause flag are untouched.
    pub fn reset(&mut self, toward: Option<Side>) {
        let center = self.field.ball_spawn();
        for (_entity, ball) in self.state.world.query_mut::<&mut Ball>() {
            ball.reset(center, &self.config, toward, &mut self.rng);
        }
        self.policy.reset();
        debug!(toward = ?toward, "ball reset");
    }

    /// Zero both scores and serve a fresh ball
    pub fn request_reset(&mut self) {
        self.state.score.reset();
        self.reset(None);
        info!("scores reset");
    }

    /// Flip the pause flag and return the new value
    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.state.paused);
        self.state.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.state.paused != paused {
            self.state.paused = paused;
            info!(paused, "pause changed");
        }
    }

    /// Place the ball directly; speed becomes the velocity's magnitude.
    /// Meant for host debug tooling and scenario tests.
    pub fn set_ball(&mut self, pos: Vec2, vel: Vec2) {
        if let Ok(mut ball) = self.state.world.get::<&mut Ball>(self.state.ball) {
            *ball = Ball::new(pos, vel);
        }
    }

    /// Place a paddle's top edge directly (clamped to the playfield)
    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        let entity = match side {
            Side::Human => self.state.human,
            Side::Opponent => self.state.opponent,
        };
        if !y.is_finite() {
            return;
        }
        if let Ok(mut paddle) = self.state.world.get::<&mut Paddle>(entity) {
            paddle.y = self.config.clamp_paddle_y(y);
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        self.state.paddle(side)
    }

    pub fn ball(&self) -> Ball {
        self.state.ball()
    }

    pub fn score(&self) -> Score {
        self.state.score
    }

    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    pub fn time(&self) -> Time {
        self.state.time
    }

    pub fn events(&self) -> Events {
        self.state.events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }
}
