use pong_engine::{InputSample, InputTracker, Key, SimulationEngine, Side};

/// Scripted human player: holds the up or down key while the ball is
/// more than a quarter paddle away from the paddle center.
#[derive(Debug, Default)]
pub struct Autopilot {
    tracker: InputTracker,
    held: Option<Key>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, engine: &SimulationEngine) -> InputSample {
        let config = engine.config();
        let paddle = engine.paddle(Side::Human);
        let gap = engine.ball().pos.y - paddle.center_y(config.paddle_height);
        let reach = config.paddle_height / 4.0;

        let wanted = if gap < -reach {
            Some(Key::Up)
        } else if gap > reach {
            Some(Key::Down)
        } else {
            None
        };

        if wanted != self.held {
            if let Some(key) = self.held {
                self.tracker.key_up(key);
            }
            if let Some(key) = wanted {
                self.tracker.key_down(key);
            }
            self.held = wanted;
        }

        self.tracker.sample()
    }
}
