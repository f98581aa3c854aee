use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::environment::{Environment, Info, StepResult};
use crate::error::{GridNavError, Result};

/// One of the four grid moves, discrete wire encoding 0..4
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Up,    // 0: y + 1
    Down,  // 1: y - 1
    Left,  // 2: x - 1
    Right, // 3: x + 1
}

impl Action {
    pub const COUNT: usize = 4;

    /// (dx, dy) applied by this move
    fn delta(self) -> (i32, i32) {
        match self {
            Action::Up => (0, 1),
            Action::Down => (0, -1),
            Action::Left => (-1, 0),
            Action::Right => (1, 0),
        }
    }
}

impl TryFrom<i64> for Action {
    type Error = GridNavError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Action::Up),
            1 => Ok(Action::Down),
            2 => Ok(Action::Left),
            3 => Ok(Action::Right),
            other => Err(GridNavError::InvalidAction(other)),
        }
    }
}

/// Environment configuration, immutable once the environment is built.
///
/// `start_position = None` draws one uniform cell at construction time and
/// keeps it as the fixed start for the instance lifetime. `seed` makes that
/// draw reproducible; left unset it falls back to OS entropy.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridConfig {
    pub area_width: i32,
    pub area_height: i32,
    pub start_position: Option<[i32; 2]>,
    pub max_steps: usize,
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            area_width: 10,
            area_height: 10,
            start_position: None,
            max_steps: 100,
            seed: None,
        }
    }
}

/// Bounded grid world with a goal in the top-right corner.
///
/// The agent starts at a fixed cell, moves one cell per step, and is clamped
/// to the area. Reaching the goal pays +10 and ends the episode; every other
/// step pays -0.1. The episode also ends when the step budget runs out.
#[derive(Debug)]
pub struct GridNav {
    config: GridConfig,
    start: [i32; 2],
    position: [i32; 2],
    step_count: usize,
    terminated: bool,
}

impl GridNav {
    /// Builds the environment and leaves it ready to step, with the episode
    /// state freshly reset.
    pub fn new(config: GridConfig) -> Result<Self> {
        if config.area_width <= 0 || config.area_height <= 0 {
            return Err(GridNavError::InvalidConfiguration(format!(
                "area dimensions must be positive, got {}x{}",
                config.area_width, config.area_height
            )));
        }

        let start = match config.start_position {
            Some(start) => {
                if start[0] < 0
                    || start[0] >= config.area_width
                    || start[1] < 0
                    || start[1] >= config.area_height
                {
                    return Err(GridNavError::InvalidConfiguration(format!(
                        "start position ({}, {}) lies outside the {}x{} area",
                        start[0], start[1], config.area_width, config.area_height
                    )));
                }
                start
            }
            None => {
                // One draw per instance; reset reuses it verbatim.
                let mut rng = match config.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_os_rng(),
                };
                [
                    rng.random_range(0..config.area_width),
                    rng.random_range(0..config.area_height),
                ]
            }
        };

        Ok(Self {
            config,
            start,
            position: start,
            step_count: 0,
            terminated: false,
        })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Start cell reused by every reset of this instance.
    pub fn start_position(&self) -> [i32; 2] {
        self.start
    }

    /// Goal cell, the corner farthest from the origin.
    pub fn goal(&self) -> [i32; 2] {
        [self.config.area_width - 1, self.config.area_height - 1]
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn reset(&mut self) -> [i32; 2] {
        self.step_count = 0;
        self.position = self.start;
        self.terminated = false;
        self.position
    }

    pub fn step(&mut self, action: &Action) -> Result<StepResult<[i32; 2], f32>> {
        if self.terminated {
            return Err(GridNavError::InvalidState(
                "episode already terminated, call reset first".to_string(),
            ));
        }

        let (dx, dy) = action.delta();

        // Component-wise clamp; a move into a wall is absorbed, not rejected.
        self.position = [
            (self.position[0] + dx).clamp(0, self.config.area_width - 1),
            (self.position[1] + dy).clamp(0, self.config.area_height - 1),
        ];

        let reward = self.reward(self.position);
        // Budget check runs on the pre-increment counter; the counter then
        // advances even on the terminal step.
        let done = self.step_count >= self.config.max_steps || self.position == self.goal();
        self.step_count += 1;
        self.terminated = done;

        Ok(StepResult {
            next_state: self.position,
            reward,
            done,
            info: Info::new(),
        })
    }

    /// Reward table, evaluated on the stored position: goal pays +10, an
    /// out-of-area position would pay -1, anything else pays -0.1. Clamping
    /// runs before this is called, so the -1 branch can never fire; the check
    /// is kept in this exact order on purpose.
    fn reward(&self, position: [i32; 2]) -> f32 {
        if position == self.goal() {
            10.0
        } else if position[0] < 0
            || position[0] >= self.config.area_width
            || position[1] < 0
            || position[1] >= self.config.area_height
        {
            -1.0
        } else {
            -0.1
        }
    }
}

impl Environment for GridNav {
    type State = [i32; 2];
    type Action = Action;
    type Reward = f32;

    fn reset(&mut self) -> Self::State {
        self.reset()
    }

    fn step(&mut self, action: &Self::Action) -> Result<StepResult<Self::State, Self::Reward>> {
        self.step(action)
    }

    fn current_state(&self) -> Self::State {
        self.position
    }

    fn action_space(&self) -> usize {
        Action::COUNT // Up, Down, Left, Right
    }

    fn state_dim(&self) -> usize {
        2 // [x, y]
    }
}
