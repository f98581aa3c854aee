use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Per-step diagnostic data. Reserved for future use; every environment in
/// this crate currently returns it empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Info {
    entries: Vec<(String, f64)>,
}

impl Info {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<K: Into<String>>(&mut self, key: K, value: f64) {
        let key = key.into();
        if let Some((_, v)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            *v = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StepResult<S, R> {
    pub next_state: S,
    pub reward: R,
    pub done: bool,
    pub info: Info,
}

pub trait Environment {
    type State;
    type Action;
    type Reward: Copy + Into<f32>;

    fn reset(&mut self) -> Self::State;
    fn step(&mut self, action: &Self::Action) -> Result<StepResult<Self::State, Self::Reward>>; // (next_state, reward, if_done, info)

    /// Render hook. Environments without a visual form leave it a no-op.
    fn render(&self) {}

    /// Current state snapshot, copied out
    fn current_state(&self) -> Self::State;

    /// Action space cardinality
    fn action_space(&self) -> usize;

    /// State vector dimension
    fn state_dim(&self) -> usize;
}
