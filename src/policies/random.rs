use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::environments::grid_nav::Action;
use crate::policy::Policy;

/// Uniform random policy over the four grid moves.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded variant for reproducible rollouts.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Policy<S, Action> for RandomPolicy {
    fn select_action(&mut self, _state: &S) -> Action {
        match self.rng.random_range(0..Action::COUNT) {
            0 => Action::Up,
            1 => Action::Down,
            2 => Action::Left,
            _ => Action::Right,
        }
    }
}
