//! Random policy - uniform choice among legal options.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{BotPolicy, PolicyError};
use crate::domain::{Action, Tile};

/// Picks uniformly at random from whatever it is offered.
///
/// Seed it for reproducible games and tests; without a seed it draws from OS
/// entropy.
pub struct RandomPolicy {
    /// `BotPolicy` takes `&self`, so the RNG sits behind a lock.
    rng: Mutex<StdRng>,
}

impl RandomPolicy {
    pub const NAME: &'static str = "random";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn pick<T: Clone>(&self, options: &[T], what: &'static str) -> Result<T, PolicyError> {
        if options.is_empty() {
            return Err(PolicyError::NoCandidates(what));
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| PolicyError::Internal(format!("RNG lock poisoned: {e}")))?;
        options
            .choose(&mut *rng)
            .cloned()
            .ok_or(PolicyError::NoCandidates(what))
    }
}

impl BotPolicy for RandomPolicy {
    fn choose_discard(&self, candidates: &[Tile]) -> Result<Tile, PolicyError> {
        self.pick(candidates, "discard")
    }

    fn choose_action(&self, legal: &[Action]) -> Result<Action, PolicyError> {
        self.pick(legal, "action")
    }
}
