//! Deterministic policy: lowest tile, first action.

use super::trait_def::{BotPolicy, PolicyError};
use crate::domain::{Action, Tile};

/// Throws the lowest candidate tile and emits the first legal action.
///
/// Useful wherever a run has to be reproducible without carrying a seed around.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowestTilePolicy;

impl LowestTilePolicy {
    pub const NAME: &'static str = "lowest";
    pub const VERSION: &'static str = "1.0.0";
}

impl BotPolicy for LowestTilePolicy {
    fn choose_discard(&self, candidates: &[Tile]) -> Result<Tile, PolicyError> {
        candidates
            .iter()
            .min()
            .copied()
            .ok_or(PolicyError::NoCandidates("discard"))
    }

    fn choose_action(&self, legal: &[Action]) -> Result<Action, PolicyError> {
        legal
            .first()
            .cloned()
            .ok_or(PolicyError::NoCandidates("action"))
    }
}
