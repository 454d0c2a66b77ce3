//! Decision policy trait definition.

use thiserror::Error;

use crate::domain::{Action, Tile};
use crate::error::EngineError;

/// Errors that can occur while a policy makes a choice.
#[derive(Error, Debug)]
pub enum PolicyError {
    /// Nothing to choose from
    #[error("no candidates: {0}")]
    NoCandidates(&'static str),
    /// The policy encountered an internal error
    #[error("policy internal error: {0}")]
    Internal(String),
}

impl From<PolicyError> for EngineError {
    fn from(err: PolicyError) -> Self {
        EngineError::policy(err.to_string())
    }
}

/// Pluggable choices the engine delegates.
///
/// The rule engine decides *what is legal*; a policy only picks among the options
/// it is handed. Implementations must choose from the given slice and never
/// synthesize values of their own.
pub trait BotPolicy: Send + Sync {
    /// Choose the tile to throw after claiming a discard.
    ///
    /// `candidates` is never empty when called by the engine.
    fn choose_discard(&self, candidates: &[Tile]) -> Result<Tile, PolicyError>;

    /// Choose the action to emit from the legal set.
    fn choose_action(&self, legal: &[Action]) -> Result<Action, PolicyError>;
}
