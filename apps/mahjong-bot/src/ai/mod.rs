//! Decision policies - choices the rule engine delegates.
//!
//! This module provides:
//! - `BotPolicy` trait for discard and action selection
//! - `RandomPolicy`: uniform random choices (seedable for tests)
//! - `LowestTilePolicy`: deterministic choices
//! - A static registry and `BotConfig` to build policies by name

pub mod config;
mod lowest;
mod random;
pub mod registry;
mod trait_def;

pub use config::BotConfig;
pub use lowest::LowestTilePolicy;
pub use random::RandomPolicy;
pub use trait_def::{BotPolicy, PolicyError};
