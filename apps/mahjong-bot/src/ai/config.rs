//! Policy configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::registry;
use super::BotPolicy;
use crate::error::EngineError;

/// Which policy to run and how to seed it.
///
/// Can be built from CLI flags or from a JSON blob such as
/// `{"policy": "random", "seed": 12345}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Registered policy name (see [`registry::registered_policies`]).
    #[serde(default = "default_policy")]
    pub policy: String,

    /// Optional RNG seed for reproducible choices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_policy() -> String {
    super::RandomPolicy::NAME.to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            policy: default_policy(),
            seed: None,
        }
    }
}

impl BotConfig {
    /// Read a config from optional JSON, falling back to defaults when the value
    /// is missing or does not match the schema.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        config
            .and_then(|json| serde_json::from_value(json.clone()).ok())
            .unwrap_or_default()
    }

    /// Apply values given on the command line over this config.
    pub fn with_overrides(mut self, policy: Option<String>, seed: Option<u64>) -> Self {
        if let Some(policy) = policy {
            self.policy = policy;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Instantiate the configured policy.
    pub fn build_policy(&self) -> Result<Box<dyn BotPolicy>, EngineError> {
        let factory = registry::by_name(&self.policy).ok_or_else(|| {
            EngineError::config(format!("unknown policy {:?}", self.policy))
        })?;
        Ok((factory.make)(self.seed))
    }
}
