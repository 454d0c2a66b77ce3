//! How to register a policy
//!
//! 1) Implement `BotPolicy` for your type in its module.
//! 2) Add a `PolicyFactory` entry to the static list with a stable `name` and `version`.
//! 3) Same seed ⇒ same choices, for policies that use randomness.

use super::{BotPolicy, LowestTilePolicy, RandomPolicy};

/// Factory definition for constructing policies by name.
pub struct PolicyFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn BotPolicy>,
}

static POLICY_FACTORIES: &[PolicyFactory] = &[
    PolicyFactory {
        name: RandomPolicy::NAME,
        version: RandomPolicy::VERSION,
        make: make_random,
    },
    PolicyFactory {
        name: LowestTilePolicy::NAME,
        version: LowestTilePolicy::VERSION,
        make: make_lowest,
    },
];

/// Returns the statically registered policy factories.
pub fn registered_policies() -> &'static [PolicyFactory] {
    POLICY_FACTORIES
}

/// Finds a registered policy factory by its name.
pub fn by_name(name: &str) -> Option<&'static PolicyFactory> {
    registered_policies()
        .iter()
        .find(|factory| factory.name == name)
}

fn make_random(seed: Option<u64>) -> Box<dyn BotPolicy> {
    Box::new(RandomPolicy::new(seed))
}

fn make_lowest(_seed: Option<u64>) -> Box<dyn BotPolicy> {
    Box::new(LowestTilePolicy)
}
