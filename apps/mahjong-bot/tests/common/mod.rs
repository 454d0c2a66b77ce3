#![allow(dead_code)]

// tests/common/mod.rs
pub mod proptest_prelude;

use mahjong_bot::ai::LowestTilePolicy;
use mahjong_bot::{decide_json, Decision};

// Logging is auto-installed for every test binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    bot_test_support::logging::init();
}

/// Decide with the deterministic policy, panicking on any engine error.
pub fn decide_lowest(input: &str) -> Decision {
    decide_json(input, &LowestTilePolicy).unwrap_or_else(|e| panic!("decide failed: {e}"))
}

/// Text form of every legal action.
pub fn legal_texts(decision: &Decision) -> Vec<String> {
    decision.legal.iter().map(ToString::to_string).collect()
}
