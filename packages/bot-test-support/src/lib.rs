//! Bot test support utilities
//!
//! Shared by the integration tests of `mahjong-bot`: one-time logging setup and
//! a builder for judge transcripts.

pub mod logging;
pub mod transcript;

pub use transcript::TranscriptBuilder;
