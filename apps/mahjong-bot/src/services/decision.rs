//! One bot turn: transcript in, one chosen action out.

use tracing::{debug, info};

use crate::ai::BotPolicy;
use crate::domain::{Action, LegalActionGenerator};
use crate::error::EngineError;
use crate::protocol::{ResponseEnvelope, Transcript};

/// Legal actions for the current turn and the one the policy picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub legal: Vec<Action>,
    pub chosen: Action,
}

impl Decision {
    pub fn envelope(&self) -> ResponseEnvelope {
        ResponseEnvelope::from(&self.chosen)
    }
}

/// Replay `transcript`, list the legal actions and let `policy` choose.
///
/// The whole call is one atomic unit: state is rebuilt from the transcript each
/// time and nothing is kept between calls.
pub fn decide(transcript: &Transcript, policy: &dyn BotPolicy) -> Result<Decision, EngineError> {
    let tracker = transcript.replay()?;
    let legal = LegalActionGenerator::new(&tracker, policy).legal_actions();
    debug!(
        obligation = ?tracker.obligation(),
        legal = legal.len(),
        "generated legal actions"
    );
    let chosen = policy.choose_action(&legal)?;
    info!(seat = tracker.seat(), action = %chosen, "chose action");
    Ok(Decision { legal, chosen })
}

/// Parse the judge's JSON input and decide.
pub fn decide_json(input: &str, policy: &dyn BotPolicy) -> Result<Decision, EngineError> {
    let transcript = Transcript::from_json(input)?;
    decide(&transcript, policy)
}
