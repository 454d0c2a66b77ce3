use serde::{Deserialize, Serialize};

use crate::domain::Action;

/// The single line the bot prints: `{"response": "<action text>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub response: String,
}

impl From<&Action> for ResponseEnvelope {
    fn from(action: &Action) -> Self {
        Self {
            response: action.to_string(),
        }
    }
}
