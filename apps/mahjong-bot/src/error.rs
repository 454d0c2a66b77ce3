use thiserror::Error;

use crate::domain::{OfferedKind, Tile};

/// Central error type for the decision engine.
///
/// Every variant maps to a stable SCREAMING_SNAKE code via [`EngineError::code`],
/// which is what shows up in structured logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Malformed tile: {token:?}")]
    MalformedTile { token: String },
    #[error("Malformed meld: {detail}")]
    MalformedMeld { detail: String },
    #[error("Tile not in hand: {tile}")]
    TileNotInHand { tile: Tile },
    #[error("Unrecognized action kind: {token:?}")]
    UnrecognizedActionKind { token: String },
    #[error("Malformed transcript: {detail}")]
    MalformedTranscript { detail: String },
    #[error("No legal meld for offered kind {kind}")]
    NoLegalMeldForOfferedKind { kind: OfferedKind, tile: Option<Tile> },
    #[error("Policy error: {detail}")]
    Policy { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl EngineError {
    /// Stable error code for logs and test assertions.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::MalformedTile { .. } => "MALFORMED_TILE",
            EngineError::MalformedMeld { .. } => "MALFORMED_MELD",
            EngineError::TileNotInHand { .. } => "TILE_NOT_IN_HAND",
            EngineError::UnrecognizedActionKind { .. } => "UNRECOGNIZED_ACTION_KIND",
            EngineError::MalformedTranscript { .. } => "MALFORMED_TRANSCRIPT",
            EngineError::NoLegalMeldForOfferedKind { .. } => "NO_LEGAL_MELD_FOR_OFFERED_KIND",
            EngineError::Policy { .. } => "POLICY_ERROR",
            EngineError::Config { .. } => "CONFIG_ERROR",
        }
    }

    /// Whether the error aborts the invocation. Only the claim fallback is recoverable.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, EngineError::NoLegalMeldForOfferedKind { .. })
    }

    pub fn malformed_tile(token: impl Into<String>) -> Self {
        Self::MalformedTile {
            token: token.into(),
        }
    }

    pub fn malformed_meld(detail: impl Into<String>) -> Self {
        Self::MalformedMeld {
            detail: detail.into(),
        }
    }

    pub fn unrecognized_action(token: impl Into<String>) -> Self {
        Self::UnrecognizedActionKind {
            token: token.into(),
        }
    }

    pub fn transcript(detail: impl Into<String>) -> Self {
        Self::MalformedTranscript {
            detail: detail.into(),
        }
    }

    pub fn policy(detail: impl Into<String>) -> Self {
        Self::Policy {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}
