//! Judge transcript: the `{"requests": [...], "responses": [...]}` document the
//! bot receives on every turn.
//!
//! Each request carries one whitespace-separated message in `state` (or
//! `handTiles`):
//!
//! | code | message                         | meaning                      |
//! |------|---------------------------------|------------------------------|
//! | `0`  | `0 <seat> ...`                  | controlled seat index        |
//! | `1`  | `1 <tile> <tile> ...`           | starting hand                |
//! | `2`  | `2 <tile>`                      | controlled seat drew a tile  |
//! | `3`  | `3 <seat> <ACTION> <tiles...>`  | any seat was seen acting     |
//!
//! The first two requests are always the seat and the hand. `validact` on a
//! request lists the reactions the server will accept for it: a missing key and
//! `null` are kept apart (see [`OfferedActions`]).

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::domain::rules::seat_from_index;
use crate::domain::{try_parse_tiles, Action, Event, OfferedActions, Seat, Tile, TurnTracker};
use crate::error::EngineError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranscriptDocument {
    #[serde(default)]
    pub requests: Vec<RawRequest>,
    /// Earlier answers of this bot. State is rebuilt from requests alone.
    #[serde(default)]
    pub responses: Vec<JsonValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hand_tiles: Option<String>,
    /// Outer `None`: key missing. Inner `None`: explicit `null`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub validact: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dora_indicators: Option<String>,
}

impl RawRequest {
    fn message(&self) -> Option<&str> {
        self.state.as_deref().or(self.hand_tiles.as_deref())
    }

    fn offered(&self) -> Result<OfferedActions, EngineError> {
        match &self.validact {
            None => Ok(OfferedActions::Absent),
            Some(raw) => OfferedActions::from_validact(raw.as_deref()),
        }
    }
}

/// An event together with the offer attached to its request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEvent {
    pub event: Event,
    pub offered: OfferedActions,
}

/// A fully parsed transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub seat: Seat,
    pub starting_hand: Vec<Tile>,
    pub events: Vec<TranscriptEvent>,
}

impl Transcript {
    /// Parse the judge's JSON document. Any malformed record fails the whole parse.
    pub fn from_json(input: &str) -> Result<Self, EngineError> {
        let document: TranscriptDocument = serde_json::from_str(input)
            .map_err(|e| EngineError::transcript(format!("invalid JSON: {e}")))?;
        Self::from_document(&document)
    }

    pub fn from_document(document: &TranscriptDocument) -> Result<Self, EngineError> {
        let mut requests = document.requests.iter().enumerate();

        let (_, seat_request) = requests
            .next()
            .ok_or_else(|| EngineError::transcript("missing seat record"))?;
        let seat = parse_seat_record(&tokens_of(0, seat_request)?)?;

        let (_, hand_request) = requests
            .next()
            .ok_or_else(|| EngineError::transcript("missing starting hand record"))?;
        let hand_tokens = tokens_of(1, hand_request)?;
        if hand_tokens[0] != "1" {
            return Err(EngineError::transcript("second request is not a hand record"));
        }
        let starting_hand = try_parse_tiles(hand_tokens.iter().skip(1))?;

        let events = requests
            .map(|(idx, request)| -> Result<TranscriptEvent, EngineError> {
                let event = parse_event(&tokens_of(idx, request)?)?;
                Ok(TranscriptEvent {
                    event,
                    offered: request.offered()?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            seat,
            hand_size = starting_hand.len(),
            events = events.len(),
            "parsed transcript"
        );
        Ok(Self {
            seat,
            starting_hand,
            events,
        })
    }

    /// Rebuild the turn state from scratch by applying every event in order.
    pub fn replay(&self) -> Result<TurnTracker, EngineError> {
        let mut tracker = TurnTracker::new(self.seat, self.starting_hand.clone())?;
        for entry in &self.events {
            tracker.apply(entry.event.clone(), entry.offered.clone())?;
        }
        Ok(tracker)
    }
}

fn tokens_of(idx: usize, request: &RawRequest) -> Result<Vec<&str>, EngineError> {
    let message = request
        .message()
        .ok_or_else(|| EngineError::transcript(format!("request {idx} has no message")))?;
    let tokens: Vec<&str> = message.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(EngineError::transcript(format!("request {idx} is empty")));
    }
    Ok(tokens)
}

fn parse_seat_record(tokens: &[&str]) -> Result<Seat, EngineError> {
    let ["0", raw, ..] = tokens else {
        return Err(EngineError::transcript("first request is not a seat record"));
    };
    raw.parse::<u64>()
        .ok()
        .and_then(seat_from_index)
        .ok_or_else(|| EngineError::transcript(format!("invalid seat {raw:?}")))
}

fn parse_event(tokens: &[&str]) -> Result<Event, EngineError> {
    match tokens {
        ["2", tile] => Ok(Event::SelfDraw(tile.parse()?)),
        ["3", seat, action @ ..] => {
            let seat = seat
                .parse::<u64>()
                .ok()
                .and_then(seat_from_index)
                .ok_or_else(|| EngineError::transcript(format!("invalid seat {seat:?}")))?;
            Ok(Event::Witnessed {
                seat,
                action: Action::from_tokens(action)?,
            })
        }
        _ => Err(EngineError::transcript(format!(
            "unrecognized message {:?}",
            tokens.join(" ")
        ))),
    }
}
