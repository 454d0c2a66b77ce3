//! Builder for judge transcript documents.

use serde_json::{json, Map, Value};

/// Assembles the `{"requests": [...], "responses": [...]}` document one message
/// at a time. Earlier responses are filled with `PASS`; the bot never reads them.
///
/// ```ignore
/// let input = TranscriptBuilder::new(1, "W1 W2 B3 B3")
///     .witnessed(0, "PLAY W3", Some("CHI"))
///     .to_json();
/// ```
#[derive(Debug, Clone)]
pub struct TranscriptBuilder {
    requests: Vec<Value>,
    responses: Vec<Value>,
}

impl TranscriptBuilder {
    /// Start with the seat record and the starting hand.
    pub fn new(seat: u8, hand: &str) -> Self {
        Self {
            requests: vec![
                json!({ "state": format!("0 {seat}") }),
                json!({ "handTiles": format!("1 {hand}") }),
            ],
            responses: vec![json!("PASS")],
        }
    }

    /// The controlled seat drew `tile`; `validact` is sent as `null`.
    pub fn self_draw(self, tile: &str) -> Self {
        self.push(format!("2 {tile}"), Some(None))
    }

    /// `seat` was seen taking `action`. `offer` becomes `validact`.
    pub fn witnessed(self, seat: u8, action: &str, offer: Option<&str>) -> Self {
        self.push(format!("3 {seat} {action}"), Some(offer))
    }

    /// Same as [`witnessed`](Self::witnessed) but without any `validact` key.
    pub fn witnessed_without_offer(self, seat: u8, action: &str) -> Self {
        self.push(format!("3 {seat} {action}"), None)
    }

    /// Append a raw request message.
    pub fn raw(self, message: &str, validact: Option<Option<&str>>) -> Self {
        self.push(message.to_string(), validact)
    }

    pub fn to_value(&self) -> Value {
        json!({ "requests": self.requests, "responses": self.responses })
    }

    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }

    fn push(mut self, message: String, validact: Option<Option<&str>>) -> Self {
        let mut request = Map::new();
        request.insert("state".into(), Value::String(message));
        if let Some(offer) = validact {
            let value = offer.map_or(Value::Null, |o| Value::String(o.to_string()));
            request.insert("validact".into(), value);
        }
        // The bot answered the previous request before this one arrived.
        self.responses.push(json!("PASS"));
        self.requests.push(Value::Object(request));
        self
    }
}
