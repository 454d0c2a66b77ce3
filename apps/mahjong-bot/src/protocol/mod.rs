//! Wire formats exchanged with the judge.

pub mod response;
pub mod transcript;

pub use response::ResponseEnvelope;
pub use transcript::{RawRequest, Transcript, TranscriptDocument, TranscriptEvent};
