pub mod decision;

pub use decision::{decide, decide_json, Decision};
