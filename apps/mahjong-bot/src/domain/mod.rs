//! Domain layer: pure rule-engine types and helpers.

pub mod actions;
pub mod fixtures;
pub mod hand;
pub mod legal;
pub mod meld_finder;
pub mod melds;
pub mod player_view;
pub mod rules;
pub mod tiles_parsing;
pub mod tiles_serde;
pub mod tiles_types;
pub mod turn;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_claims;
#[cfg(test)]
mod tests_legal_actions;
#[cfg(test)]
mod tests_props_meld_finder;

// Re-exports for ergonomics
pub use actions::{Action, ActionKind, ClaimKind, OfferedActions, OfferedKind};
pub use hand::HandState;
pub use legal::{reaction_action, try_claim, LegalActionGenerator};
pub use meld_finder::{find_melds, MeldSpan};
pub use melds::{Meld, MeldKind};
pub use player_view::PlayerPublicView;
pub use rules::{Seat, SEATS};
pub use tiles_parsing::{format_tiles, try_parse_tiles};
pub use tiles_types::{Suit, Tile};
pub use turn::{Event, Obligation, TurnContext, TurnTracker};
