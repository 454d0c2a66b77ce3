//! Public view of a seat - what every player at the table can see.

use super::hand::take_last;
use super::melds::Meld;
use super::rules::Seat;
use super::tiles_types::Tile;

/// Discards, revealed melds and riichi flag of one seat. Never holds concealed
/// tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerPublicView {
    seat: Seat,
    discards: Vec<Tile>,
    revealed: Vec<Meld>,
    riichi: bool,
}

impl PlayerPublicView {
    pub fn new(seat: Seat) -> Self {
        Self::from_parts(seat, Vec::new(), Vec::new(), false)
    }

    pub(crate) fn from_parts(
        seat: Seat,
        discards: Vec<Tile>,
        revealed: Vec<Meld>,
        riichi: bool,
    ) -> Self {
        Self {
            seat,
            discards,
            revealed,
            riichi,
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn discards(&self) -> &[Tile] {
        &self.discards
    }

    pub fn revealed(&self) -> &[Meld] {
        &self.revealed
    }

    pub fn is_riichi(&self) -> bool {
        self.riichi
    }

    pub(crate) fn record_discard(&mut self, tile: Tile) {
        self.discards.push(tile);
    }

    pub(crate) fn reveal_meld(&mut self, meld: Meld) {
        self.revealed.push(meld);
    }

    pub(crate) fn declare_riichi(&mut self) {
        self.riichi = true;
    }

    /// Remove the most recent discard equal to `tile` (claimed by another seat).
    pub(crate) fn take_discard(&mut self, tile: Tile) -> bool {
        take_last(&mut self.discards, tile)
    }
}
