//! Full-information hand of the controlled seat.

use super::melds::Meld;
use super::player_view::PlayerPublicView;
use super::rules::Seat;
use super::tiles_types::Tile;
use crate::error::EngineError;

/// Concealed tiles, revealed melds, discards and riichi flag of one seat.
///
/// Only the controlled seat has a `HandState`; other seats are tracked through
/// [`PlayerPublicView`]. Concealed tiles keep arrival order; use
/// [`sorted_view`](Self::sorted_view) before scanning for melds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandState {
    concealed: Vec<Tile>,
    revealed: Vec<Meld>,
    discards: Vec<Tile>,
    riichi: bool,
}

impl HandState {
    pub fn new(starting_tiles: Vec<Tile>) -> Self {
        Self {
            concealed: starting_tiles,
            ..Self::default()
        }
    }

    pub fn concealed(&self) -> &[Tile] {
        &self.concealed
    }

    pub fn revealed(&self) -> &[Meld] {
        &self.revealed
    }

    pub fn discards(&self) -> &[Tile] {
        &self.discards
    }

    pub fn is_riichi(&self) -> bool {
        self.riichi
    }

    /// Concealed tiles in tile order.
    pub fn sorted_view(&self) -> Vec<Tile> {
        let mut tiles = self.concealed.clone();
        tiles.sort();
        tiles
    }

    pub fn draw(&mut self, tile: Tile) {
        self.concealed.push(tile);
    }

    /// Discard `tile` from the concealed set.
    pub fn play_out(&mut self, tile: Tile) -> Result<(), EngineError> {
        remove_first(&mut self.concealed, tile)?;
        self.discards.push(tile);
        Ok(())
    }

    /// Expose a claimed meld. Every member except the taken (first) one must be
    /// concealed; on failure the hand is left untouched.
    pub fn reveal_meld(&mut self, meld: Meld) -> Result<(), EngineError> {
        let mut remaining = self.concealed.clone();
        for &tile in meld.from_hand() {
            remove_first(&mut remaining, tile)?;
        }
        self.concealed = remaining;
        self.revealed.push(meld);
        Ok(())
    }

    pub fn declare_riichi(&mut self) {
        self.riichi = true;
    }

    /// Remove the most recent discard equal to `tile` (claimed by another seat).
    pub fn take_discard(&mut self, tile: Tile) -> bool {
        take_last(&mut self.discards, tile)
    }

    /// What the other seats can see of this hand.
    pub fn public_view(&self, seat: Seat) -> PlayerPublicView {
        PlayerPublicView::from_parts(seat, self.discards.clone(), self.revealed.clone(), self.riichi)
    }
}

fn remove_first(tiles: &mut Vec<Tile>, tile: Tile) -> Result<(), EngineError> {
    let idx = tiles
        .iter()
        .position(|t| *t == tile)
        .ok_or(EngineError::TileNotInHand { tile })?;
    tiles.remove(idx);
    Ok(())
}

pub(crate) fn take_last(tiles: &mut Vec<Tile>, tile: Tile) -> bool {
    match tiles.iter().rposition(|t| *t == tile) {
        Some(idx) => {
            tiles.remove(idx);
            true
        }
        None => false,
    }
}
