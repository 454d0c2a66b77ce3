//! Tile parsing and formatting for the two-character wire tokens (e.g., "W3", "Z7", "B0")

use std::fmt;
use std::str::FromStr;

use super::tiles_types::{Suit, Tile};
use crate::error::EngineError;

impl FromStr for Tile {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(suit_ch), Some(rank_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(EngineError::malformed_tile(s));
        };
        let suit = Suit::from_letter(suit_ch).ok_or_else(|| EngineError::malformed_tile(s))?;
        let rank = rank_ch
            .to_digit(10)
            .ok_or_else(|| EngineError::malformed_tile(s))? as u8;
        // Rank 0 is the red five; anything else must sit inside the suit's range.
        let tile = if rank == 0 {
            Tile::red_five(suit)
        } else {
            Tile::new(suit, rank)
        };
        tile.map_err(|_| EngineError::malformed_tile(s))
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_bonus() {
            write!(f, "{}0", self.suit().letter())
        } else {
            write!(f, "{}{}", self.suit().letter(), self.rank())
        }
    }
}

/// Parse tile tokens (e.g., `["W1", "B0"]`). Fails on the first malformed token.
pub fn try_parse_tiles<I, S>(tokens: I) -> Result<Vec<Tile>, EngineError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Tile>())
        .collect()
}

/// Space-joined wire text for a tile sequence.
pub fn format_tiles(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(Tile::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
