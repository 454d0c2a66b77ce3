//! Melds: runs, triplets and quads.

use std::fmt;

use super::tiles_parsing::format_tiles;
use super::tiles_types::Tile;
use crate::error::EngineError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MeldKind {
    /// Three consecutive ranks of one numbered suit.
    Run,
    /// Three equal tiles.
    Triplet,
    /// Four equal tiles.
    Quad,
}

/// Classify a group of tiles regardless of member order.
pub fn classify(tiles: &[Tile]) -> Option<MeldKind> {
    let mut sorted = tiles.to_vec();
    sorted.sort();
    match sorted.as_slice() {
        [a, b, c] if a == b && b == c => Some(MeldKind::Triplet),
        [a, b, c] if b.follows(a) && c.follows(b) => Some(MeldKind::Run),
        [a, rest @ ..] if rest.len() == 3 && rest.iter().all(|t| t == a) => Some(MeldKind::Quad),
        _ => None,
    }
}

/// A classified meld holding its exact member tiles.
///
/// Member order is preserved as given. For a claimed meld the first member is the
/// tile taken from another seat and the rest came from the claimer's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meld {
    kind: MeldKind,
    tiles: Vec<Tile>,
}

impl Meld {
    pub fn new(tiles: Vec<Tile>) -> Result<Self, EngineError> {
        let kind = classify(&tiles)
            .ok_or_else(|| EngineError::malformed_meld(format_tiles(&tiles)))?;
        Ok(Self { kind, tiles })
    }

    /// Build from tiles already known to have the given shape.
    pub(crate) fn from_parts(kind: MeldKind, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(classify(&tiles), Some(kind));
        Self { kind, tiles }
    }

    pub fn kind(&self) -> MeldKind {
        self.kind
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The tile taken from another seat (first member).
    pub fn taken_tile(&self) -> Tile {
        self.tiles[0]
    }

    /// Members that came from the claimer's own hand.
    pub fn from_hand(&self) -> &[Tile] {
        &self.tiles[1..]
    }

    /// Move the member at `index` to the front, keeping the others in order.
    pub fn with_taken_first(mut self, index: usize) -> Option<Self> {
        if index >= self.tiles.len() {
            return None;
        }
        self.tiles[..=index].rotate_right(1);
        Some(self)
    }
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_tiles(&self.tiles))
    }
}
