//! Core tile types: Suit and Tile

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::error::EngineError;

/// Tile suits. Declaration order matches the letter order of the wire encoding
/// (`B < T < W < Z`), which is also the hand sort order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    /// Dots, encoded `B`.
    Dot,
    /// Bamboo, encoded `T`.
    Bamboo,
    /// Characters, encoded `W`.
    Character,
    /// Winds and dragons, encoded `Z`.
    Honor,
}

impl Suit {
    pub const fn letter(self) -> char {
        match self {
            Suit::Dot => 'B',
            Suit::Bamboo => 'T',
            Suit::Character => 'W',
            Suit::Honor => 'Z',
        }
    }

    pub fn from_letter(letter: char) -> Option<Suit> {
        match letter {
            'B' => Some(Suit::Dot),
            'T' => Some(Suit::Bamboo),
            'W' => Some(Suit::Character),
            'Z' => Some(Suit::Honor),
            _ => None,
        }
    }

    pub const fn max_rank(self) -> u8 {
        match self {
            Suit::Honor => 7,
            Suit::Dot | Suit::Bamboo | Suit::Character => 9,
        }
    }

    pub const fn is_honor(self) -> bool {
        matches!(self, Suit::Honor)
    }
}

/// Rank carried by the red (bonus) tile of a numbered suit.
pub const BONUS_RANK: u8 = 5;

/// A single game tile.
///
/// Fields are private so every `Tile` in circulation satisfies the rank range of
/// its suit. The bonus flag is display-only: equality, hashing and ordering look at
/// `(suit, rank)` alone, so a red five and a plain five are the same tile for
/// every rule in the engine.
#[derive(Debug, Copy, Clone)]
pub struct Tile {
    suit: Suit,
    rank: u8,
    bonus: bool,
}

impl Tile {
    pub fn new(suit: Suit, rank: u8) -> Result<Self, EngineError> {
        if rank == 0 || rank > suit.max_rank() {
            return Err(EngineError::malformed_tile(format!(
                "{}{}",
                suit.letter(),
                rank
            )));
        }
        Ok(Self {
            suit,
            rank,
            bonus: false,
        })
    }

    /// The red five of a numbered suit.
    pub fn red_five(suit: Suit) -> Result<Self, EngineError> {
        if suit.is_honor() {
            return Err(EngineError::malformed_tile(format!("{}0", suit.letter())));
        }
        Ok(Self {
            suit,
            rank: BONUS_RANK,
            bonus: true,
        })
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn is_bonus(&self) -> bool {
        self.bonus
    }

    /// True when `self` directly follows `prev` inside a numbered suit.
    pub fn follows(&self, prev: &Tile) -> bool {
        !self.suit.is_honor() && self.suit == prev.suit && self.rank == prev.rank + 1
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.suit.hash(state);
        self.rank.hash(state);
    }
}

impl Ord for Tile {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.suit.cmp(&other.suit) {
            Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
