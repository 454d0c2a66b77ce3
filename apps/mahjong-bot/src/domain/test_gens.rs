// Proptest generators for domain types.
// Generated values are valid by construction; nothing needs prop_assume!.

use proptest::prelude::*;

use crate::domain::{Suit, Tile};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Dot),
        Just(Suit::Bamboo),
        Just(Suit::Character),
        Just(Suit::Honor),
    ]
}

/// Generate a numbered (non-honor) Suit
pub fn numbered_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![Just(Suit::Dot), Just(Suit::Bamboo), Just(Suit::Character)]
}

/// Generate any valid tile, red fives included
pub fn tile() -> impl Strategy<Value = Tile> {
    prop_oneof![
        8 => suit().prop_flat_map(|s| (Just(s), 1..=s.max_rank())).prop_map(|(s, r)| {
            #[allow(clippy::expect_used)]
            Tile::new(s, r).expect("rank in range")
        }),
        1 => numbered_suit().prop_map(|s| {
            #[allow(clippy::expect_used)]
            Tile::red_five(s).expect("numbered suit")
        }),
    ]
}

/// Tiles from a narrow slice of one suit so that melds show up often
pub fn dense_tile() -> impl Strategy<Value = Tile> {
    (prop_oneof![Just(Suit::Character), Just(Suit::Honor)], 1u8..=5).prop_map(|(s, r)| {
        #[allow(clippy::expect_used)]
        Tile::new(s, r).expect("rank in range")
    })
}

/// A sorted hand of `0..=max` tiles drawn from `dense_tile`
pub fn sorted_dense_hand(max: usize) -> impl Strategy<Value = Vec<Tile>> {
    prop::collection::vec(dense_tile(), 0..=max).prop_map(|mut tiles| {
        tiles.sort();
        tiles
    })
}
