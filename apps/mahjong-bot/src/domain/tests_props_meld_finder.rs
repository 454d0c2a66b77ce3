//! Property tests for the greedy meld scan and claim construction.

use proptest::prelude::*;

use crate::ai::LowestTilePolicy;
use crate::domain::meld_finder::{find_melds, tiles_outside_melds};
use crate::domain::melds::classify;
use crate::domain::test_gens;
use crate::domain::test_prelude;
use crate::domain::{try_claim, Action, ClaimKind};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn melds_are_ordered_disjoint_and_valid(hand in test_gens::sorted_dense_hand(14)) {
        let found = find_melds(&hand, 0, hand.len());
        let mut last_end = 0;
        for (span, meld) in &found {
            prop_assert!(span.start >= last_end);
            prop_assert!(span.end <= hand.len());
            prop_assert_eq!(&hand[span.clone()], meld.tiles());
            prop_assert_eq!(classify(meld.tiles()), Some(meld.kind()));
            last_end = span.end;
        }
    }

    #[test]
    fn melds_open_inside_the_window(
        hand in test_gens::sorted_dense_hand(14),
        start in 0usize..14,
        width in 0usize..6,
    ) {
        let end = (start + width).min(hand.len());
        for (span, _) in find_melds(&hand, start, end) {
            prop_assert!(span.start >= start && span.start < end);
        }
    }

    #[test]
    fn leftovers_plus_melds_cover_the_hand(hand in test_gens::sorted_dense_hand(14)) {
        let covered: usize = find_melds(&hand, 0, hand.len())
            .iter()
            .map(|(_, meld)| meld.len())
            .sum();
        prop_assert_eq!(covered + tiles_outside_melds(&hand).len(), hand.len());
    }

    #[test]
    fn successful_claims_take_the_played_tile_first(
        hand in test_gens::sorted_dense_hand(13),
        played in test_gens::dense_tile(),
    ) {
        for kind in [ClaimKind::Chi, ClaimKind::Peng, ClaimKind::Gang] {
            if let Ok(action) = try_claim(&hand, played, kind, &LowestTilePolicy) {
                let meld = action.meld().cloned().unwrap();
                prop_assert_eq!(meld.taken_tile(), played);
                prop_assert!(kind.accepts(meld.kind()));
                prop_assert!(!matches!(action, Action::Pass));

                // Everything the claim uses must come from hand + played tile.
                let mut pool = hand.clone();
                pool.push(played);
                for tile in meld.tiles().iter().chain(action.discarded_tile().iter()) {
                    let idx = pool.iter().position(|t| t == tile);
                    prop_assert!(idx.is_some(), "tile {} not available", tile);
                    pool.remove(idx.unwrap());
                }
            }
        }
    }
}
