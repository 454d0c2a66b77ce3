use crate::ai::LowestTilePolicy;
use crate::domain::fixtures::TileFixtures;
use crate::domain::{reaction_action, try_claim, Action, ClaimKind, MeldKind, OfferedKind};
use crate::error::EngineError;

fn claim(hand: &str, played: &str, kind: ClaimKind) -> Result<Action, EngineError> {
    try_claim(
        &TileFixtures::sorted_hand(hand),
        TileFixtures::tile(played),
        kind,
        &LowestTilePolicy,
    )
}

#[test]
fn chi_builds_run_with_taken_tile_first() {
    let action = claim("W1 W2 B3 B3", "W3", ClaimKind::Chi).unwrap();
    assert_eq!(action.to_string(), "CHI W3 W1 W2 B3");
    assert_eq!(action.meld().unwrap().kind(), MeldKind::Run);
}

#[test]
fn chi_on_middle_tile_moves_it_to_front() {
    let action = claim("W1 W3 Z7", "W2", ClaimKind::Chi).unwrap();
    assert_eq!(action.to_string(), "CHI W2 W1 W3 Z7");
}

#[test]
fn chi_takes_triplet_when_that_is_the_first_fit() {
    let action = claim("W1 W2 B3 B3", "B3", ClaimKind::Chi).unwrap();
    assert_eq!(action.meld().unwrap().kind(), MeldKind::Triplet);
    assert_eq!(action.to_string(), "CHI B3 B3 B3 W1");
}

#[test]
fn peng_needs_a_pair() {
    let action = claim("Z5 Z5 W9", "Z5", ClaimKind::Peng).unwrap();
    assert_eq!(action.to_string(), "PENG Z5 Z5 Z5 W9");

    let err = claim("W1 W2 B3 B3", "W3", ClaimKind::Peng).unwrap_err();
    assert_eq!(
        err,
        EngineError::NoLegalMeldForOfferedKind {
            kind: OfferedKind::Peng,
            tile: Some(TileFixtures::tile("W3")),
        }
    );
}

#[test]
fn gang_needs_three_of_a_kind() {
    let action = claim("T7 T7 T7 B1 B9", "T7", ClaimKind::Gang).unwrap();
    assert_eq!(action.meld().unwrap().kind(), MeldKind::Quad);
    assert_eq!(action.to_string(), "GANG T7 T7 T7 T7 B1");

    assert_eq!(
        claim("T7 T7 B1", "T7", ClaimKind::Gang).unwrap_err().code(),
        "NO_LEGAL_MELD_FOR_OFFERED_KIND"
    );
}

#[test]
fn discard_prefers_tiles_outside_remaining_melds() {
    // After the chi, B1 B2 B3 still form a run; Z1 is the only free tile.
    let action = claim("B1 B2 B3 W1 W2 Z1", "W3", ClaimKind::Chi).unwrap();
    assert_eq!(action.discarded_tile(), Some(TileFixtures::tile("Z1")));
}

#[test]
fn remaining_quad_and_run_are_both_kept_out_of_the_discard() {
    // W1 W1 W1 | W1 W2 W3 tile as triplet + run, leaving only Z7 free.
    let action = claim("T1 T2 W1 W1 W1 W1 W2 W3 Z7", "T3", ClaimKind::Chi).unwrap();
    assert_eq!(action.to_string(), "CHI T3 T1 T2 Z7");
}

#[test]
fn discard_falls_back_to_whole_remainder() {
    let action = claim("W1 W2 B1 B2 B3", "W3", ClaimKind::Chi).unwrap();
    assert_eq!(action.discarded_tile(), Some(TileFixtures::tile("B1")));
}

#[test]
fn claim_without_leftover_tile_fails() {
    assert!(claim("W1 W2", "W3", ClaimKind::Chi).is_err());
}

#[test]
fn unrelated_tile_cannot_be_claimed() {
    for kind in [ClaimKind::Chi, ClaimKind::Peng, ClaimKind::Gang] {
        assert!(claim("W1 W2 B3 B3", "Z4", kind).is_err());
    }
}

#[test]
fn reaction_action_maps_offered_kinds() {
    let hand = TileFixtures::sorted_hand("W1 W2 B3 B3");
    let w3 = Some(TileFixtures::tile("W3"));
    let policy = LowestTilePolicy;

    assert_eq!(reaction_action(&hand, w3, OfferedKind::Hu, &policy), Action::Win);
    assert_eq!(reaction_action(&hand, w3, OfferedKind::Pass, &policy), Action::Pass);
    assert_eq!(reaction_action(&hand, w3, OfferedKind::Peng, &policy), Action::Pass);
    assert_eq!(reaction_action(&hand, None, OfferedKind::Chi, &policy), Action::Pass);
    assert_eq!(
        reaction_action(&hand, w3, OfferedKind::Chi, &policy).to_string(),
        "CHI W3 W1 W2 B3"
    );
}
