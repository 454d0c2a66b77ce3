use crate::ai::LowestTilePolicy;
use crate::domain::fixtures::TileFixtures;
use crate::domain::legal::{reaction_actions, self_play_actions};
use crate::domain::{
    Action, Event, HandState, LegalActionGenerator, OfferedActions, OfferedKind, TurnTracker,
};

fn tracker(seat: u8, hand: &str) -> TurnTracker {
    TurnTracker::new(seat, TileFixtures::parse_hand(hand)).unwrap()
}

fn witnessed(seat: u8, action: &str) -> Event {
    Event::Witnessed {
        seat,
        action: action.parse().unwrap(),
    }
}

fn offered(raw: Option<&str>) -> OfferedActions {
    OfferedActions::from_validact(raw).unwrap()
}

fn legal(tracker: &TurnTracker) -> Vec<Action> {
    LegalActionGenerator::new(tracker, &LowestTilePolicy).legal_actions()
}

#[test]
fn before_any_event_only_pass() {
    let t = tracker(0, "W1 W2 W3");
    assert_eq!(legal(&t), vec![Action::Pass]);
}

#[test]
fn absent_offer_always_passes() {
    let mut t = tracker(0, "W1 W2 W3");
    t.apply(Event::SelfDraw(TileFixtures::tile("W4")), OfferedActions::Absent)
        .unwrap();
    assert_eq!(legal(&t), vec![Action::Pass]);
}

#[test]
fn own_draw_lists_distinct_plays() {
    let mut t = tracker(0, "W1 W1 B2");
    t.apply(Event::SelfDraw(TileFixtures::tile("B0")), offered(None))
        .unwrap();
    assert_eq!(
        legal(&t),
        vec![
            Action::Play(TileFixtures::tile("B2")),
            Action::Play(TileFixtures::tile("B5")),
            Action::Play(TileFixtures::tile("W1")),
        ]
    );
}

#[test]
fn empty_offer_after_other_seat_passes() {
    let mut t = tracker(0, "W1 W2 B3 B3");
    t.apply(witnessed(3, "PLAY W3"), offered(None)).unwrap();
    assert_eq!(legal(&t), vec![Action::Pass]);
}

#[test]
fn reactions_end_with_pass() {
    let mut t = tracker(0, "W1 W2 B3 B3");
    t.apply(witnessed(3, "PLAY B3"), offered(Some("CHI,PENG,HU")))
        .unwrap();
    let actions = legal(&t);
    assert_eq!(actions.last(), Some(&Action::Pass));
    assert_eq!(
        actions.iter().map(ToString::to_string).collect::<Vec<_>>(),
        vec!["CHI B3 B3 B3 W1", "PENG B3 B3 B3 W1", "HU", "PASS"]
    );
}

#[test]
fn failed_claims_collapse_into_one_pass() {
    let mut t = tracker(0, "W1 W2 B3 B3");
    t.apply(witnessed(3, "PLAY Z1"), offered(Some("CHI,PENG,GANG")))
        .unwrap();
    assert_eq!(legal(&t), vec![Action::Pass]);
}

#[test]
fn generation_is_idempotent() {
    let mut t = tracker(0, "W1 W2 B3 B3");
    t.apply(witnessed(3, "PLAY W3"), offered(Some("CHI,PASS")))
        .unwrap();
    let before = t.hand().clone();
    let first = legal(&t);
    let second = legal(&t);
    assert_eq!(first, second);
    assert_eq!(t.hand(), &before);
}

#[test]
fn reaction_actions_without_discard() {
    let hand = TileFixtures::sorted_hand("W1 W2");
    let actions = reaction_actions(
        &hand,
        None,
        &OfferedActions::Offered(vec![OfferedKind::Chi, OfferedKind::Hu]),
        &LowestTilePolicy,
    );
    // The chi degrades to Pass, which then stays in first position.
    assert_eq!(actions, vec![Action::Pass, Action::Win]);
}

#[test]
fn self_play_on_empty_hand() {
    assert!(self_play_actions(&HandState::default()).is_empty());
}
