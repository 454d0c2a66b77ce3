//! Legal action generation for the controlled seat.

use tracing::warn;

use super::actions::{Action, ClaimKind, OfferedActions, OfferedKind};
use super::hand::HandState;
use super::meld_finder::{find_melds, quad_ending_at, tiles_outside_melds};
use super::tiles_types::Tile;
use super::turn::{Obligation, TurnTracker};
use crate::ai::BotPolicy;
use crate::error::EngineError;

/// Produces the legal actions for the tracker's current obligation.
///
/// Works on snapshots of the hand, so calling it repeatedly on the same
/// tracker yields the same set (up to the discard choices of the policy).
pub struct LegalActionGenerator<'a> {
    tracker: &'a TurnTracker,
    policy: &'a dyn BotPolicy,
}

impl<'a> LegalActionGenerator<'a> {
    pub fn new(tracker: &'a TurnTracker, policy: &'a dyn BotPolicy) -> Self {
        Self { tracker, policy }
    }

    /// Never empty; every path ends in at least `Pass`.
    pub fn legal_actions(&self) -> Vec<Action> {
        let offered = &self.tracker.context().offered;
        if offered.is_absent() {
            return vec![Action::Pass];
        }
        match self.tracker.obligation() {
            Obligation::OwesSelfPlay => {
                let plays = self_play_actions(self.tracker.hand());
                if plays.is_empty() {
                    vec![Action::Pass]
                } else {
                    plays
                }
            }
            Obligation::OwesReaction => reaction_actions(
                &self.tracker.hand().sorted_view(),
                self.tracker.last_discard(),
                offered,
                self.policy,
            ),
            Obligation::AwaitingAnyEvent | Obligation::Idle => vec![Action::Pass],
        }
    }
}

/// One `Play` per distinct tile value held, in tile order.
pub fn self_play_actions(hand: &HandState) -> Vec<Action> {
    let mut tiles = hand.sorted_view();
    tiles.dedup();
    tiles.into_iter().map(Action::Play).collect()
}

/// Reactions to `played` for every offered kind, followed by `Pass`, without
/// duplicates.
pub fn reaction_actions(
    sorted_hand: &[Tile],
    played: Option<Tile>,
    offered: &OfferedActions,
    policy: &dyn BotPolicy,
) -> Vec<Action> {
    let mut actions: Vec<Action> = Vec::with_capacity(offered.kinds().len() + 1);
    let candidates = offered
        .kinds()
        .iter()
        .map(|&kind| reaction_action(sorted_hand, played, kind, policy))
        .chain(std::iter::once(Action::Pass));
    for action in candidates {
        if !actions.contains(&action) {
            actions.push(action);
        }
    }
    actions
}

/// The action answering a single offered kind. Claims without a fitting meld
/// fall back to `Pass` and are logged under `NO_LEGAL_MELD_FOR_OFFERED_KIND`.
pub fn reaction_action(
    sorted_hand: &[Tile],
    played: Option<Tile>,
    offered: OfferedKind,
    policy: &dyn BotPolicy,
) -> Action {
    let Some(claim) = offered.claim() else {
        return match offered {
            OfferedKind::Hu => Action::Win,
            _ => Action::Pass,
        };
    };
    let result = match played {
        Some(tile) => try_claim(sorted_hand, tile, claim, policy),
        None => Err(EngineError::NoLegalMeldForOfferedKind {
            kind: offered,
            tile: None,
        }),
    };
    match result {
        Ok(action) => action,
        Err(err) => {
            warn!(code = err.code(), error = %err, "offered claim not possible; passing");
            Action::Pass
        }
    }
}

/// Build the claim of `played` as `kind` from `sorted_hand`.
///
/// `played` is inserted after any equal tiles. For chi and peng the greedy meld
/// scan runs over the positions that can open a meld containing it, and the
/// first meld covering it is used if its shape fits the claim. Gang needs the
/// three tiles right before it to be equal. The meld is reordered so `played`
/// comes first, and the tile to throw afterwards is picked by `policy` among the
/// remaining tiles that are not part of a meld.
pub fn try_claim(
    sorted_hand: &[Tile],
    played: Tile,
    kind: ClaimKind,
    policy: &dyn BotPolicy,
) -> Result<Action, EngineError> {
    let no_meld = || EngineError::NoLegalMeldForOfferedKind {
        kind: kind.into(),
        tile: Some(played),
    };

    let insert_at = sorted_hand.partition_point(|t| *t <= played);
    let mut working = sorted_hand.to_vec();
    working.insert(insert_at, played);

    let (span, meld) = match kind {
        ClaimKind::Gang => quad_ending_at(&working, insert_at),
        ClaimKind::Chi | ClaimKind::Peng => {
            find_melds(&working, insert_at.saturating_sub(2), insert_at + 1)
                .into_iter()
                .find(|(span, _)| span.contains(&insert_at))
        }
    }
    .ok_or_else(no_meld)?;
    if !kind.accepts(meld.kind()) {
        return Err(no_meld());
    }
    let meld = meld
        .with_taken_first(insert_at - span.start)
        .ok_or_else(no_meld)?;

    working.drain(span);
    let mut candidates = tiles_outside_melds(&working);
    if candidates.is_empty() {
        candidates = working;
    }
    if candidates.is_empty() {
        return Err(no_meld());
    }
    let discard = policy.choose_discard(&candidates)?;
    Ok(kind.into_action(meld, discard))
}
