//! Turn tracking: replays events for all four seats and decides what the
//! controlled seat owes next.

use tracing::{debug, warn};

use super::actions::{Action, OfferedActions};
use super::hand::HandState;
use super::player_view::PlayerPublicView;
use super::rules::{Seat, SEATS};
use super::tiles_types::Tile;
use crate::error::EngineError;

/// What kind of response the controlled seat owes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Obligation {
    /// No event has been seen yet.
    AwaitingAnyEvent,
    /// The controlled seat just drew and must play a tile.
    OwesSelfPlay,
    /// Another seat's action can be claimed (the server offered reactions).
    OwesReaction,
    /// Nothing to decide; the answer is `Pass`.
    Idle,
}

/// One transcript event after the seat/hand initialization records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The controlled seat drew this tile.
    SelfDraw(Tile),
    /// Any seat (including the controlled one) was seen taking an action.
    Witnessed { seat: Seat, action: Action },
}

/// Last actor, last action and the offer attached to the latest event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnContext {
    pub last_actor: Option<Seat>,
    pub last_action: Option<Action>,
    pub offered: OfferedActions,
}

/// Replays events in arrival order.
///
/// Owns the one full-information [`HandState`] (controlled seat) and a
/// [`PlayerPublicView`] for each of the other three seats.
#[derive(Debug, Clone)]
pub struct TurnTracker {
    seat: Seat,
    hand: HandState,
    opponents: Vec<PlayerPublicView>,
    obligation: Obligation,
    context: TurnContext,
}

impl TurnTracker {
    pub fn new(seat: Seat, starting_hand: Vec<Tile>) -> Result<Self, EngineError> {
        if usize::from(seat) >= SEATS {
            return Err(EngineError::transcript(format!("seat {seat} out of range")));
        }
        let opponents = (0..SEATS as Seat)
            .filter(|s| *s != seat)
            .map(PlayerPublicView::new)
            .collect();
        Ok(Self {
            seat,
            hand: HandState::new(starting_hand),
            opponents,
            obligation: Obligation::AwaitingAnyEvent,
            context: TurnContext::default(),
        })
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn hand(&self) -> &HandState {
        &self.hand
    }

    pub fn obligation(&self) -> Obligation {
        self.obligation
    }

    pub fn context(&self) -> &TurnContext {
        &self.context
    }

    /// Public view of another seat. `None` for the controlled seat; use
    /// [`public_view`](Self::public_view) for a projection of any seat.
    pub fn opponent(&self, seat: Seat) -> Option<&PlayerPublicView> {
        self.opponents.iter().find(|view| view.seat() == seat)
    }

    pub fn public_view(&self, seat: Seat) -> Option<PlayerPublicView> {
        if seat == self.seat {
            Some(self.hand.public_view(seat))
        } else {
            self.opponent(seat).cloned()
        }
    }

    /// The tile most recently put on the table, if the last action put one there.
    pub fn last_discard(&self) -> Option<Tile> {
        self.context
            .last_action
            .as_ref()
            .and_then(Action::discarded_tile)
    }

    /// Apply one event together with the offer attached to its request.
    pub fn apply(&mut self, event: Event, offered: OfferedActions) -> Result<(), EngineError> {
        let (actor, action) = match event {
            Event::SelfDraw(tile) => (self.seat, Action::Draw(Some(tile))),
            Event::Witnessed { seat, action } => (seat, action),
        };
        if usize::from(actor) >= SEATS {
            return Err(EngineError::transcript(format!("seat {actor} out of range")));
        }

        if let Some(meld) = action.meld() {
            self.release_claimed_tile(meld.taken_tile());
        }
        if actor == self.seat {
            self.apply_own(&action)?;
        } else {
            self.apply_public(actor, &action)?;
        }

        self.obligation = match &action {
            Action::Draw(_) if actor == self.seat => Obligation::OwesSelfPlay,
            _ if !offered.is_empty() => Obligation::OwesReaction,
            _ => Obligation::Idle,
        };
        debug!(
            seat = actor,
            action = %action,
            obligation = ?self.obligation,
            "applied event"
        );
        self.context = TurnContext {
            last_actor: Some(actor),
            last_action: Some(action),
            offered,
        };
        Ok(())
    }

    fn apply_own(&mut self, action: &Action) -> Result<(), EngineError> {
        match action {
            Action::Draw(Some(tile)) => self.hand.draw(*tile),
            Action::Draw(None) => debug!("own draw without a tile; concealed set unchanged"),
            Action::Play(tile) => self.hand.play_out(*tile)?,
            Action::Chi { meld, discard }
            | Action::Peng { meld, discard }
            | Action::Gang { meld, discard } => {
                self.hand.reveal_meld(meld.clone())?;
                self.hand.play_out(*discard)?;
            }
            Action::Riichi => self.hand.declare_riichi(),
            Action::Win | Action::Pass => {}
        }
        Ok(())
    }

    fn apply_public(&mut self, actor: Seat, action: &Action) -> Result<(), EngineError> {
        let view = self
            .opponents
            .iter_mut()
            .find(|view| view.seat() == actor)
            .ok_or_else(|| EngineError::transcript(format!("no public view for seat {actor}")))?;
        match action {
            // Other seats' draws are not observable.
            Action::Draw(_) => {}
            Action::Play(tile) => view.record_discard(*tile),
            Action::Chi { meld, discard }
            | Action::Peng { meld, discard }
            | Action::Gang { meld, discard } => {
                view.reveal_meld(meld.clone());
                view.record_discard(*discard);
            }
            Action::Riichi => view.declare_riichi(),
            Action::Win | Action::Pass => {}
        }
        Ok(())
    }

    /// A claimed tile leaves the discard pile of whoever acted last.
    fn release_claimed_tile(&mut self, tile: Tile) {
        let Some(from) = self.context.last_actor else {
            warn!(%tile, "claim before any discard");
            return;
        };
        let taken = if from == self.seat {
            self.hand.take_discard(tile)
        } else {
            self.opponents
                .iter_mut()
                .find(|view| view.seat() == from)
                .is_some_and(|view| view.take_discard(tile))
        };
        if !taken {
            warn!(%tile, from, "claimed tile missing from discard pile");
        }
    }
}
