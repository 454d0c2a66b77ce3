//! Actions a seat can take, the kinds the server can offer, and their text encoding.

use std::fmt;
use std::str::FromStr;

use super::melds::{Meld, MeldKind};
use super::tiles_types::Tile;
use crate::error::EngineError;

/// Every action a seat can take.
///
/// Claims (`Chi`/`Peng`/`Gang`) carry the revealed meld, whose first member is the
/// claimed discard, and the tile thrown afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Draw from the wall; the tile is unknown when another seat draws.
    Draw(Option<Tile>),
    Play(Tile),
    Chi { meld: Meld, discard: Tile },
    Peng { meld: Meld, discard: Tile },
    Gang { meld: Meld, discard: Tile },
    Riichi,
    Win,
    Pass,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ActionKind {
    Draw,
    Play,
    Chi,
    Peng,
    Gang,
    Riichi,
    Win,
    Pass,
}

impl ActionKind {
    pub const fn token(self) -> &'static str {
        match self {
            ActionKind::Draw => "DRAW",
            ActionKind::Play => "PLAY",
            ActionKind::Chi => "CHI",
            ActionKind::Peng => "PENG",
            ActionKind::Gang => "GANG",
            ActionKind::Riichi => "RIICHI",
            ActionKind::Win => "HU",
            ActionKind::Pass => "PASS",
        }
    }
}

impl FromStr for ActionKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAW" => Ok(ActionKind::Draw),
            "PLAY" => Ok(ActionKind::Play),
            "CHI" => Ok(ActionKind::Chi),
            "PENG" => Ok(ActionKind::Peng),
            "GANG" => Ok(ActionKind::Gang),
            "RIICHI" => Ok(ActionKind::Riichi),
            "HU" => Ok(ActionKind::Win),
            "PASS" => Ok(ActionKind::Pass),
            _ => Err(EngineError::unrecognized_action(s)),
        }
    }
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Draw(_) => ActionKind::Draw,
            Action::Play(_) => ActionKind::Play,
            Action::Chi { .. } => ActionKind::Chi,
            Action::Peng { .. } => ActionKind::Peng,
            Action::Gang { .. } => ActionKind::Gang,
            Action::Riichi => ActionKind::Riichi,
            Action::Win => ActionKind::Win,
            Action::Pass => ActionKind::Pass,
        }
    }

    /// The tile this action puts on the table, if any. This is what the next
    /// seats may claim.
    pub fn discarded_tile(&self) -> Option<Tile> {
        match self {
            Action::Play(tile) => Some(*tile),
            Action::Chi { discard, .. }
            | Action::Peng { discard, .. }
            | Action::Gang { discard, .. } => Some(*discard),
            Action::Draw(_) | Action::Riichi | Action::Win | Action::Pass => None,
        }
    }

    pub fn meld(&self) -> Option<&Meld> {
        match self {
            Action::Chi { meld, .. } | Action::Peng { meld, .. } | Action::Gang { meld, .. } => {
                Some(meld)
            }
            Action::Draw(_) | Action::Play(_) | Action::Riichi | Action::Win | Action::Pass => None,
        }
    }

    /// Parse an already tokenized action (`["CHI", "W3", "W1", "W2", "B9"]`).
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, EngineError> {
        let (name, args) = tokens
            .split_first()
            .ok_or_else(|| EngineError::unrecognized_action(""))?;
        let kind: ActionKind = name.as_ref().parse()?;
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        let no_args = |action: Action| {
            if args.is_empty() {
                Ok(action)
            } else {
                Err(EngineError::unrecognized_action(args.join(" ")))
            }
        };

        match kind {
            ActionKind::Draw => match args.as_slice() {
                [] => Ok(Action::Draw(None)),
                [tile] => Ok(Action::Draw(Some(tile.parse()?))),
                _ => Err(EngineError::unrecognized_action(args.join(" "))),
            },
            ActionKind::Play => match args.as_slice() {
                [tile] => Ok(Action::Play(tile.parse()?)),
                _ => Err(EngineError::malformed_tile(args.join(" "))),
            },
            ActionKind::Chi | ActionKind::Peng | ActionKind::Gang => {
                let (discard, members) = args
                    .split_last()
                    .ok_or_else(|| EngineError::malformed_meld(name.as_ref()))?;
                let meld = Meld::new(
                    members
                        .iter()
                        .map(|t| t.parse::<Tile>())
                        .collect::<Result<Vec<_>, _>>()?,
                )?;
                let discard: Tile = discard.parse()?;
                Ok(match kind {
                    ActionKind::Chi => Action::Chi { meld, discard },
                    ActionKind::Peng => Action::Peng { meld, discard },
                    _ => Action::Gang { meld, discard },
                })
            }
            // A riichi may be followed by its declaration tile; it is not tracked.
            ActionKind::Riichi => Ok(Action::Riichi),
            ActionKind::Win => no_args(Action::Win),
            ActionKind::Pass => no_args(Action::Pass),
        }
    }
}

impl FromStr for Action {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        Action::from_tokens(&tokens)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = self.kind().token();
        match self {
            Action::Play(tile) => write!(f, "{token} {tile}"),
            Action::Chi { meld, discard }
            | Action::Peng { meld, discard }
            | Action::Gang { meld, discard } => write!(f, "{token} {meld} {discard}"),
            // The drawn tile is private; the wire form never repeats it.
            Action::Draw(_) | Action::Riichi | Action::Win | Action::Pass => f.write_str(token),
        }
    }
}

/// Reaction kinds the server can offer in `validact`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OfferedKind {
    Chi,
    Peng,
    Gang,
    Hu,
    Pass,
}

impl OfferedKind {
    pub const fn token(self) -> &'static str {
        match self {
            OfferedKind::Chi => "CHI",
            OfferedKind::Peng => "PENG",
            OfferedKind::Gang => "GANG",
            OfferedKind::Hu => "HU",
            OfferedKind::Pass => "PASS",
        }
    }

    /// The claim this kind asks for, if it is a claim at all.
    pub fn claim(self) -> Option<ClaimKind> {
        match self {
            OfferedKind::Chi => Some(ClaimKind::Chi),
            OfferedKind::Peng => Some(ClaimKind::Peng),
            OfferedKind::Gang => Some(ClaimKind::Gang),
            OfferedKind::Hu | OfferedKind::Pass => None,
        }
    }
}

impl FromStr for OfferedKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CHI" => Ok(OfferedKind::Chi),
            "PENG" => Ok(OfferedKind::Peng),
            "GANG" => Ok(OfferedKind::Gang),
            "HU" => Ok(OfferedKind::Hu),
            "PASS" => Ok(OfferedKind::Pass),
            _ => Err(EngineError::unrecognized_action(s)),
        }
    }
}

impl fmt::Display for OfferedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Claims on another seat's discard.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ClaimKind {
    Chi,
    Peng,
    Gang,
}

impl ClaimKind {
    /// Meld shapes that satisfy this claim. Chi also takes a triplet when that is
    /// the first meld the scan finds around the discard.
    pub fn accepts(self, kind: MeldKind) -> bool {
        match self {
            ClaimKind::Chi => matches!(kind, MeldKind::Run | MeldKind::Triplet),
            ClaimKind::Peng => kind == MeldKind::Triplet,
            ClaimKind::Gang => kind == MeldKind::Quad,
        }
    }

    pub fn into_action(self, meld: Meld, discard: Tile) -> Action {
        match self {
            ClaimKind::Chi => Action::Chi { meld, discard },
            ClaimKind::Peng => Action::Peng { meld, discard },
            ClaimKind::Gang => Action::Gang { meld, discard },
        }
    }
}

impl From<ClaimKind> for OfferedKind {
    fn from(kind: ClaimKind) -> Self {
        match kind {
            ClaimKind::Chi => OfferedKind::Chi,
            ClaimKind::Peng => OfferedKind::Peng,
            ClaimKind::Gang => OfferedKind::Gang,
        }
    }
}

/// The `validact` field attached to a request.
///
/// `Absent` (key missing) and an empty offer (`null` or `""`) are different:
/// the former always yields `Pass`, the latter still allows a self-play after a draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OfferedActions {
    #[default]
    Absent,
    Offered(Vec<OfferedKind>),
}

impl OfferedActions {
    /// Parse a comma-joined list such as `"CHI,PENG"`. `None` means the server
    /// sent `null`.
    pub fn from_validact(raw: Option<&str>) -> Result<Self, EngineError> {
        let kinds = match raw {
            None => Vec::new(),
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|tok| !tok.is_empty())
                .map(str::parse)
                .collect::<Result<Vec<OfferedKind>, _>>()?,
        };
        Ok(OfferedActions::Offered(kinds))
    }

    pub fn kinds(&self) -> &[OfferedKind] {
        match self {
            OfferedActions::Absent => &[],
            OfferedActions::Offered(kinds) => kinds,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, OfferedActions::Absent)
    }

    pub fn is_empty(&self) -> bool {
        self.kinds().is_empty()
    }
}
