//! Observable game events.
//!
//! Mutating operations queue events describing what changed; hosts
//! drain them after each call to refresh clients or write an activity
//! feed. The set is closed: observers can match exhaustively and the
//! compiler flags them when a new event is added.

use crate::core::color::LaneColor;
use crate::core::dice::DiceRoll;
use crate::core::player::PlayerId;
use crate::rules::enumerate::MoveKind;
use serde::{Deserialize, Serialize};

/// Something observers care about, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The active player rolled the turn's dice.
    DiceRolled { player: PlayerId, roll: DiceRoll },
    /// A player crossed off a number.
    MarkPlaced {
        player: PlayerId,
        color: LaneColor,
        number: u8,
        kind: MoveKind,
    },
    /// A lane closed for every player.
    LaneLocked { color: LaneColor, by: PlayerId },
    /// A player took a penalty; `total` is their new count.
    PenaltyAssigned { player: PlayerId, total: u8 },
    /// The turn passed to a new active player.
    TurnAdvanced { active: PlayerId },
    /// A termination condition was reached.
    GameFinished,
}
