//! Session lifecycle and per-turn state.
//!
//! ## GameStatus
//!
//! Where a session is in its lifecycle: filling up with players,
//! being played, or over.
//!
//! ## TurnState
//!
//! Everything scoped to a single turn: the visible dice, whose turn it
//! is, and which of the turn's one-shot budgets have been spent. All of
//! it except the dice faces resets when the turn advances.

use crate::core::dice::DiceRoll;
use crate::core::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Players may still join; no moves yet.
    Waiting,
    /// The game is being played.
    Active,
    /// A termination condition has been reached. No further mutation.
    Finished,
}

impl GameStatus {
    /// Lowercase name, matching what hosts store and render.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameStatus::Waiting => "waiting",
            GameStatus::Active => "active",
            GameStatus::Finished => "finished",
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-turn state: dice, active seat, and the turn's move budgets.
///
/// The white-sum move and the colored-dice move can each be taken once
/// per turn. The flags here are one-way within a turn; only
/// [`TurnState::advance`] clears them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    dice: DiceRoll,
    active: PlayerId,
    dice_rolled: bool,
    white_used: bool,
    colored_used: bool,
}

impl TurnState {
    /// Create the state for the first turn: seat 0 active, dice not
    /// yet rolled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dice: DiceRoll::default(),
            active: PlayerId::new(0),
            dice_rolled: false,
            white_used: false,
            colored_used: false,
        }
    }

    /// Rebuild turn state from stored fields.
    #[must_use]
    pub(crate) fn from_parts(
        dice: DiceRoll,
        active: PlayerId,
        dice_rolled: bool,
        white_used: bool,
        colored_used: bool,
    ) -> Self {
        Self {
            dice,
            active,
            dice_rolled,
            white_used,
            colored_used,
        }
    }

    /// The dice currently on the table.
    ///
    /// Faces are only meaningful when [`TurnState::dice_rolled`] is true;
    /// before the first roll of a turn they hold the previous turn's
    /// values (or zeros on a fresh game).
    #[must_use]
    pub const fn dice(&self) -> DiceRoll {
        self.dice
    }

    /// Seat whose turn it is.
    #[must_use]
    pub const fn active_player(&self) -> PlayerId {
        self.active
    }

    /// Whether the dice have been rolled this turn.
    #[must_use]
    pub const fn dice_rolled(&self) -> bool {
        self.dice_rolled
    }

    /// Whether the white-sum move has been taken this turn.
    #[must_use]
    pub const fn white_used(&self) -> bool {
        self.white_used
    }

    /// Whether the colored-dice move has been taken this turn.
    #[must_use]
    pub const fn colored_used(&self) -> bool {
        self.colored_used
    }

    /// Whether both of the turn's move budgets are spent.
    #[must_use]
    pub const fn both_moves_used(&self) -> bool {
        self.white_used && self.colored_used
    }

    /// Record a dice roll for this turn.
    pub(crate) fn set_roll(&mut self, roll: DiceRoll) {
        self.dice = roll;
        self.dice_rolled = true;
    }

    /// Spend the white-sum move budget.
    pub(crate) fn use_white(&mut self) {
        self.white_used = true;
    }

    /// Spend the colored-dice move budget.
    pub(crate) fn use_colored(&mut self) {
        self.colored_used = true;
    }

    /// Pass the turn to the next seat and reset all per-turn flags.
    ///
    /// Dice faces are left as-is; they become unreadable through
    /// `dice_rolled` until the next roll.
    pub(crate) fn advance(&mut self, player_count: usize) {
        self.active = self.active.next(player_count);
        self.dice_rolled = false;
        self.white_used = false;
        self.colored_used = false;
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}
