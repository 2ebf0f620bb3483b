//! Core types: colors, players, dice, and turn state.
//!
//! This module contains the fundamental building blocks the rest of the
//! engine is written in terms of. Nothing here enforces game rules;
//! that lives in `rules` and `engine`.

pub mod color;
pub mod dice;
pub mod player;
pub mod state;

pub use color::{LaneColor, LaneDirection, UnknownColor};
pub use dice::{DiceRng, DiceRoll};
pub use player::{PlayerId, SeatMap, MAX_SEATS};
pub use state::{GameStatus, TurnState};
