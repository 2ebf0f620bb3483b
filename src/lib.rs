//! # qwixx-engine
//!
//! Rules engine and turn state machine for server-driven Qwixx
//! sessions.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: The engine never rolls dice, reads clocks, or
//!    touches storage. Hosts feed rolls in and persist snapshots out,
//!    so every operation is a function of explicit inputs.
//!
//! 2. **Derived Views**: The only stored facts per player are an
//!    append-only mark log and a penalty count. Lane progress, legal
//!    moves, and scores are derived on demand and can never drift.
//!
//! 3. **Typed Boundaries**: Rejections are typed errors with a broad
//!    [`engine::ErrorKind`] for transport mapping; state changes queue
//!    typed [`engine::GameEvent`]s for observers. A failed operation
//!    leaves the game untouched.
//!
//! ## Modules
//!
//! - `core`: Colors, players, dice, turn state
//! - `board`: Lanes, locks, mark logs, derived progress
//! - `rules`: Pure mark validation and move enumeration
//! - `score`: Score table and per-player tallies
//! - `engine`: The `Game` aggregate, errors, events, snapshots
//!
//! ## Example
//!
//! ```
//! use qwixx_engine::core::{DiceRng, LaneColor};
//! use qwixx_engine::engine::{Game, GameConfig};
//! use qwixx_engine::rules::{CandidateMove, MoveKind};
//!
//! let mut game = Game::new(GameConfig::default());
//! let anna = game.add_player("anna").unwrap();
//! let bo = game.add_player("bo").unwrap();
//! game.start().unwrap();
//!
//! let mut dice = DiceRng::new(42);
//! game.roll_dice(anna, dice.roll()).unwrap();
//!
//! for mv in game.possible_moves(anna).unwrap() {
//!     if mv.kind == MoveKind::Colored {
//!         game.apply_move(anna, mv).unwrap();
//!         break;
//!     }
//! }
//! ```

pub mod board;
pub mod core;
pub mod engine;
pub mod rules;
pub mod score;

// Re-export commonly used types
pub use crate::core::{
    DiceRng, DiceRoll, GameStatus, LaneColor, LaneDirection, PlayerId, SeatMap, TurnState,
};

pub use crate::board::{Lane, LaneProgress, LaneSet, Mark, MarkLog, LANE_LENGTH};

pub use crate::rules::{
    is_valid_mark, possible_moves, CandidateMove, MoveKind, MoveList, LOCK_MIN_MARKS,
};

pub use crate::score::{marks_score, ScoreSheet, PENALTY_POINTS, SCORE_TABLE};

pub use crate::engine::{
    EngineError, ErrorKind, Game, GameConfig, GameEvent, GameSnapshot, MoveOutcome,
    PlayerSnapshot, SessionSnapshot, TurnOutcome,
};
