//! The game engine: lifecycle, turns, errors, events, and snapshots.
//!
//! [`Game`] is the single entry point for hosts. It wires the pure
//! rule checks from `crate::rules` into a session with players, turn
//! order, and termination, and speaks typed errors and events at its
//! boundary.

pub mod config;
pub mod error;
pub mod event;
pub mod game;
pub mod snapshot;

pub use config::GameConfig;
pub use error::{EngineError, ErrorKind};
pub use event::GameEvent;
pub use game::{Game, MoveOutcome, TurnOutcome};
pub use snapshot::{GameSnapshot, PlayerSnapshot, SessionSnapshot};
