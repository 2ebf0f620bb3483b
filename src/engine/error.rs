//! Error taxonomy for engine operations.
//!
//! Every mutating operation returns `Result<_, EngineError>`; a
//! rejected operation leaves the game untouched. Variants carry enough
//! context to explain the rejection to a player. [`EngineError::kind`]
//! collapses them into four broad classes so hosts can map errors to
//! transport responses without matching every variant.

use crate::core::color::LaneColor;
use crate::core::player::PlayerId;
use crate::core::state::GameStatus;
use crate::rules::enumerate::MoveKind;
use thiserror::Error;

/// Broad error classes for host-side mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The requested mark is not legal on the board.
    InvalidMove,
    /// The request came from the wrong player, in the wrong phase, or
    /// against an already-spent budget.
    TurnOrder,
    /// The game is over; nothing may change.
    GameFinished,
    /// Input or stored state that should not exist.
    Consistency,
}

/// Why an engine operation was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("{player} cannot mark {color} {number}")]
    InvalidMove {
        player: PlayerId,
        color: LaneColor,
        number: u8,
    },

    #[error("dice have not been rolled this turn")]
    DiceNotRolled,

    #[error("dice have already been rolled this turn")]
    DiceAlreadyRolled,

    #[error("the {kind} move has already been used this turn")]
    MoveAlreadyUsed { kind: MoveKind },

    #[error("only the active player may use the colored dice")]
    NotActivePlayer { player: PlayerId },

    #[error("it is not {player}'s turn")]
    NotPlayersTurn { player: PlayerId },

    #[error("the game is finished")]
    GameFinished,

    #[error("the game is {status}, not active")]
    GameNotActive { status: GameStatus },

    #[error("the game has already started")]
    GameAlreadyStarted,

    #[error("the game is full ({max} players)")]
    GameFull { max: usize },

    #[error("at least {min} players are needed to start")]
    NotEnoughPlayers { min: usize },

    #[error("{player} is not part of this game")]
    UnknownPlayer { player: PlayerId },

    #[error("the game has no players")]
    NoPlayers,

    #[error("dice roll has faces outside 1-6")]
    InvalidDice,

    #[error("snapshot is not usable: {reason}")]
    BadSnapshot { reason: String },
}

impl EngineError {
    /// The broad class this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::InvalidMove { .. } => ErrorKind::InvalidMove,

            EngineError::DiceNotRolled
            | EngineError::DiceAlreadyRolled
            | EngineError::MoveAlreadyUsed { .. }
            | EngineError::NotActivePlayer { .. }
            | EngineError::NotPlayersTurn { .. }
            | EngineError::GameNotActive { .. }
            | EngineError::GameAlreadyStarted
            | EngineError::GameFull { .. }
            | EngineError::NotEnoughPlayers { .. } => ErrorKind::TurnOrder,

            EngineError::GameFinished => ErrorKind::GameFinished,

            EngineError::UnknownPlayer { .. }
            | EngineError::NoPlayers
            | EngineError::InvalidDice
            | EngineError::BadSnapshot { .. } => ErrorKind::Consistency,
        }
    }
}
