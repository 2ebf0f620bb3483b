//! Session configuration.
//!
//! Defaults match the boxed game: 2-5 players, four penalties or two
//! locked lanes end the game. Hosts running variants (solo practice,
//! longer games) adjust through the builder methods.

use serde::{Deserialize, Serialize};

/// Tunable session limits.
///
/// ## Example
///
/// ```
/// use qwixx_engine::engine::GameConfig;
///
/// let config = GameConfig::default()
///     .with_min_players(1)
///     .with_penalty_limit(6);
///
/// assert_eq!(config.min_players, 1);
/// assert_eq!(config.penalty_limit, 6);
/// assert_eq!(config.lanes_to_finish, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Players required before the game can start.
    pub min_players: usize,
    /// Seats available; joins beyond this are rejected.
    pub max_players: usize,
    /// Penalty count that ends the game when any player reaches it.
    pub penalty_limit: u8,
    /// Locked-lane count that ends the game.
    pub lanes_to_finish: usize,
}

impl GameConfig {
    /// Standard rules: 2-5 players, 4 penalties, 2 locked lanes.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_players: 2,
            max_players: 5,
            penalty_limit: 4,
            lanes_to_finish: 2,
        }
    }

    /// Set the minimum player count.
    #[must_use]
    pub const fn with_min_players(mut self, min_players: usize) -> Self {
        self.min_players = min_players;
        self
    }

    /// Set the maximum player count.
    #[must_use]
    pub const fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }

    /// Set the penalty count that ends the game.
    #[must_use]
    pub const fn with_penalty_limit(mut self, penalty_limit: u8) -> Self {
        self.penalty_limit = penalty_limit;
        self
    }

    /// Set the locked-lane count that ends the game.
    #[must_use]
    pub const fn with_lanes_to_finish(mut self, lanes_to_finish: usize) -> Self {
        self.lanes_to_finish = lanes_to_finish;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
