//! Player identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. A player's ID is their seat in turn
//! order: the first player to join is `PlayerId(0)`, the next is
//! `PlayerId(1)`, and so on. Seats never change once assigned.
//!
//! ## SeatMap
//!
//! Per-seat data storage backed by `Vec` for O(1) access. Unlike a
//! fixed-size table, a `SeatMap` grows one seat at a time while a
//! session is filling up.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based and double as turn order: the first
/// player is `PlayerId(0)` and plays first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use qwixx_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// The seat after this one in turn order, wrapping at `player_count`.
    ///
    /// ```
    /// use qwixx_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1).next(3), PlayerId::new(2));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub const fn next(self, player_count: usize) -> PlayerId {
        PlayerId(((self.0 as usize + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

impl From<u8> for PlayerId {
    fn from(seat: u8) -> Self {
        PlayerId(seat)
    }
}

/// Most seats one session supports; seat numbers are a `u8`.
pub const MAX_SEATS: usize = 255;

/// Per-seat data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per seat. Use `SeatMap::new()`
/// for an empty map that grows as players join, or
/// `SeatMap::with_seats()` to build a full table at once.
///
/// ## Example
///
/// ```
/// use qwixx_engine::core::{PlayerId, SeatMap};
///
/// let mut penalties: SeatMap<u8> = SeatMap::new();
/// let first = penalties.push(0);
/// let second = penalties.push(0);
///
/// penalties[second] += 1;
/// assert_eq!(penalties[first], 0);
/// assert_eq!(penalties[second], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: Vec<T>,
}

impl<T> SeatMap<T> {
    /// Create an empty map with no seats assigned.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a map with `seat_count` seats, filled from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn with_seats(seat_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(seat_count <= MAX_SEATS, "At most {MAX_SEATS} seats supported");

        let data = (0..seat_count as u8).map(|i| factory(PlayerId(i))).collect();

        Self { data }
    }

    /// Assign the next seat in turn order and return its ID.
    ///
    /// Callers gate on [`MAX_SEATS`] first; this assert is the backstop
    /// for the `u8` seat numbering.
    pub fn push(&mut self, value: T) -> PlayerId {
        assert!(self.data.len() < MAX_SEATS, "At most {MAX_SEATS} seats supported");

        let id = PlayerId(self.data.len() as u8);
        self.data.push(value);
        id
    }

    /// Get the number of seats assigned.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.data.len()
    }

    /// Check whether no seats have been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check whether `player` names an assigned seat.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// Get a reference to a seat's data, or `None` for an unassigned seat.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a seat's data, or `None` for an
    /// unassigned seat.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all assigned player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for SeatMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for SeatMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
