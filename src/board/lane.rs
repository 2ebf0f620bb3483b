//! Lane sequences and lock state.
//!
//! Each lane is a fixed row of eleven numbers. Red and yellow run 2 up
//! to 12, green and blue run 12 down to 2, so "rightward" always means
//! a higher position index regardless of whether the numbers rise or
//! fall. The board itself is shared: a lock applies to every player.

use crate::core::color::{LaneColor, LaneDirection};
use serde::{Deserialize, Serialize};

/// Number of positions in every lane.
pub const LANE_LENGTH: usize = 11;

/// One color lane: its number sequence and shared lock flag.
///
/// ## Example
///
/// ```
/// use qwixx_engine::board::Lane;
/// use qwixx_engine::core::LaneColor;
///
/// let red = Lane::new(LaneColor::Red);
/// assert_eq!(red.position_of(2), Some(0));
/// assert_eq!(red.position_of(12), Some(10));
///
/// let blue = Lane::new(LaneColor::Blue);
/// assert_eq!(blue.position_of(12), Some(0));
/// assert_eq!(blue.last_number(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    color: LaneColor,
    sequence: [u8; LANE_LENGTH],
    locked: bool,
}

impl Lane {
    /// Create an unlocked lane with the sequence for its color.
    #[must_use]
    pub fn new(color: LaneColor) -> Self {
        let mut sequence = [0u8; LANE_LENGTH];
        for (i, slot) in sequence.iter_mut().enumerate() {
            *slot = match color.direction() {
                LaneDirection::Ascending => 2 + i as u8,
                LaneDirection::Descending => 12 - i as u8,
            };
        }

        Self {
            color,
            sequence,
            locked: false,
        }
    }

    /// This lane's color.
    #[must_use]
    pub const fn color(&self) -> LaneColor {
        self.color
    }

    /// The full number sequence, leftmost first.
    #[must_use]
    pub const fn sequence(&self) -> &[u8; LANE_LENGTH] {
        &self.sequence
    }

    /// Position of a number in this lane, or `None` if the number does
    /// not appear (outside 2-12).
    #[must_use]
    pub fn position_of(&self, number: u8) -> Option<usize> {
        self.sequence.iter().position(|&n| n == number)
    }

    /// Number at a position, or `None` past the end of the lane.
    #[must_use]
    pub fn number_at(&self, position: usize) -> Option<u8> {
        self.sequence.get(position).copied()
    }

    /// The rightmost number: 12 for ascending lanes, 2 for descending.
    /// Marking it locks the lane.
    #[must_use]
    pub const fn last_number(&self) -> u8 {
        self.sequence[LANE_LENGTH - 1]
    }

    /// Whether this lane is locked for every player.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Lock this lane. Locks are permanent; there is no unlock.
    pub(crate) fn lock(&mut self) {
        self.locked = true;
    }
}

/// The four lanes of a board, indexed by color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneSet {
    lanes: [Lane; 4],
}

impl LaneSet {
    /// Create all four lanes, unlocked.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lanes: [
                Lane::new(LaneColor::Red),
                Lane::new(LaneColor::Yellow),
                Lane::new(LaneColor::Green),
                Lane::new(LaneColor::Blue),
            ],
        }
    }

    /// Rebuild lanes from stored lock flags, in `LaneColor::ALL` order.
    #[must_use]
    pub(crate) fn from_locked_flags(flags: [bool; 4]) -> Self {
        let mut set = Self::new();
        for (i, &locked) in flags.iter().enumerate() {
            if locked {
                set.lanes[i].lock();
            }
        }
        set
    }

    /// Get the lane for a color.
    #[must_use]
    pub fn get(&self, color: LaneColor) -> &Lane {
        &self.lanes[color.index()]
    }

    /// Lock a lane.
    pub(crate) fn lock(&mut self, color: LaneColor) {
        self.lanes[color.index()].lock();
    }

    /// Number of locked lanes.
    #[must_use]
    pub fn locked_count(&self) -> usize {
        self.lanes.iter().filter(|lane| lane.is_locked()).count()
    }

    /// Lock flags in `LaneColor::ALL` order, for storage.
    #[must_use]
    pub fn locked_flags(&self) -> [bool; 4] {
        [
            self.lanes[0].is_locked(),
            self.lanes[1].is_locked(),
            self.lanes[2].is_locked(),
            self.lanes[3].is_locked(),
        ]
    }

    /// Iterate lanes in `LaneColor::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = &Lane> {
        self.lanes.iter()
    }
}

impl Default for LaneSet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<LaneColor> for LaneSet {
    type Output = Lane;

    fn index(&self, color: LaneColor) -> &Lane {
        self.get(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending_sequence() {
        let red = Lane::new(LaneColor::Red);
        assert_eq!(red.sequence(), &[2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        assert_eq!(red.last_number(), 12);
    }

    #[test]
    fn test_descending_sequence() {
        let green = Lane::new(LaneColor::Green);
        assert_eq!(green.sequence(), &[12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2]);
        assert_eq!(green.last_number(), 2);
    }

    #[test]
    fn test_position_of() {
        let yellow = Lane::new(LaneColor::Yellow);
        assert_eq!(yellow.position_of(2), Some(0));
        assert_eq!(yellow.position_of(7), Some(5));
        assert_eq!(yellow.position_of(12), Some(10));
        assert_eq!(yellow.position_of(13), None);
        assert_eq!(yellow.position_of(1), None);

        let blue = Lane::new(LaneColor::Blue);
        assert_eq!(blue.position_of(12), Some(0));
        assert_eq!(blue.position_of(7), Some(5));
        assert_eq!(blue.position_of(2), Some(10));
    }

    #[test]
    fn test_number_at() {
        let red = Lane::new(LaneColor::Red);
        assert_eq!(red.number_at(0), Some(2));
        assert_eq!(red.number_at(10), Some(12));
        assert_eq!(red.number_at(11), None);
    }

    #[test]
    fn test_locking() {
        let mut lane = Lane::new(LaneColor::Red);
        assert!(!lane.is_locked());

        lane.lock();
        assert!(lane.is_locked());
    }

    #[test]
    fn test_lane_set_lock_tracking() {
        let mut lanes = LaneSet::new();
        assert_eq!(lanes.locked_count(), 0);

        lanes.lock(LaneColor::Green);
        assert_eq!(lanes.locked_count(), 1);
        assert!(lanes[LaneColor::Green].is_locked());
        assert!(!lanes[LaneColor::Red].is_locked());

        lanes.lock(LaneColor::Red);
        assert_eq!(lanes.locked_count(), 2);
        assert_eq!(lanes.locked_flags(), [true, false, true, false]);
    }

    #[test]
    fn test_lane_set_from_locked_flags() {
        let lanes = LaneSet::from_locked_flags([false, true, false, true]);
        assert!(lanes[LaneColor::Yellow].is_locked());
        assert!(lanes[LaneColor::Blue].is_locked());
        assert_eq!(lanes.locked_count(), 2);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut lanes = LaneSet::new();
        lanes.lock(LaneColor::Blue);

        let json = serde_json::to_string(&lanes).unwrap();
        let back: LaneSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lanes);
    }
}
