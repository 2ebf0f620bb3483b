//! Per-player marks and derived lane progress.
//!
//! ## MarkLog
//!
//! The source of truth for one player's sheet is an append-only log of
//! accepted marks. Marks are never edited or removed once recorded.
//!
//! ## LaneProgress
//!
//! Rule checks need positional facts: how many marks a player has in a
//! lane and how far right they reach. `LaneProgress` derives those on
//! demand by mapping each marked number back into the lane's sequence,
//! so there is no stored board state to drift out of sync.

use crate::board::lane::{Lane, LANE_LENGTH};
use crate::core::color::LaneColor;
use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A single accepted mark: one number crossed off in one lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mark {
    pub color: LaneColor,
    pub number: u8,
}

impl Mark {
    /// Create a mark.
    #[must_use]
    pub const fn new(color: LaneColor, number: u8) -> Self {
        Self { color, number }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.number)
    }
}

/// Append-only log of one player's accepted marks.
///
/// Uses `im::Vector` so cloning a log (and with it a whole game, when a
/// turn batch is staged) is O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkLog {
    marks: Vector<Mark>,
}

impl MarkLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            marks: Vector::new(),
        }
    }

    /// Append an accepted mark. Validation happens before this point.
    pub(crate) fn record(&mut self, mark: Mark) {
        self.marks.push_back(mark);
    }

    /// Total marks across all lanes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Whether the log holds no marks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Whether a specific number is marked in a lane.
    #[must_use]
    pub fn contains(&self, color: LaneColor, number: u8) -> bool {
        self.marks
            .iter()
            .any(|m| m.color == color && m.number == number)
    }

    /// Number of marks in one lane.
    #[must_use]
    pub fn count_in(&self, color: LaneColor) -> usize {
        self.marks.iter().filter(|m| m.color == color).count()
    }

    /// Marked numbers in one lane, in the order they were recorded.
    pub fn numbers_in(&self, color: LaneColor) -> impl Iterator<Item = u8> + '_ {
        self.marks
            .iter()
            .filter(move |m| m.color == color)
            .map(|m| m.number)
    }

    /// Iterate all marks in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = &Mark> {
        self.marks.iter()
    }
}

impl FromIterator<Mark> for MarkLog {
    fn from_iter<I: IntoIterator<Item = Mark>>(iter: I) -> Self {
        Self {
            marks: iter.into_iter().collect(),
        }
    }
}

/// One player's progress in one lane, derived from their mark log.
///
/// Positions are indices into the lane's sequence, sorted ascending.
/// Derived fresh for each rule check; never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaneProgress {
    positions: SmallVec<[u8; LANE_LENGTH]>,
}

impl LaneProgress {
    /// Derive progress for `lane` from a player's log.
    ///
    /// Numbers that do not map into the lane's sequence are ignored;
    /// they cannot exist in a log built through validation.
    #[must_use]
    pub fn derive(log: &MarkLog, lane: &Lane) -> Self {
        let mut positions: SmallVec<[u8; LANE_LENGTH]> = log
            .numbers_in(lane.color())
            .filter_map(|number| lane.position_of(number))
            .map(|pos| pos as u8)
            .collect();
        positions.sort_unstable();

        Self { positions }
    }

    /// Number of marks in the lane.
    #[must_use]
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    /// Rightmost marked position, or `None` for an unmarked lane.
    #[must_use]
    pub fn rightmost(&self) -> Option<usize> {
        self.positions.last().map(|&pos| pos as usize)
    }

    /// Marked positions, sorted ascending.
    #[must_use]
    pub fn positions(&self) -> &[u8] {
        &self.positions
    }
}
