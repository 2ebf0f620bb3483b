//! Scoring.
//!
//! Lane scores come from a fixed triangular table indexed by mark
//! count; penalties subtract a flat amount each. Scores are derived
//! from the mark logs whenever asked, never stored.

use crate::board::marks::MarkLog;
use crate::core::color::LaneColor;
use serde::{Deserialize, Serialize};

/// Points for n marks in a lane: `SCORE_TABLE[n]`.
pub const SCORE_TABLE: [i32; 13] = [0, 1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 66, 78];

/// Points lost per penalty.
pub const PENALTY_POINTS: i32 = 5;

/// Score for a lane with `count` marks. Counts past the table clamp to
/// its last entry.
#[must_use]
pub fn marks_score(count: usize) -> i32 {
    SCORE_TABLE[count.min(SCORE_TABLE.len() - 1)]
}

/// Final score breakdown for one player.
///
/// ## Example
///
/// ```
/// use qwixx_engine::board::{Mark, MarkLog};
/// use qwixx_engine::core::LaneColor;
/// use qwixx_engine::score::ScoreSheet;
///
/// let log: MarkLog = [
///     Mark::new(LaneColor::Red, 2),
///     Mark::new(LaneColor::Red, 5),
///     Mark::new(LaneColor::Blue, 10),
/// ]
/// .into_iter()
/// .collect();
///
/// let sheet = ScoreSheet::tally(&log, 1);
/// assert_eq!(sheet.lane(LaneColor::Red), 3);
/// assert_eq!(sheet.lane(LaneColor::Blue), 1);
/// assert_eq!(sheet.penalty_points(), 5);
/// assert_eq!(sheet.total(), -1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    lanes: [i32; 4],
    penalties: u8,
}

impl ScoreSheet {
    /// Tally a player's sheet from their mark log and penalty count.
    #[must_use]
    pub fn tally(log: &MarkLog, penalties: u8) -> Self {
        let mut lanes = [0i32; 4];
        for color in LaneColor::ALL {
            lanes[color.index()] = marks_score(log.count_in(color));
        }

        Self { lanes, penalties }
    }

    /// Points scored in one lane.
    #[must_use]
    pub const fn lane(&self, color: LaneColor) -> i32 {
        self.lanes[color.index()]
    }

    /// Lane scores in `LaneColor::ALL` order.
    #[must_use]
    pub const fn lane_scores(&self) -> [i32; 4] {
        self.lanes
    }

    /// Number of penalties taken.
    #[must_use]
    pub const fn penalties(&self) -> u8 {
        self.penalties
    }

    /// Points lost to penalties.
    #[must_use]
    pub const fn penalty_points(&self) -> i32 {
        self.penalties as i32 * PENALTY_POINTS
    }

    /// Lane scores minus penalty points. Can go negative.
    #[must_use]
    pub fn total(&self) -> i32 {
        self.lanes.iter().sum::<i32>() - self.penalty_points()
    }
}
