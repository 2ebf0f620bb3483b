//! Mark validation.
//!
//! A single pure predicate decides whether one player may cross off one
//! number in one lane. It reads the shared lane (for the sequence and
//! lock flag) and that player's mark log; it never mutates anything.
//!
//! The checks, in order:
//!
//! 1. A locked lane accepts nothing.
//! 2. The number must appear in the lane's sequence.
//! 3. With no marks yet, any position is fine except the last.
//! 4. Otherwise the position must be strictly right of the player's
//!    rightmost mark. Marking the same position twice is covered here.
//! 5. The last position additionally needs at least `LOCK_MIN_MARKS`
//!    prior marks in the lane.

use crate::board::lane::{Lane, LANE_LENGTH};
use crate::board::marks::{LaneProgress, MarkLog};

/// Marks a player must already have in a lane before they may take its
/// last position (and lock the lane).
pub const LOCK_MIN_MARKS: usize = 5;

/// Check whether `number` is a legal mark for the player owning `log`
/// in `lane`.
///
/// ## Example
///
/// ```
/// use qwixx_engine::board::{Lane, MarkLog};
/// use qwixx_engine::core::LaneColor;
/// use qwixx_engine::rules::is_valid_mark;
///
/// let lane = Lane::new(LaneColor::Red);
/// let log = MarkLog::new();
///
/// assert!(is_valid_mark(&log, &lane, 5));
/// // The last number needs five prior marks.
/// assert!(!is_valid_mark(&log, &lane, 12));
/// ```
#[must_use]
pub fn is_valid_mark(log: &MarkLog, lane: &Lane, number: u8) -> bool {
    if lane.is_locked() {
        return false;
    }

    let position = match lane.position_of(number) {
        Some(pos) => pos,
        None => return false,
    };

    let progress = LaneProgress::derive(log, lane);
    let is_last = position == LANE_LENGTH - 1;

    match progress.rightmost() {
        None => !is_last,
        Some(rightmost) => {
            if position <= rightmost {
                return false;
            }
            !(is_last && progress.count() < LOCK_MIN_MARKS)
        }
    }
}
