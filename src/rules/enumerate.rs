//! Candidate move enumeration.
//!
//! Given the dice on the table and one player's sheet, list every mark
//! that player could legally make right now. Pure and deterministic:
//! the same inputs always produce the same list in the same order.
//!
//! Order is fixed as white-sum moves across the lanes in canonical
//! color order, then for the active player the two colored sums per
//! lane, first-white-die sum first. When both white dice show the same
//! face the two colored sums collapse into one entry.

use crate::board::lane::LaneSet;
use crate::board::marks::MarkLog;
use crate::core::color::LaneColor;
use crate::core::dice::DiceRoll;
use crate::rules::validate::is_valid_mark;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Which per-turn budget a move spends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    /// Sum of the two white dice. Open to every player, once per turn.
    White,
    /// One white die plus a lane's colored die. Active player only,
    /// once per turn.
    Colored,
}

impl MoveKind {
    /// Lowercase name, matching what hosts store and render.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MoveKind::White => "white",
            MoveKind::Colored => "colored",
        }
    }
}

impl std::fmt::Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One legal mark a player could make: lane, number, and the budget it
/// would spend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateMove {
    pub color: LaneColor,
    pub number: u8,
    pub kind: MoveKind,
}

impl CandidateMove {
    /// Create a candidate move.
    #[must_use]
    pub const fn new(color: LaneColor, number: u8, kind: MoveKind) -> Self {
        Self {
            color,
            number,
            kind,
        }
    }
}

/// At most 4 white moves plus 8 colored moves per enumeration.
pub type MoveList = SmallVec<[CandidateMove; 12]>;

/// Enumerate every legal mark for one player given the current dice.
///
/// `white_used` and `colored_used` are the turn's shared budgets;
/// `is_active` gates the colored sums. Callers are expected to pass
/// dice that were actually rolled this turn.
#[must_use]
pub fn possible_moves(
    log: &MarkLog,
    lanes: &LaneSet,
    dice: DiceRoll,
    white_used: bool,
    colored_used: bool,
    is_active: bool,
) -> MoveList {
    let mut moves = MoveList::new();

    if !white_used {
        let sum = dice.white_sum();
        for color in LaneColor::ALL {
            if is_valid_mark(log, &lanes[color], sum) {
                moves.push(CandidateMove::new(color, sum, MoveKind::White));
            }
        }
    }

    if is_active && !colored_used {
        for color in LaneColor::ALL {
            let (first, second) = dice.colored_sums(color);
            if is_valid_mark(log, &lanes[color], first) {
                moves.push(CandidateMove::new(color, first, MoveKind::Colored));
            }
            if second != first && is_valid_mark(log, &lanes[color], second) {
                moves.push(CandidateMove::new(color, second, MoveKind::Colored));
            }
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::marks::Mark;

    fn moves_as_tuples(moves: &MoveList) -> Vec<(LaneColor, u8, MoveKind)> {
        moves.iter().map(|m| (m.color, m.number, m.kind)).collect()
    }

    #[test]
    fn test_fresh_board_active_player() {
        let log = MarkLog::new();
        let lanes = LaneSet::new();
        let dice = DiceRoll::new(3, 4, 5, 1, 2, 6);

        let moves = possible_moves(&log, &lanes, dice, false, false, true);

        assert_eq!(
            moves_as_tuples(&moves),
            vec![
                // White sum 7 in every lane.
                (LaneColor::Red, 7, MoveKind::White),
                (LaneColor::Yellow, 7, MoveKind::White),
                (LaneColor::Green, 7, MoveKind::White),
                (LaneColor::Blue, 7, MoveKind::White),
                // Colored sums per lane: white1+die then white2+die.
                (LaneColor::Red, 8, MoveKind::Colored),
                (LaneColor::Red, 9, MoveKind::Colored),
                (LaneColor::Yellow, 4, MoveKind::Colored),
                (LaneColor::Yellow, 5, MoveKind::Colored),
                (LaneColor::Green, 5, MoveKind::Colored),
                (LaneColor::Green, 6, MoveKind::Colored),
                (LaneColor::Blue, 9, MoveKind::Colored),
                (LaneColor::Blue, 10, MoveKind::Colored),
            ]
        );
    }

    #[test]
    fn test_non_active_player_gets_white_only() {
        let log = MarkLog::new();
        let lanes = LaneSet::new();
        let dice = DiceRoll::new(3, 4, 5, 1, 2, 6);

        let moves = possible_moves(&log, &lanes, dice, false, false, false);

        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.kind == MoveKind::White));
    }

    #[test]
    fn test_equal_white_dice_deduplicate_colored_sums() {
        let log = MarkLog::new();
        let lanes = LaneSet::new();
        let dice = DiceRoll::new(2, 2, 3, 3, 3, 3);

        let moves = possible_moves(&log, &lanes, dice, true, false, true);

        // One colored sum (5) per lane instead of two.
        assert_eq!(
            moves_as_tuples(&moves),
            vec![
                (LaneColor::Red, 5, MoveKind::Colored),
                (LaneColor::Yellow, 5, MoveKind::Colored),
                (LaneColor::Green, 5, MoveKind::Colored),
                (LaneColor::Blue, 5, MoveKind::Colored),
            ]
        );
    }

    #[test]
    fn test_white_and_colored_candidates_stay_distinct() {
        let log = MarkLog::new();
        let mut lanes = LaneSet::new();
        lanes.lock(LaneColor::Yellow);
        lanes.lock(LaneColor::Green);
        lanes.lock(LaneColor::Blue);
        // White sum 7; red colored sums 6 and 7. The colored 7 is not
        // merged into the white 7: they spend different budgets.
        let dice = DiceRoll::new(3, 4, 3, 1, 1, 1);

        let moves = possible_moves(&log, &lanes, dice, false, false, true);

        assert_eq!(
            moves_as_tuples(&moves),
            vec![
                (LaneColor::Red, 7, MoveKind::White),
                (LaneColor::Red, 6, MoveKind::Colored),
                (LaneColor::Red, 7, MoveKind::Colored),
            ]
        );
    }

    #[test]
    fn test_used_budgets_suppress_entries() {
        let log = MarkLog::new();
        let lanes = LaneSet::new();
        let dice = DiceRoll::new(3, 4, 5, 1, 2, 6);

        let white_spent = possible_moves(&log, &lanes, dice, true, false, true);
        assert!(white_spent.iter().all(|m| m.kind == MoveKind::Colored));

        let colored_spent = possible_moves(&log, &lanes, dice, false, true, true);
        assert!(colored_spent.iter().all(|m| m.kind == MoveKind::White));

        let both_spent = possible_moves(&log, &lanes, dice, true, true, true);
        assert!(both_spent.is_empty());
    }

    #[test]
    fn test_locked_lane_is_skipped() {
        let log = MarkLog::new();
        let mut lanes = LaneSet::new();
        lanes.lock(LaneColor::Red);
        let dice = DiceRoll::new(3, 4, 5, 1, 2, 6);

        let moves = possible_moves(&log, &lanes, dice, false, false, true);
        assert!(moves.iter().all(|m| m.color != LaneColor::Red));
    }

    #[test]
    fn test_rightward_rule_filters_candidates() {
        // Rightmost red mark at 9: white sum 7 and colored sum 8 are
        // both left of it, colored sum 9 is the same position.
        let log: MarkLog = [Mark::new(LaneColor::Red, 9)].into_iter().collect();
        let mut lanes = LaneSet::new();
        lanes.lock(LaneColor::Yellow);
        lanes.lock(LaneColor::Green);
        lanes.lock(LaneColor::Blue);
        let dice = DiceRoll::new(3, 4, 5, 1, 1, 1);

        let moves = possible_moves(&log, &lanes, dice, false, false, true);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_enumeration_is_deterministic() {
        let log: MarkLog = [Mark::new(LaneColor::Blue, 10), Mark::new(LaneColor::Red, 4)]
            .into_iter()
            .collect();
        let lanes = LaneSet::new();
        let dice = DiceRoll::new(1, 6, 2, 5, 3, 4);

        let first = possible_moves(&log, &lanes, dice, false, false, true);
        let second = possible_moves(&log, &lanes, dice, false, false, true);
        assert_eq!(first, second);
    }

    #[test]
    fn test_serde_roundtrip() {
        let candidate = CandidateMove::new(LaneColor::Green, 7, MoveKind::Colored);
        let json = serde_json::to_string(&candidate).unwrap();
        let back: CandidateMove = serde_json::from_str(&json).unwrap();
        assert_eq!(back, candidate);
    }
}
