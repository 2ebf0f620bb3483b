//! Stored-form snapshots.
//!
//! A [`SessionSnapshot`] is everything a host needs to persist one
//! session: a row of shared game state, one row per player, and that
//! player's mark rows. The shapes map directly onto a relational
//! schema, and [`SessionSnapshot::to_bytes`] offers a single-blob
//! alternative via bincode.
//!
//! Restoring validates structure (seat contiguity, face ranges, mark
//! membership) and rejects snapshots that could not have been produced
//! by this engine. It does not replay the rules against the mark
//! history; the stored session is trusted to have come from one.

use crate::board::lane::LaneSet;
use crate::board::marks::{Mark, MarkLog};
use crate::core::dice::DiceRoll;
use crate::core::player::{PlayerId, SeatMap, MAX_SEATS};
use crate::core::state::{GameStatus, TurnState};
use crate::engine::config::GameConfig;
use crate::engine::error::EngineError;
use crate::engine::game::{Game, Seat};
use serde::{Deserialize, Serialize};

/// Shared session state: one row per game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    /// Lock flags in `LaneColor::ALL` order.
    pub locked: [bool; 4],
    /// Dice faces in storage order: white1, white2, red, yellow,
    /// green, blue. All zeros when no roll has happened yet.
    pub dice: [u8; 6],
    pub active_seat: u8,
    pub dice_rolled: bool,
    pub white_used: bool,
    pub colored_used: bool,
}

/// Per-player state: one row per seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    /// Seat index; rows must cover 0..player_count with no gaps.
    pub turn_order: u8,
    pub penalties: u8,
}

/// Complete stored form of one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub game: GameSnapshot,
    /// Players in turn order.
    pub players: Vec<PlayerSnapshot>,
    /// `marks[i]` holds the mark rows for `players[i]`.
    pub marks: Vec<Vec<Mark>>,
}

impl SessionSnapshot {
    /// Serialize to a single bincode blob.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserialize from a bincode blob.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

impl Game {
    /// Capture the session's stored form.
    ///
    /// Pending events are not part of the snapshot; drain them before
    /// capturing if observers still need them.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            game: GameSnapshot {
                status: self.status,
                locked: self.lanes.locked_flags(),
                dice: self.turn.dice().as_array(),
                active_seat: self.turn.active_player().0,
                dice_rolled: self.turn.dice_rolled(),
                white_used: self.turn.white_used(),
                colored_used: self.turn.colored_used(),
            },
            players: self
                .seats
                .iter()
                .map(|(id, seat)| PlayerSnapshot {
                    name: seat.name.clone(),
                    turn_order: id.0,
                    penalties: seat.penalties,
                })
                .collect(),
            marks: self
                .seats
                .iter()
                .map(|(_, seat)| seat.marks.iter().copied().collect())
                .collect(),
        }
    }

    /// Rebuild a session from its stored form.
    ///
    /// The config is not stored; the host supplies the same limits the
    /// session was created with.
    pub fn restore(config: GameConfig, snapshot: &SessionSnapshot) -> Result<Game, EngineError> {
        let bad = |reason: &str| EngineError::BadSnapshot {
            reason: reason.to_string(),
        };

        // Checked before the turn-order loop: past this cap the `u8`
        // seat numbers could not have been contiguous to begin with.
        if snapshot.players.len() > MAX_SEATS {
            return Err(bad("more players than the engine can seat"));
        }

        for (i, player) in snapshot.players.iter().enumerate() {
            if player.turn_order != i as u8 {
                return Err(bad("player turn order is not contiguous"));
            }
        }
        if snapshot.marks.len() != snapshot.players.len() {
            return Err(bad("mark rows do not line up with players"));
        }

        let player_count = snapshot.players.len();
        if player_count == 0 {
            if snapshot.game.status != GameStatus::Waiting {
                return Err(bad("a started game needs players"));
            }
            if snapshot.game.active_seat != 0 {
                return Err(bad("active seat out of range"));
            }
        } else if snapshot.game.active_seat as usize >= player_count {
            return Err(bad("active seat out of range"));
        }

        let dice = DiceRoll::from_array(snapshot.game.dice);
        if snapshot.game.dice_rolled && !dice.is_valid() {
            return Err(bad("rolled dice with faces outside 1-6"));
        }

        let lanes = LaneSet::from_locked_flags(snapshot.game.locked);

        let mut seats: SeatMap<Seat> = SeatMap::new();
        for (player, mark_rows) in snapshot.players.iter().zip(&snapshot.marks) {
            let mut log = MarkLog::new();
            for mark in mark_rows {
                if lanes[mark.color].position_of(mark.number).is_none() {
                    return Err(bad("mark number outside its lane"));
                }
                if log.contains(mark.color, mark.number) {
                    return Err(bad("duplicate mark for one player"));
                }
                log.record(*mark);
            }

            seats.push(Seat {
                name: player.name.clone(),
                penalties: player.penalties,
                marks: log,
            });
        }

        Ok(Game {
            config,
            status: snapshot.game.status,
            lanes,
            turn: TurnState::from_parts(
                dice,
                PlayerId::new(snapshot.game.active_seat),
                snapshot.game.dice_rolled,
                snapshot.game.white_used,
                snapshot.game.colored_used,
            ),
            seats,
            events: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::LaneColor;
    use crate::engine::error::ErrorKind;
    use crate::rules::enumerate::{CandidateMove, MoveKind};

    fn mid_game() -> Game {
        let mut game = Game::new(GameConfig::default());
        let anna = game.add_player("anna").unwrap();
        let bo = game.add_player("bo").unwrap();
        game.start().unwrap();

        game.roll_dice(anna, DiceRoll::new(3, 4, 5, 1, 2, 6)).unwrap();
        game.apply_move(bo, CandidateMove::new(LaneColor::Blue, 7, MoveKind::White))
            .unwrap();
        // Anna's colored mark completes both budgets and hands the turn
        // to bo with fresh flags.
        game.apply_move(anna, CandidateMove::new(LaneColor::Red, 8, MoveKind::Colored))
            .unwrap();
        game
    }

    #[test]
    fn test_roundtrip_mid_game() {
        let mut game = mid_game();
        game.drain_events();

        let snapshot = game.snapshot();
        let restored = Game::restore(GameConfig::default(), &snapshot).unwrap();

        assert_eq!(restored, game);
        assert_eq!(restored.snapshot(), snapshot);
    }

    #[test]
    fn test_restored_game_plays_on_identically() {
        let mut game = mid_game();
        game.drain_events();
        let mut restored = Game::restore(GameConfig::default(), &game.snapshot()).unwrap();

        let bo = game.find_player("bo").unwrap();
        let roll = DiceRoll::new(2, 2, 1, 1, 1, 1);
        for g in [&mut game, &mut restored] {
            g.roll_dice(bo, roll).unwrap();
            g.apply_move(bo, CandidateMove::new(LaneColor::Yellow, 4, MoveKind::White))
                .unwrap();
            g.drain_events();
        }

        assert_eq!(game, restored);
    }

    #[test]
    fn test_bincode_roundtrip() {
        let game = mid_game();
        let snapshot = game.snapshot();

        let bytes = snapshot.to_bytes().unwrap();
        let back = SessionSnapshot::from_bytes(&bytes).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_waiting_game_roundtrip() {
        let game = Game::new(GameConfig::default());
        let snapshot = game.snapshot();

        assert_eq!(snapshot.game.status, GameStatus::Waiting);
        assert!(snapshot.players.is_empty());
        assert_eq!(snapshot.game.dice, [0; 6]);

        let restored = Game::restore(GameConfig::default(), &snapshot).unwrap();
        assert_eq!(restored, game);
    }

    #[test]
    fn test_rejects_gapped_turn_order() {
        let mut snapshot = mid_game().snapshot();
        snapshot.players[1].turn_order = 2;

        let err = Game::restore(GameConfig::default(), &snapshot).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Consistency);
        assert_eq!(
            err,
            EngineError::BadSnapshot {
                reason: "player turn order is not contiguous".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_more_players_than_seats() {
        // One seat past the cap, contiguous and otherwise well formed.
        // This must come back as an error, not abort in seat assignment.
        let mut snapshot = Game::new(GameConfig::default()).snapshot();
        for i in 0..=MAX_SEATS {
            snapshot.players.push(PlayerSnapshot {
                name: format!("player-{i}"),
                turn_order: i as u8,
                penalties: 0,
            });
            snapshot.marks.push(Vec::new());
        }

        let err = Game::restore(GameConfig::default(), &snapshot).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Consistency);
        assert_eq!(
            err,
            EngineError::BadSnapshot {
                reason: "more players than the engine can seat".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_active_seat_out_of_range() {
        let mut snapshot = mid_game().snapshot();
        snapshot.game.active_seat = 5;

        let err = Game::restore(GameConfig::default(), &snapshot).unwrap_err();
        assert_eq!(
            err,
            EngineError::BadSnapshot {
                reason: "active seat out of range".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_started_game_without_players() {
        let mut snapshot = Game::new(GameConfig::default()).snapshot();
        snapshot.game.status = GameStatus::Active;

        let err = Game::restore(GameConfig::default(), &snapshot).unwrap_err();
        assert_eq!(
            err,
            EngineError::BadSnapshot {
                reason: "a started game needs players".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_mark_row_mismatch() {
        let mut snapshot = mid_game().snapshot();
        snapshot.marks.pop();

        let err = Game::restore(GameConfig::default(), &snapshot).unwrap_err();
        assert_eq!(
            err,
            EngineError::BadSnapshot {
                reason: "mark rows do not line up with players".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_invalid_rolled_dice() {
        let mut snapshot = mid_game().snapshot();
        snapshot.game.dice_rolled = true;
        snapshot.game.dice = [0, 4, 5, 1, 2, 6];

        let err = Game::restore(GameConfig::default(), &snapshot).unwrap_err();
        assert_eq!(
            err,
            EngineError::BadSnapshot {
                reason: "rolled dice with faces outside 1-6".to_string()
            }
        );

        // The same zeroed faces are fine when the dice are not rolled.
        snapshot.game.dice = [0; 6];
        snapshot.game.dice_rolled = false;
        Game::restore(GameConfig::default(), &snapshot).unwrap();
    }

    #[test]
    fn test_rejects_bad_marks() {
        let mut snapshot = mid_game().snapshot();
        snapshot.marks[0].push(Mark::new(LaneColor::Red, 13));
        let err = Game::restore(GameConfig::default(), &snapshot).unwrap_err();
        assert_eq!(
            err,
            EngineError::BadSnapshot {
                reason: "mark number outside its lane".to_string()
            }
        );

        let mut snapshot = mid_game().snapshot();
        snapshot.marks[0].push(Mark::new(LaneColor::Red, 8));
        let err = Game::restore(GameConfig::default(), &snapshot).unwrap_err();
        assert_eq!(
            err,
            EngineError::BadSnapshot {
                reason: "duplicate mark for one player".to_string()
            }
        );
    }

    #[test]
    fn test_finished_game_restores_finished() {
        let mut game = mid_game();
        let anna = game.find_player("anna").unwrap();
        let bo = game.find_player("bo").unwrap();

        // Burn both players down to the penalty limit.
        loop {
            let active = game.active_player().unwrap();
            if game.end_turn(active, true).unwrap().game_finished {
                break;
            }
        }
        assert!(game.is_finished());

        let restored = Game::restore(GameConfig::default(), &game.snapshot()).unwrap();
        assert!(restored.is_finished());
        assert_eq!(restored.penalties(anna), game.penalties(anna));
        assert_eq!(restored.penalties(bo), game.penalties(bo));

        let mut restored = restored;
        assert_eq!(
            restored.end_turn(anna, false),
            Err(EngineError::GameFinished)
        );
    }
}
