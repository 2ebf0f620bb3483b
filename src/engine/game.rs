//! Game aggregate: session lifecycle, turns, and move application.
//!
//! `Game` owns everything a single session needs: the shared lanes,
//! per-seat sheets, the current turn, and a queue of observable events.
//! All rule checks run before any mutation, so a returned error means
//! the game is exactly as it was.
//!
//! Turn closing happens in exactly one place ([`Game::close_turn`]),
//! shared by the auto-advance after the active player spends both move
//! budgets, by explicit end-turn, and by batch turn processing.

use crate::board::lane::LaneSet;
use crate::board::marks::{Mark, MarkLog};
use crate::core::color::LaneColor;
use crate::core::dice::DiceRoll;
use crate::core::player::{PlayerId, SeatMap, MAX_SEATS};
use crate::core::state::{GameStatus, TurnState};
use crate::engine::config::GameConfig;
use crate::engine::error::EngineError;
use crate::engine::event::GameEvent;
use crate::rules::enumerate::{self, CandidateMove, MoveKind, MoveList};
use crate::rules::validate;
use crate::score::ScoreSheet;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One player's seat: identity and private sheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Seat {
    pub(crate) name: String,
    pub(crate) penalties: u8,
    pub(crate) marks: MarkLog,
}

/// Result of a successfully applied mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Lane this mark locked, if any.
    pub locked: Option<LaneColor>,
    /// Whether the turn auto-advanced.
    pub turn_advanced: bool,
    /// Whether the game is now finished.
    pub game_finished: bool,
}

/// Result of closing a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Whether the active player took a penalty.
    pub penalty_assigned: bool,
    /// Whether the turn advanced to the next seat.
    pub turn_advanced: bool,
    /// Whether the game is now finished.
    pub game_finished: bool,
}

/// A single game session.
///
/// Mutating operations return typed errors and leave the game
/// untouched on failure. The engine holds no clock, no transport, and
/// no randomness: dice rolls come in from the host.
///
/// ## Example
///
/// ```
/// use qwixx_engine::core::{DiceRoll, LaneColor};
/// use qwixx_engine::engine::{Game, GameConfig};
/// use qwixx_engine::rules::{CandidateMove, MoveKind};
///
/// let mut game = Game::new(GameConfig::default());
/// let anna = game.add_player("anna").unwrap();
/// let bo = game.add_player("bo").unwrap();
/// game.start().unwrap();
///
/// game.roll_dice(anna, DiceRoll::new(3, 4, 5, 1, 2, 6)).unwrap();
///
/// // Any player may mark the white sum; bo is not active.
/// game.apply_move(bo, CandidateMove::new(LaneColor::Red, 7, MoveKind::White))
///     .unwrap();
///
/// // Only anna may use the colored dice.
/// let outcome = game
///     .apply_move(anna, CandidateMove::new(LaneColor::Red, 8, MoveKind::Colored))
///     .unwrap();
/// assert!(!outcome.game_finished);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) status: GameStatus,
    pub(crate) lanes: LaneSet,
    pub(crate) turn: TurnState,
    pub(crate) seats: SeatMap<Seat>,
    pub(crate) events: Vec<GameEvent>,
}

impl Game {
    /// Create an empty session waiting for players.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            status: GameStatus::Waiting,
            lanes: LaneSet::new(),
            turn: TurnState::new(),
            seats: SeatMap::new(),
            events: Vec::new(),
        }
    }

    // === Accessors ===

    /// The session's configuration.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the game is over.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// The shared lanes.
    #[must_use]
    pub const fn lanes(&self) -> &LaneSet {
        &self.lanes
    }

    /// The current turn's state.
    #[must_use]
    pub const fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Number of players seated.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.seat_count()
    }

    /// All seated player IDs in turn order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.seats.seat_count())
    }

    /// The seat whose turn it is, or `None` before anyone has joined.
    #[must_use]
    pub fn active_player(&self) -> Option<PlayerId> {
        if self.seats.is_empty() {
            None
        } else {
            Some(self.turn.active_player())
        }
    }

    /// A player's display name.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> Option<&str> {
        self.seats.get(player).map(|seat| seat.name.as_str())
    }

    /// Find a player by display name.
    #[must_use]
    pub fn find_player(&self, name: &str) -> Option<PlayerId> {
        self.seats
            .iter()
            .find(|(_, seat)| seat.name == name)
            .map(|(id, _)| id)
    }

    /// A player's penalty count.
    #[must_use]
    pub fn penalties(&self, player: PlayerId) -> Option<u8> {
        self.seats.get(player).map(|seat| seat.penalties)
    }

    /// A player's mark log.
    #[must_use]
    pub fn marks(&self, player: PlayerId) -> Option<&MarkLog> {
        self.seats.get(player).map(|seat| &seat.marks)
    }

    /// A player's score, derived from their sheet.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> Option<ScoreSheet> {
        self.seats
            .get(player)
            .map(|seat| ScoreSheet::tally(&seat.marks, seat.penalties))
    }

    /// Score for every player, in turn order.
    pub fn scores(&self) -> impl Iterator<Item = (PlayerId, ScoreSheet)> + '_ {
        self.seats
            .iter()
            .map(|(id, seat)| (id, ScoreSheet::tally(&seat.marks, seat.penalties)))
    }

    // === Events ===

    /// Events queued since the last drain, oldest first.
    #[must_use]
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all queued events, leaving the queue empty.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Lifecycle ===

    /// Seat a new player, or return the existing seat for a name that
    /// already joined.
    ///
    /// Rejoining by name works in any lifecycle status; new names are
    /// only seated while the game is waiting and has room.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, EngineError> {
        if let Some(existing) = self.find_player(name) {
            debug!(player = %existing, name, "player rejoined");
            return Ok(existing);
        }

        match self.status {
            GameStatus::Finished => Err(EngineError::GameFinished),
            GameStatus::Active => Err(EngineError::GameAlreadyStarted),
            GameStatus::Waiting => {
                // A config can ask for more seats than `u8` numbering
                // carries; the cap still applies.
                let cap = self.config.max_players.min(MAX_SEATS);
                if self.seats.seat_count() >= cap {
                    return Err(EngineError::GameFull { max: cap });
                }

                let player = self.seats.push(Seat {
                    name: name.to_string(),
                    penalties: 0,
                    marks: MarkLog::new(),
                });
                info!(player = %player, name, "player joined");
                Ok(player)
            }
        }
    }

    /// Start the game. Seat 0 becomes active with dice not yet rolled.
    pub fn start(&mut self) -> Result<(), EngineError> {
        match self.status {
            GameStatus::Finished => Err(EngineError::GameFinished),
            GameStatus::Active => Err(EngineError::GameAlreadyStarted),
            GameStatus::Waiting => {
                if self.seats.seat_count() < self.config.min_players {
                    return Err(EngineError::NotEnoughPlayers {
                        min: self.config.min_players,
                    });
                }

                self.status = GameStatus::Active;
                info!(players = self.seats.seat_count(), "game started");
                Ok(())
            }
        }
    }

    // === Turn operations ===

    /// Record the turn's dice roll.
    ///
    /// Only the active player may roll, once per turn. The engine never
    /// rolls on its own; hosts usually produce the roll with
    /// [`crate::core::DiceRng`].
    pub fn roll_dice(&mut self, player: PlayerId, roll: DiceRoll) -> Result<(), EngineError> {
        self.require_active_status()?;
        self.require_seated(player)?;

        if player != self.turn.active_player() {
            return Err(EngineError::NotPlayersTurn { player });
        }
        if self.turn.dice_rolled() {
            return Err(EngineError::DiceAlreadyRolled);
        }
        if !roll.is_valid() {
            return Err(EngineError::InvalidDice);
        }

        self.turn.set_roll(roll);
        self.events.push(GameEvent::DiceRolled { player, roll });
        debug!(player = %player, ?roll, "dice rolled");
        Ok(())
    }

    /// Every legal mark for a player under the current dice.
    ///
    /// Empty when the game is not active or the dice have not been
    /// rolled this turn.
    pub fn possible_moves(&self, player: PlayerId) -> Result<MoveList, EngineError> {
        let seat = self
            .seats
            .get(player)
            .ok_or(EngineError::UnknownPlayer { player })?;

        if self.status != GameStatus::Active || !self.turn.dice_rolled() {
            return Ok(MoveList::new());
        }

        Ok(enumerate::possible_moves(
            &seat.marks,
            &self.lanes,
            self.turn.dice(),
            self.turn.white_used(),
            self.turn.colored_used(),
            player == self.turn.active_player(),
        ))
    }

    /// Whether a mark would be legal on the board for this player,
    /// ignoring turn budgets and dice.
    #[must_use]
    pub fn is_valid_mark(&self, player: PlayerId, color: LaneColor, number: u8) -> bool {
        self.seats
            .get(player)
            .map(|seat| validate::is_valid_mark(&seat.marks, &self.lanes[color], number))
            .unwrap_or(false)
    }

    /// Apply one mark for a player.
    ///
    /// A white-kind mark is open to any seated player; a colored-kind
    /// mark only to the active player. When the active player has spent
    /// both budgets the turn closes automatically.
    pub fn apply_move(
        &mut self,
        player: PlayerId,
        mv: CandidateMove,
    ) -> Result<MoveOutcome, EngineError> {
        self.apply_move_inner(player, mv, true)
    }

    /// End the active player's turn explicitly, optionally taking a
    /// penalty for making no move.
    pub fn end_turn(
        &mut self,
        player: PlayerId,
        forced_penalty: bool,
    ) -> Result<TurnOutcome, EngineError> {
        self.require_active_status()?;
        self.require_seated(player)?;

        if player != self.turn.active_player() {
            return Err(EngineError::NotPlayersTurn { player });
        }

        if forced_penalty {
            self.assign_penalty(player);
        }
        let turn_advanced = self.close_turn();

        Ok(TurnOutcome {
            penalty_assigned: forced_penalty,
            turn_advanced,
            game_finished: self.is_finished(),
        })
    }

    /// Apply a batch of already-decided moves, then close the turn.
    ///
    /// Moves are applied in seat order, each player's list in the given
    /// order, under the same checks as [`Game::apply_move`]. Unless
    /// `skip_penalty` is set, the active player takes a penalty when
    /// their move list contains no colored-kind move.
    ///
    /// The batch is transactional: if any move is rejected, or a mark
    /// ends the game so that a later move becomes illegal, the whole
    /// call fails and the game is unchanged.
    pub fn process_turn(
        &mut self,
        moves: &FxHashMap<PlayerId, Vec<CandidateMove>>,
        skip_penalty: bool,
    ) -> Result<TurnOutcome, EngineError> {
        self.require_active_status()?;
        if self.seats.is_empty() {
            return Err(EngineError::NoPlayers);
        }
        if let Some(&player) = moves.keys().find(|p| !self.seats.contains(**p)) {
            return Err(EngineError::UnknownPlayer { player });
        }

        // Stage the whole batch on a clone; the mark logs make that
        // cheap. Commit only if every step succeeds.
        let mut staged = self.clone();

        for player in self.player_ids() {
            if let Some(list) = moves.get(&player) {
                for &mv in list {
                    staged.apply_move_inner(player, mv, false)?;
                }
            }
        }

        // The penalty lands before the termination check, so a batch
        // whose own mark ends the game still costs the active player
        // their skipped colored move.
        let mut penalty_assigned = false;
        if !skip_penalty {
            let active = staged.turn.active_player();
            let has_colored = moves
                .get(&active)
                .is_some_and(|list| list.iter().any(|m| m.kind == MoveKind::Colored));
            if !has_colored {
                staged.assign_penalty(active);
                penalty_assigned = true;
            }
        }

        let turn_advanced = staged.close_turn();
        let outcome = TurnOutcome {
            penalty_assigned,
            turn_advanced,
            game_finished: staged.is_finished(),
        };

        *self = staged;
        Ok(outcome)
    }

    // === Internals ===

    fn require_active_status(&self) -> Result<(), EngineError> {
        match self.status {
            GameStatus::Active => Ok(()),
            GameStatus::Finished => Err(EngineError::GameFinished),
            GameStatus::Waiting => Err(EngineError::GameNotActive {
                status: self.status,
            }),
        }
    }

    fn require_seated(&self, player: PlayerId) -> Result<(), EngineError> {
        if self.seats.contains(player) {
            Ok(())
        } else {
            Err(EngineError::UnknownPlayer { player })
        }
    }

    fn apply_move_inner(
        &mut self,
        player: PlayerId,
        mv: CandidateMove,
        auto_advance: bool,
    ) -> Result<MoveOutcome, EngineError> {
        self.require_active_status()?;
        self.require_seated(player)?;

        if !self.turn.dice_rolled() {
            return Err(EngineError::DiceNotRolled);
        }
        let budget_spent = match mv.kind {
            MoveKind::White => self.turn.white_used(),
            MoveKind::Colored => self.turn.colored_used(),
        };
        if budget_spent {
            return Err(EngineError::MoveAlreadyUsed { kind: mv.kind });
        }
        if mv.kind == MoveKind::Colored && player != self.turn.active_player() {
            return Err(EngineError::NotActivePlayer { player });
        }

        let seat = &self.seats[player];
        if !validate::is_valid_mark(&seat.marks, &self.lanes[mv.color], mv.number) {
            return Err(EngineError::InvalidMove {
                player,
                color: mv.color,
                number: mv.number,
            });
        }

        // All checks passed; from here the move commits in full.
        let locks = mv.number == self.lanes[mv.color].last_number();

        self.seats[player].marks.record(Mark::new(mv.color, mv.number));
        match mv.kind {
            MoveKind::White => self.turn.use_white(),
            MoveKind::Colored => self.turn.use_colored(),
        }
        self.events.push(GameEvent::MarkPlaced {
            player,
            color: mv.color,
            number: mv.number,
            kind: mv.kind,
        });
        debug!(player = %player, color = %mv.color, number = mv.number, kind = %mv.kind, "mark placed");

        if locks {
            self.lanes.lock(mv.color);
            self.events.push(GameEvent::LaneLocked {
                color: mv.color,
                by: player,
            });
            info!(color = %mv.color, by = %player, "lane locked");
            self.evaluate_termination();
        }

        let mut turn_advanced = false;
        if auto_advance
            && !self.is_finished()
            && player == self.turn.active_player()
            && self.turn.both_moves_used()
        {
            turn_advanced = self.close_turn();
        }

        Ok(MoveOutcome {
            locked: locks.then_some(mv.color),
            turn_advanced,
            game_finished: self.is_finished(),
        })
    }

    fn assign_penalty(&mut self, player: PlayerId) {
        let seat = &mut self.seats[player];
        seat.penalties = seat.penalties.saturating_add(1);
        let total = seat.penalties;

        self.events.push(GameEvent::PenaltyAssigned { player, total });
        if total >= self.config.penalty_limit {
            info!(player = %player, total, "penalty limit reached");
        } else {
            debug!(player = %player, total, "penalty assigned");
        }
    }

    /// The one turn-closing routine: evaluate termination, and advance
    /// the turn only if the game continues. Returns whether it advanced.
    fn close_turn(&mut self) -> bool {
        if self.evaluate_termination() {
            return false;
        }

        self.turn.advance(self.seats.seat_count());
        let active = self.turn.active_player();
        self.events.push(GameEvent::TurnAdvanced { active });
        debug!(active = %active, "turn advanced");
        true
    }

    /// Check both termination conditions and finish the game if either
    /// holds. Idempotent once finished.
    fn evaluate_termination(&mut self) -> bool {
        if self.status == GameStatus::Finished {
            return true;
        }

        let locked_lanes = self.lanes.locked_count();
        let max_penalties = self
            .seats
            .iter()
            .map(|(_, seat)| seat.penalties)
            .max()
            .unwrap_or(0);

        if locked_lanes >= self.config.lanes_to_finish
            || max_penalties >= self.config.penalty_limit
        {
            self.status = GameStatus::Finished;
            self.events.push(GameEvent::GameFinished);
            info!(locked_lanes, max_penalties, "game finished");
            true
        } else {
            false
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
