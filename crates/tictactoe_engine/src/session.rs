//! Turn-by-turn game state machine.
//!
//! ```text
//! NotStarted ──start──▶ HumanTurn ⇄ AutomatedTurn ──▶ Ended(Outcome)
//!      │                    │             │
//!      └────────abort───────┴─────────────┴──▶ Aborted
//! ```
//!
//! `Ended` and `Aborted` are terminal until `start` is called again. The
//! board, phase and move log all live here; the engine functions are only
//! consulted for evaluation and the automated reply.

use super::action::Move;
use super::error::SessionError;
use super::outcome::Outcome;
use super::position::Position;
use super::rules;
use super::search;
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Phase of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Phase {
    /// Waiting for a new game.
    #[display("Not started")]
    NotStarted,
    /// The human places the next marker.
    #[display("Human to move")]
    HumanTurn,
    /// The engine places the next marker.
    #[display("Automated to move")]
    AutomatedTurn,
    /// Game over with the given outcome.
    #[display("{}", _0)]
    Ended(Outcome),
    /// Quit before the game finished.
    #[display("Aborted")]
    Aborted,
}

impl Phase {
    /// Whether no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Ended(_) | Phase::Aborted)
    }

    /// Side whose turn it is, if any.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            Phase::HumanTurn => Some(Player::Human),
            Phase::AutomatedTurn => Some(Player::Automated),
            Phase::NotStarted | Phase::Ended(_) | Phase::Aborted => None,
        }
    }

    fn turn_of(player: Player) -> Self {
        match player {
            Player::Human => Phase::HumanTurn,
            Player::Automated => Phase::AutomatedTurn,
        }
    }
}

/// One game between the human and the engine.
///
/// Deserializing rebuilds the game from its move log, so a record whose
/// board or phase disagrees with the log is refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct Session {
    board: Board,
    phase: Phase,
    history: Vec<Move>,
}

/// Unchecked wire form of a [`Session`].
#[derive(Deserialize)]
struct SessionRecord {
    board: Board,
    phase: Phase,
    history: Vec<Move>,
}

impl TryFrom<SessionRecord> for Session {
    type Error = SessionError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        let mut session = if record.phase == Phase::NotStarted && record.history.is_empty() {
            Self::new()
        } else {
            Self::replay(&record.history)?
        };
        if record.phase == Phase::Aborted && !session.phase.is_terminal() {
            session.phase = Phase::Aborted;
        }

        if session.board != record.board || session.phase != record.phase {
            warn!(
                phase = %record.phase,
                moves = record.history.len(),
                "Rejected saved session"
            );
            return Err(SessionError::MismatchedRecord);
        }
        Ok(session)
    }
}

impl Session {
    /// Creates a session that has not started yet.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: Phase::NotStarted,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the move log.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The outcome, once the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Clears the board and hands the first move to the human.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InProgress`] while a game is still running.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.phase.to_move().is_some() {
            warn!("Start requested during a running game");
            return Err(SessionError::InProgress);
        }
        self.board = Board::new();
        self.history.clear();
        self.phase = Phase::HumanTurn;
        info!("New game started");
        Ok(())
    }

    /// Places the human's marker and returns the phase that follows.
    ///
    /// # Errors
    ///
    /// Fails outside [`Phase::HumanTurn`] or on an occupied square.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn play_human(&mut self, position: Position) -> Result<Phase, SessionError> {
        self.place(Move::new(Player::Human, position))
    }

    /// Lets the engine choose and place its marker.
    ///
    /// # Errors
    ///
    /// Fails outside [`Phase::AutomatedTurn`].
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn play_automated(&mut self) -> Result<Position, SessionError> {
        self.expect_turn(Player::Automated)?;
        let position = search::select_move(&self.board)?;
        self.place(Move::new(Player::Automated, position))?;
        Ok(position)
    }

    /// Abandons the game regardless of the board.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyFinished`] if the game has already
    /// ended or been aborted.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn abort(&mut self) -> Result<(), SessionError> {
        if self.phase.is_terminal() {
            return Err(SessionError::AlreadyFinished(self.phase));
        }
        self.phase = Phase::Aborted;
        info!(moves = self.history.len(), "Game aborted");
        Ok(())
    }

    /// Starts a session and applies a recorded move log.
    ///
    /// Every move goes through the same turn and occupancy checks as live
    /// play; the automated moves are taken as recorded, not recomputed.
    ///
    /// # Errors
    ///
    /// Returns the first rejected move's error.
    #[instrument(skip(moves), fields(len = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, SessionError> {
        let mut session = Self::new();
        session.start()?;
        for action in moves {
            session.place(*action)?;
        }
        Ok(session)
    }

    fn expect_turn(&self, player: Player) -> Result<(), SessionError> {
        match (self.phase, player) {
            (Phase::NotStarted, _) => Err(SessionError::NotStarted),
            (phase, _) if phase.is_terminal() => Err(SessionError::AlreadyFinished(phase)),
            (phase, player) if phase.to_move() == Some(player) => Ok(()),
            (_, Player::Human) => Err(SessionError::NotHumanTurn),
            (_, Player::Automated) => Err(SessionError::NotAutomatedTurn),
        }
    }

    fn place(&mut self, action: Move) -> Result<Phase, SessionError> {
        self.expect_turn(action.player)?;
        if !self.board.is_empty(action.position) {
            warn!(position = %action.position, "Square already occupied");
            return Err(SessionError::SquareOccupied(action.position));
        }

        self.board
            .set(action.position, Square::Occupied(action.player));
        self.history.push(action);
        debug_assert!(self.board.is_consistent(), "Board consistency violated");

        let outcome = rules::evaluate(&self.board);
        self.phase = if outcome.is_terminal() {
            info!(%outcome, "Game over");
            Phase::Ended(outcome)
        } else {
            Phase::turn_of(action.player.opponent())
        };
        info!(%action, phase = %self.phase, "Move applied");
        Ok(self.phase)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
