//! Exhaustive minimax move selection.
//!
//! The game tree from any position has at most 9! leaves, so the search
//! visits all of it without pruning. Trial markers are placed on a private
//! working copy of the board and removed again after each recursive call;
//! the caller's board is only ever borrowed immutably.
//!
//! Scores are taken from the mover's point of view: a win `d` plies away is
//! worth `10 - d`, a loss `d - 10`, a draw `0`. Faster wins and slower
//! losses are therefore preferred. Among equally scored moves the lowest
//! board index wins, so the result is deterministic for a given board.

use super::error::EngineError;
use super::outcome::Outcome;
use super::position::Position;
use super::rules;
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a win reached at the searched position itself.
const WIN_SCORE: i32 = 10;

/// A move candidate together with its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Cell the mover would occupy.
    pub position: Position,
    /// Value of the resulting position for the mover.
    pub score: i32,
}

/// Full result of searching one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Side the search was run for.
    pub mover: Player,
    /// The chosen move.
    pub best: ScoredMove,
    /// Every legal move in index order with its score.
    pub moves: Vec<ScoredMove>,
    /// Positions visited below the root.
    pub nodes: u64,
}

/// Returns the optimal move for the automated side.
///
/// # Errors
///
/// Returns [`EngineError::GameOver`] if the board is already won or full.
/// Callers are expected to check [`rules::evaluate`] first.
pub fn select_move(board: &Board) -> Result<Position, EngineError> {
    best_move(board, Player::Automated)
}

/// Returns the optimal move for `mover`.
///
/// # Errors
///
/// Returns [`EngineError::GameOver`] if the board is already won or full.
pub fn best_move(board: &Board, mover: Player) -> Result<Position, EngineError> {
    analyze(board, mover).map(|analysis| analysis.best.position)
}

/// Scores every legal move for `mover` and picks the best one.
///
/// # Errors
///
/// Returns [`EngineError::GameOver`] if the board is already won or full.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board, mover: Player) -> Result<Analysis, EngineError> {
    let outcome = rules::evaluate(board);
    if outcome.is_terminal() {
        debug!(%outcome, "Refusing to search a finished game");
        return Err(EngineError::GameOver(outcome));
    }

    let mut search = Minimax {
        maximizer: mover,
        nodes: 0,
    };
    let mut work = *board;
    let mut moves = Vec::with_capacity(9);
    let mut best: Option<ScoredMove> = None;

    for position in Position::valid_moves(board) {
        work.set(position, Square::Occupied(mover));
        let score = search.value(&mut work, 1, mover.opponent());
        work.clear(position);

        let candidate = ScoredMove { position, score };
        moves.push(candidate);
        if best.is_none_or(|b| score > b.score) {
            best = Some(candidate);
        }
    }

    // An in-progress board always has an empty square.
    let best = best.ok_or(EngineError::GameOver(outcome))?;
    debug!(
        position = %best.position,
        score = best.score,
        nodes = search.nodes,
        "Search complete"
    );

    Ok(Analysis {
        mover,
        best,
        moves,
        nodes: search.nodes,
    })
}

/// Recursive evaluator. Holds only the side being maximized and a node counter.
struct Minimax {
    maximizer: Player,
    nodes: u64,
}

impl Minimax {
    /// Value of `board` with `to_move` about to play, `depth` plies below the root.
    fn value(&mut self, board: &mut Board, depth: i32, to_move: Player) -> i32 {
        self.nodes += 1;

        match rules::check_winner(board) {
            Some(winner) if winner == self.maximizer => return WIN_SCORE - depth,
            Some(_) => return depth - WIN_SCORE,
            None if rules::is_full(board) => return 0,
            None => {}
        }

        let maximizing = to_move == self.maximizer;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for position in Position::ALL {
            if !board.is_empty(position) {
                continue;
            }
            board.set(position, Square::Occupied(to_move));
            let score = self.value(board, depth + 1, to_move.opponent());
            board.clear(position);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}

impl Analysis {
    /// The outcome the mover can force from this position.
    pub fn forced_outcome(&self) -> Outcome {
        match self.best.score {
            0 => Outcome::Draw,
            s if s > 0 => Outcome::won_by(self.mover),
            _ => Outcome::won_by(self.mover.opponent()),
        }
    }
}
