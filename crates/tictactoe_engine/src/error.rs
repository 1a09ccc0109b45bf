//! Error types for the engine and the session state machine.

use super::outcome::Outcome;
use super::position::Position;
use super::session::Phase;

/// A board that cannot be represented as nine valid squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The input did not describe exactly nine squares.
    #[display("Board must have exactly 9 squares, got {}", _0)]
    WrongLength(#[error(not(source))] usize),

    /// A square held something other than X, O or an empty marker.
    #[display("Unknown square symbol {:?}", _0)]
    UnknownSymbol(#[error(not(source))] char),

    /// A cell index outside 0-8.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),
}

/// The move selector was asked for a move it cannot give.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    /// The board is already won or drawn.
    #[display("No move to select: game is already over ({})", _0)]
    GameOver(#[error(not(source))] Outcome),
}

/// A session operation that is illegal in the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// No game has been started yet.
    #[display("Game has not been started")]
    NotStarted,

    /// A human move arrived outside the human's turn.
    #[display("It's not the human's turn")]
    NotHumanTurn,

    /// An automated move was requested outside the automated turn.
    #[display("It's not the automated side's turn")]
    NotAutomatedTurn,

    /// The game has ended or was aborted.
    #[display("Game is already over ({})", _0)]
    AlreadyFinished(#[error(not(source))] Phase),

    /// A new game was requested while one is still running.
    #[display("A game is already in progress; abort it first")]
    InProgress,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// A saved session whose board or phase does not follow from its move log.
    #[display("Saved session does not match its move log")]
    MismatchedRecord,

    /// The move selector rejected the board.
    #[display("{}", _0)]
    Engine(EngineError),
}

impl From<EngineError> for SessionError {
    fn from(err: EngineError) -> Self {
        SessionError::Engine(err)
    }
}
