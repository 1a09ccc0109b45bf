//! Tic-tac-toe rules and a perfect-play opponent.
//!
//! The engine is two pure functions over a [`Board`]:
//!
//! - [`evaluate`] reports whether the game is over and how.
//! - [`select_move`] returns the automated side's optimal reply, found by
//!   exhaustive depth-biased minimax. The automated side never loses.
//!
//! [`Session`] wraps them in the turn-by-turn state machine a front end
//! drives (start, human move, automated move, abort).
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, Outcome, Position, evaluate, select_move};
//!
//! let board: Board = "X________".parse()?;
//! assert_eq!(evaluate(&board), Outcome::InProgress);
//! assert_eq!(select_move(&board)?, Position::Center);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod outcome;
mod position;
pub mod rules;
mod search;
mod session;
mod types;

pub use action::Move;
pub use error::{BoardError, EngineError, SessionError};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::evaluate;
pub use search::{Analysis, ScoredMove, analyze, best_move, select_move};
pub use session::{Phase, Session};
pub use types::{Board, Player, Square};
