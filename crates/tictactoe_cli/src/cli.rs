//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_engine::{Board, Player};

/// Unbeatable tic-tac-toe engine
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Evaluate boards and play against a perfect tic-tac-toe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config (defaults are used if it does not exist)
    #[arg(long, global = true, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Side to search for.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// X, moves first
    Human,
    /// O, the engine
    Automated,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Human => Player::Human,
            Side::Automated => Player::Automated,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report whether a board is won, drawn or still in progress
    Evaluate {
        /// Board as 9 cells, row-major: X, O, or _ for empty (e.g. "OO_XX____")
        board: Board,
    },

    /// Print the optimal move for a board
    BestMove {
        /// Board as 9 cells, row-major: X, O, or _ for empty
        board: Board,

        /// Side to move
        #[arg(long, value_enum, default_value = "automated")]
        side: Side,

        /// Print the full analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play scripted human keys (1-9, q to quit) against the engine
    Play {
        /// Keys in order, e.g. "1 9 q"
        keys: String,

        /// Skip the thinking delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Let the engine play both sides
    Demo {
        /// Skip the thinking delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Check every human strategy and confirm the engine never loses
    Verify,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::Position;

    #[test]
    fn test_best_move_defaults() {
        let cli = Cli::try_parse_from(["tictactoe", "best-move", "OO_/XX_/___"]).unwrap();
        assert_eq!(cli.config, std::path::PathBuf::from("tictactoe.toml"));
        match cli.command {
            Command::BestMove { board, side, json } => {
                assert_eq!(board, "OO_XX____".parse::<Board>().unwrap());
                assert!(board.is_empty(Position::TopRight));
                assert_eq!(side, Side::Automated);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tictactoe", "best-move", "X________", "--side", "human", "--config", "other.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, std::path::PathBuf::from("other.toml"));
        assert!(matches!(
            cli.command,
            Command::BestMove {
                side: Side::Human,
                ..
            }
        ));
        assert_eq!(Player::from(Side::Human), Player::Human);
    }

    #[test]
    fn test_malformed_board_rejected() {
        assert!(Cli::try_parse_from(["tictactoe", "evaluate", "XOZ______"]).is_err());
        assert!(Cli::try_parse_from(["tictactoe", "evaluate", "XO"]).is_err());
    }

    #[test]
    fn test_play_keys_and_flag() {
        let cli = Cli::try_parse_from(["tictactoe", "play", "1 9 q", "--no-delay"]).unwrap();
        match cli.command {
            Command::Play { keys, no_delay } => {
                assert_eq!(keys, "1 9 q");
                assert!(no_delay);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
