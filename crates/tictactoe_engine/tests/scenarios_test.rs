//! Fixed positions with a single correct answer.

use tictactoe_engine::{
    Board, EngineError, Outcome, Player, Position, Square, analyze, evaluate, select_move,
};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

#[test]
fn test_immediate_win_completes_top_row() {
    // O O _ / X X _ / _ _ _
    assert_eq!(select_move(&board("OO_XX____")), Ok(Position::TopRight));
}

#[test]
fn test_must_block_top_row() {
    // X X _ / O _ _ / _ _ _
    let b = board("XX_O_____");
    assert_eq!(select_move(&b), Ok(Position::TopRight));
}

#[test]
fn test_forced_block_on_column() {
    // X O _ / X _ _ / _ _ _ : X threatens 6, O has no win
    assert_eq!(select_move(&board("XO_X_____")), Ok(Position::BottomLeft));
}

#[test]
fn test_corner_opening_gets_center() {
    assert_eq!(select_move(&board("X________")), Ok(Position::Center));
}

#[test]
fn test_center_opening_gets_corner() {
    // Edges lose against a center opening; the first corner is chosen.
    assert_eq!(select_move(&board("____X____")), Ok(Position::TopLeft));
}

#[test]
fn test_win_precedes_full_board() {
    // O O O / X X O / X O X with no empty square
    let b = board("OOOXXOXOX");
    assert!(b.is_full());
    assert_eq!(evaluate(&b), Outcome::AutomatedWins);
}

#[test]
fn test_precondition_failures() {
    assert_eq!(
        select_move(&board("XOXOXXOXO")),
        Err(EngineError::GameOver(Outcome::Draw))
    );
    assert_eq!(
        select_move(&board("OOO_XX_X_")),
        Err(EngineError::GameOver(Outcome::AutomatedWins))
    );
}

#[test]
fn test_analysis_lists_only_empty_cells() {
    let b = board("X___O___X");
    let analysis = analyze(&b, Player::Automated).unwrap();
    let listed: Vec<_> = analysis.moves.iter().map(|m| m.position).collect();
    assert_eq!(listed, Position::valid_moves(&b));
    assert!(listed.iter().all(|p| b.get(*p) == Square::Empty));
    // Against X on opposite corners, O must take an edge; corners lose.
    assert_eq!(analysis.best.position, Position::TopCenter);
    assert_eq!(analysis.forced_outcome(), Outcome::Draw);
}
