//! Exhaustive unbeatability report.

use tictactoe_cli::verify_unbeatable;

#[test]
fn test_engine_is_unbeatable() {
    let report = verify_unbeatable().unwrap();
    assert!(report.is_unbeatable(), "{report:?}");
    assert_eq!(
        report.games,
        report.automated_wins + report.draws + report.human_wins
    );
    assert!(report.draws > 0);
    assert!(report.automated_wins > 0);
}
