//! Search tests to verify the engine finds sensible moves through the
//! public API.

use negamax_chess::board::{find_best_move, find_random_move, GameState, Piece, Square};

/// Test that the engine finds a simple mate in 1
#[test]
fn finds_mate_in_one_back_rank() {
    // White to move, Qe8# is mate
    let mut game = GameState::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1").expect("valid FEN");
    let moves = game.get_valid_moves();

    let best = find_best_move(&mut game, &moves).expect("Should find a move");
    assert_eq!(best.to_string(), "Qe8", "Should find Qe8# (back rank mate)");
}

/// Test that the engine finds scholar's mate
#[test]
fn finds_mate_in_one_queen() {
    let mut game = GameState::from_fen(
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 4",
    )
    .expect("valid FEN");
    let moves = game.get_valid_moves();

    let best = find_best_move(&mut game, &moves).expect("Should find a move");
    game.make_move(best);
    assert!(game.get_valid_moves().is_empty());
    assert!(game.is_checkmate(), "{best} is not mate");
}

/// Test that the engine takes a free piece
#[test]
fn captures_undefended_rook() {
    let mut game = GameState::from_fen("4k3/8/8/8/8/2r5/8/2R1K3 w - - 0 1").expect("valid FEN");
    let moves = game.get_valid_moves();

    let best = find_best_move(&mut game, &moves).expect("Should find a move");
    assert_eq!(best.to(), Square(2, 2), "Should capture the rook on c3");
}

/// Test that the engine does not leave its queen en prise
#[test]
fn saves_attacked_queen() {
    // The pawn on d6 attacks the queen on e5.
    let mut game = GameState::from_fen("k7/8/3p4/4Q3/8/8/8/4K3 w - - 0 1").expect("valid FEN");
    let moves = game.get_valid_moves();

    let best = find_best_move(&mut game, &moves).expect("Should find a move");
    game.make_move(best);
    let replies = game.get_valid_moves();
    assert!(
        !replies
            .iter()
            .any(|mv| matches!(mv.piece_captured(), Some((_, Piece::Queen)))),
        "queen left en prise after {best}"
    );
}

/// Self-play stays consistent over a short game
#[test]
fn short_self_play_game() {
    let mut game = GameState::new();
    for _ in 0..6 {
        let moves = game.get_valid_moves();
        if moves.is_empty() {
            break;
        }
        let mv = find_best_move(&mut game, &moves)
            .or_else(|| find_random_move(&moves))
            .expect("legal moves exist");
        assert!(moves.contains(&mv));
        game.make_move(mv);
    }
    assert_eq!(game.move_log().len(), 6);
    assert_eq!(game.transcript().len(), 3);
}
