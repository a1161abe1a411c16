//! Property-based tests using proptest.

use crate::board::{GameState, Piece, Position};
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=20usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Whether both cached king squares point at the matching king on the grid.
fn king_cache_matches(pos: &Position) -> bool {
    crate::board::Color::BOTH.iter().all(|&color| {
        pos.piece_at(pos.king_square(color)) == Some((color, Piece::King))
    })
}

proptest! {
    /// Property: k moves followed by k undos restores the position exactly
    #[test]
    fn prop_make_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut game = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = game.position().clone();

        let mut played = 0;
        for _ in 0..num_moves {
            let moves = game.get_valid_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            game.make_move(mv);
            played += 1;
        }
        prop_assert_eq!(game.history_len(), played);

        for _ in 0..played {
            game.undo_move();
        }
        prop_assert_eq!(game.position(), &initial);
        prop_assert_eq!(game.castling_rights_log.len(), 1);
        prop_assert_eq!(game.en_passant_log.len(), 1);
    }

    /// Property: the cached king squares always match the grid
    #[test]
    fn prop_king_cache_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut game = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = game.get_valid_moves();
            prop_assert!(king_cache_matches(game.position()));
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            game.make_move(mv);
            prop_assert!(king_cache_matches(game.position()));
        }

        while game.history_len() > 0 {
            game.undo_move();
            prop_assert!(king_cache_matches(game.position()));
        }
    }

    /// Property: no generated move leaves the mover's king attacked
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy()) {
        let mut game = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..10 {
            let moves = game.get_valid_moves();
            if moves.is_empty() {
                break;
            }

            let mover = game.side_to_move();
            for &mv in &moves {
                game.make_move(mv);
                game.position.side_to_move = mover;
                let exposed = game.scan_king_lines().in_check;
                game.position.side_to_move = mover.opponent();
                game.undo_move();
                prop_assert!(!exposed, "Legal move left king in check: {}", mv);
            }

            let mv = moves[rng.gen_range(0..moves.len())];
            game.make_move(mv);
        }
    }

    /// Property: checkmate and stalemate exclude each other and are both
    /// false while moves exist
    #[test]
    fn prop_terminal_flags_exclusive(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut game = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = game.get_valid_moves();
            prop_assert!(!(game.is_checkmate() && game.is_stalemate()));
            if moves.is_empty() {
                prop_assert!(game.is_checkmate() || game.is_stalemate());
                prop_assert_eq!(game.is_checkmate(), game.is_in_check());
                break;
            }
            prop_assert!(!game.is_checkmate());
            prop_assert!(!game.is_stalemate());
            let mv = moves[rng.gen_range(0..moves.len())];
            game.make_move(mv);
        }
    }

    /// Property: FEN round-trip preserves the position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut game = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = game.get_valid_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            game.make_move(mv);
        }

        let fen = game.to_fen();
        let restored = Position::try_from_fen(&fen);
        prop_assert_eq!(restored.as_ref(), Ok(game.position()));
    }
}
