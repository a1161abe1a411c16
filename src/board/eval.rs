//! Static evaluation: material plus piece-square bonuses, in centipawns
//! from White's point of view.

use super::{pst, Color, GameState};

/// Magnitude of a checkmate score.
pub const MATE_SCORE: i32 = 1_000_000;

pub const STALEMATE_SCORE: i32 = 0;

/// Score the position from White's side.
///
/// Terminal flags from the last [`GameState::get_valid_moves`] call take
/// precedence: a mated side to move scores `-MATE_SCORE` from its own
/// colour's perspective, and stalemate is exactly zero.
#[must_use]
pub fn score_board(state: &GameState) -> i32 {
    if state.is_checkmate() {
        return match state.side_to_move() {
            Color::White => -MATE_SCORE,
            Color::Black => MATE_SCORE,
        };
    }
    if state.is_stalemate() {
        return STALEMATE_SCORE;
    }

    state
        .position()
        .pieces()
        .map(|(sq, color, piece)| color.sign() * (piece.value() + pst::bonus(color, piece, sq)))
        .sum()
}
