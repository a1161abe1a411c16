//! Legal move generation.
//!
//! Legality is decided up front rather than by playing each move and
//! testing the king:
//! - rays cast from the king find pins and checks (`pins.rs`);
//! - each piece generator honours its pin axis;
//! - a single check keeps only king moves and moves landing on the
//!   block/capture squares, a double check keeps only king moves;
//! - king moves are tried by moving the cached king square and re-casting
//!   the rays from there.
//!
//! Castling uses a different attack test: it enumerates the opponent's
//! pseudo-legal moves and looks for one that lands on the square.

mod kings;
mod knights;
mod pawns;
mod pins;
mod sliders;

pub(crate) use pins::{Check, Pin};
pub(crate) use pins::{DIAGONAL, ORTHOGONAL};

use super::game::Status;
use super::{GameState, Move, Piece, Square};

impl GameState {
    /// All legal moves for the side to move.
    ///
    /// Also refreshes the check, checkmate and stalemate flags: an empty
    /// result is checkmate when in check and stalemate otherwise.
    pub fn get_valid_moves(&mut self) -> Vec<Move> {
        let lines = self.scan_king_lines();
        self.pins = lines.pins;
        self.checks = lines.checks;

        let us = self.position.side_to_move;
        let king = self.position.king_square(us);
        let pins = std::mem::take(&mut self.pins);
        let mut moves = Vec::with_capacity(48);

        match self.checks.as_slice() {
            [] => {
                self.possible_moves(&pins, &mut moves);
                self.castle_moves(king, &mut moves);
            }
            [check] => {
                let targets = self.check_response_squares(king, check);
                self.possible_moves(&pins, &mut moves);
                moves.retain(|mv| mv.piece_moved().1 == Piece::King || targets.contains(&mv.to()));
            }
            _ => self.king_moves(king, &mut moves),
        }
        self.pins = pins;

        let in_check = lines.in_check;
        self.status = Status {
            in_check,
            checkmate: moves.is_empty() && in_check,
            stalemate: moves.is_empty() && !in_check,
        };
        moves
    }

    /// Pseudo-legal moves for every piece of the side to move, restricted
    /// only by the given pins. Castling is not included.
    pub(crate) fn possible_moves(&mut self, pins: &[Pin], moves: &mut Vec<Move>) {
        let us = self.position.side_to_move;
        for rank in 0..8 {
            for file in 0..8 {
                let from = Square(rank, file);
                let Some((color, piece)) = self.position.piece_at(from) else {
                    continue;
                };
                if color != us {
                    continue;
                }
                let pin = pins.iter().find(|p| p.square == from).map(|p| p.direction);
                match piece {
                    Piece::Pawn => self.pawn_moves(from, pin, moves),
                    Piece::Knight => self.knight_moves(from, pin, moves),
                    Piece::Bishop => self.slider_moves(from, &DIAGONAL, pin, moves),
                    Piece::Rook => self.slider_moves(from, &ORTHOGONAL, pin, moves),
                    Piece::Queen => {
                        self.slider_moves(from, &DIAGONAL, pin, moves);
                        self.slider_moves(from, &ORTHOGONAL, pin, moves);
                    }
                    Piece::King => self.king_moves(from, moves),
                }
            }
        }
    }

    /// Whether any pseudo-legal move of the opponent lands on `sq`.
    ///
    /// Flips the side to move for the duration of the enumeration; the
    /// history stacks are not touched.
    pub(crate) fn square_under_attack(&mut self, sq: Square) -> bool {
        let us = self.position.side_to_move;
        self.position.side_to_move = us.opponent();
        let mut replies = Vec::with_capacity(48);
        self.possible_moves(&[], &mut replies);
        self.position.side_to_move = us;
        replies.iter().any(|mv| mv.to() == sq)
    }

    /// Squares a non-king move may land on to answer a single check: the
    /// checker itself, plus the squares between it and the king when it
    /// is a slider.
    fn check_response_squares(&self, king: Square, check: &Check) -> Vec<Square> {
        if matches!(
            self.position.piece_at(check.square),
            Some((_, Piece::Knight))
        ) {
            return vec![check.square];
        }
        let (d_rank, d_file) = check.direction;
        let mut squares = Vec::with_capacity(7);
        for distance in 1..8 {
            let Some(sq) = king.offset(d_rank * distance, d_file * distance) else {
                break;
            };
            squares.push(sq);
            if sq == check.square {
                break;
            }
        }
        squares
    }
}

/// Whether a step in `direction` keeps a piece pinned along `pin` on its
/// line (toward or away from the king).
#[inline]
pub(super) fn on_pin_axis(pin: (isize, isize), direction: (isize, isize)) -> bool {
    direction == pin || direction == (-pin.0, -pin.1)
}
