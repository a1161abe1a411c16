//! Move type.

use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::Position;

/// A single transition between two squares.
///
/// The captured piece is read off the board at construction time, except
/// for en passant where the opposing pawn is synthesized because it does
/// not stand on the destination square.
///
/// Equality and hashing only look at the origin/destination pair (see
/// [`Move::id`]), so a move built from raw coordinates compares equal to
/// the generated move with the same squares regardless of flags.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    piece_moved: (Color, Piece),
    piece_captured: Option<(Color, Piece)>,
    is_en_passant: bool,
    is_castle: bool,
    is_pawn_promotion: bool,
}

impl Move {
    /// Build an ordinary move (push, capture, or promotion) from the
    /// pieces currently on `position`.
    ///
    /// Returns `None` when either square is off the board or the origin
    /// square is empty.
    #[must_use]
    pub fn new(from: Square, to: Square, position: &Position) -> Option<Self> {
        Self::build(from, to, position, false, false)
    }

    /// Build an en passant capture.
    #[must_use]
    pub fn en_passant(from: Square, to: Square, position: &Position) -> Option<Self> {
        Self::build(from, to, position, true, false)
    }

    /// Build a castling move. `from`/`to` are the king's squares.
    #[must_use]
    pub fn castle(from: Square, to: Square, position: &Position) -> Option<Self> {
        Self::build(from, to, position, false, true)
    }

    fn build(
        from: Square,
        to: Square,
        position: &Position,
        is_en_passant: bool,
        is_castle: bool,
    ) -> Option<Self> {
        Square::new(from.rank(), from.file())?;
        Square::new(to.rank(), to.file())?;
        let piece_moved = position.piece_at(from)?;
        let (color, piece) = piece_moved;
        let piece_captured = if is_en_passant {
            Some((color.opponent(), Piece::Pawn))
        } else {
            position.piece_at(to)
        };
        let is_pawn_promotion = piece == Piece::Pawn && to.rank() == color.pawn_promotion_rank();

        Some(Move {
            from,
            to,
            piece_moved,
            piece_captured,
            is_en_passant,
            is_castle,
            is_pawn_promotion,
        })
    }

    /// Origin square
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    /// Destination square
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// The moving piece and its color
    #[inline]
    #[must_use]
    pub const fn piece_moved(&self) -> (Color, Piece) {
        self.piece_moved
    }

    /// The captured piece, if any (synthesized for en passant)
    #[inline]
    #[must_use]
    pub const fn piece_captured(&self) -> Option<(Color, Piece)> {
        self.piece_captured
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(&self) -> bool {
        self.is_castle
    }

    /// True iff a pawn reaches the far rank. Promotion is always to a queen.
    #[inline]
    #[must_use]
    pub const fn is_pawn_promotion(&self) -> bool {
        self.is_pawn_promotion
    }

    /// Identity used for equality: origin rank, origin file, destination
    /// rank and destination file as the four decimal digits.
    ///
    /// Ranks are counted from White's back rank (rank index 0 is the first
    /// rank), so e2e4 is `1434`. Row-from-the-top encodings give the same
    /// equality but different numbers.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> u16 {
        (self.from.0 * 1000 + self.from.1 * 100 + self.to.0 * 10 + self.to.1) as u16
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PositionBuilder;

    #[test]
    fn test_move_reads_pieces_from_board() {
        let pos = Position::new();
        let mv = Move::new(Square(1, 4), Square(3, 4), &pos).expect("pawn on e2");
        assert_eq!(mv.piece_moved(), (Color::White, Piece::Pawn));
        assert_eq!(mv.piece_captured(), None);
        assert!(!mv.is_capture());
        assert!(!mv.is_pawn_promotion());
    }

    #[test]
    fn test_empty_origin_yields_none() {
        let pos = Position::new();
        assert!(Move::new(Square(3, 3), Square(4, 3), &pos).is_none());
    }

    #[test]
    fn test_en_passant_synthesizes_captured_pawn() {
        let pos = PositionBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(7, 4), Color::Black, Piece::King)
            .piece(Square(4, 4), Color::White, Piece::Pawn)
            .piece(Square(4, 3), Color::Black, Piece::Pawn)
            .en_passant(Square(5, 3))
            .build()
            .expect("valid position");
        let mv = Move::en_passant(Square(4, 4), Square(5, 3), &pos).expect("pawn on e5");
        assert_eq!(mv.piece_captured(), Some((Color::Black, Piece::Pawn)));
        assert!(mv.is_en_passant());
        assert!(mv.is_capture());
    }

    #[test]
    fn test_promotion_flag_only_on_far_rank() {
        let pos = PositionBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(7, 7), Color::Black, Piece::King)
            .piece(Square(6, 0), Color::White, Piece::Pawn)
            .piece(Square(1, 1), Color::Black, Piece::Pawn)
            .build()
            .expect("valid position");
        let white = Move::new(Square(6, 0), Square(7, 0), &pos).expect("pawn on a7");
        assert!(white.is_pawn_promotion());
        let black = Move::new(Square(1, 1), Square(0, 1), &pos).expect("pawn on b2");
        assert!(black.is_pawn_promotion());
        let king = Move::new(Square(0, 4), Square(1, 4), &pos).expect("king on e1");
        assert!(!king.is_pawn_promotion());
    }

    #[test]
    fn test_equality_ignores_flags() {
        let pos = Position::new();
        let plain = Move::new(Square(0, 4), Square(0, 6), &pos).expect("king on e1");
        let castle = Move::castle(Square(0, 4), Square(0, 6), &pos).expect("king on e1");
        assert_eq!(plain, castle);
        assert_eq!(plain.id(), 406);
        let other = Move::new(Square(0, 4), Square(0, 2), &pos).expect("king on e1");
        assert_ne!(plain, other);
    }

    #[test]
    fn test_off_board_squares_yield_none() {
        let pos = Position::new();
        assert!(Move::new(Square(8, 0), Square(0, 0), &pos).is_none());
        assert!(Move::new(Square(0, 4), Square(0, 8), &pos).is_none());
        assert!(Move::castle(Square(0, 4), Square(9, 9), &pos).is_none());
    }

    #[test]
    fn test_id_encodes_all_four_coordinates() {
        let pos = Position::new();
        let mv = Move::new(Square(7, 6), Square(5, 5), &pos).expect("knight on g8");
        assert_eq!(mv.id(), 7655);
        let push = Move::new(Square(1, 4), Square(3, 4), &pos).expect("pawn on e2");
        assert_eq!(push.id(), 1434);
    }
}
