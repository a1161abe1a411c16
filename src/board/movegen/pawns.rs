use super::super::{GameState, Move, Piece, Square};
use super::on_pin_axis;

impl GameState {
    pub(crate) fn pawn_moves(
        &self,
        from: Square,
        pin: Option<(isize, isize)>,
        moves: &mut Vec<Move>,
    ) {
        let pos = &self.position;
        let us = pos.side_to_move;
        let forward = us.pawn_direction();
        let allowed = |direction| pin.map_or(true, |p| on_pin_axis(p, direction));

        if let Some(one) = from.offset(forward, 0) {
            if pos.is_empty(one) && allowed((forward, 0)) {
                moves.extend(Move::new(from, one, pos));
                if from.rank() == us.pawn_start_rank() {
                    if let Some(two) = from.offset(2 * forward, 0) {
                        if pos.is_empty(two) {
                            moves.extend(Move::new(from, two, pos));
                        }
                    }
                }
            }
        }

        for d_file in [-1, 1] {
            let Some(target) = from.offset(forward, d_file) else {
                continue;
            };
            if !allowed((forward, d_file)) {
                continue;
            }
            if pos.color_on(target) == Some(us.opponent()) {
                moves.extend(Move::new(from, target, pos));
            } else if pos.en_passant_target == Some(target)
                && pos.piece_at(Square(from.rank(), target.file()))
                    == Some((us.opponent(), Piece::Pawn))
                && !self.en_passant_exposes_king(from, target)
            {
                moves.extend(Move::en_passant(from, target, pos));
            }
        }
    }

    /// Whether capturing en passant from `from` onto `target` would open
    /// the shared rank between the king and an enemy rook or queen.
    ///
    /// Both pawns leave that rank at once, which the pin scan cannot see,
    /// so the rank is walked from the king with the two pawn squares
    /// treated as empty.
    fn en_passant_exposes_king(&self, from: Square, target: Square) -> bool {
        let pos = &self.position;
        let us = pos.side_to_move;
        let king = pos.king_square(us);
        if king.rank() != from.rank() {
            return false;
        }

        let step: isize = if king.file() < from.file() { 1 } else { -1 };
        let mut sq = king;
        while let Some(next) = sq.offset(0, step) {
            sq = next;
            if sq.file() == from.file() || sq.file() == target.file() {
                continue;
            }
            if let Some((color, piece)) = pos.piece_at(sq) {
                return color != us && piece.attacks_straight();
            }
        }
        false
    }
}
