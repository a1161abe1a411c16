use super::super::{GameState, Move, Piece, Square};
use super::{DIAGONAL, ORTHOGONAL};

impl GameState {
    /// King steps that do not end in check.
    ///
    /// Each destination is tried by moving only the cached king square and
    /// re-casting the king lines from there; the grid is left alone and the
    /// cache is restored before the next candidate.
    pub(crate) fn king_moves(&mut self, from: Square, moves: &mut Vec<Move>) {
        let us = self.position.side_to_move;
        for &(d_rank, d_file) in ORTHOGONAL.iter().chain(DIAGONAL.iter()) {
            let Some(to) = from.offset(d_rank, d_file) else {
                continue;
            };
            if self.position.color_on(to) == Some(us) {
                continue;
            }
            self.position.set_king_square(us, to);
            let in_check = self.scan_king_lines().in_check;
            self.position.set_king_square(us, from);
            if !in_check {
                moves.extend(Move::new(from, to, &self.position));
            }
        }
    }

    /// Castling moves for the side to move. Only called when not in check.
    pub(crate) fn castle_moves(&mut self, king: Square, moves: &mut Vec<Move>) {
        let us = self.position.side_to_move;
        let home = Square(us.back_rank(), 4);
        if king != home || !self.position.castling_rights.any(us) {
            return;
        }
        if self.square_under_attack(king) {
            return;
        }
        if self.position.castling_rights.has(us, true) {
            self.kingside_castle(king, moves);
        }
        if self.position.castling_rights.has(us, false) {
            self.queenside_castle(king, moves);
        }
    }

    fn kingside_castle(&mut self, king: Square, moves: &mut Vec<Move>) {
        let rank = king.rank();
        if !self.has_own_rook(Square(rank, 7)) {
            return;
        }
        let (f, g) = (Square(rank, 5), Square(rank, 6));
        if self.position.is_empty(f)
            && self.position.is_empty(g)
            && !self.square_under_attack(f)
            && !self.square_under_attack(g)
        {
            moves.extend(Move::castle(king, g, &self.position));
        }
    }

    /// The b-file square must be empty but may be attacked.
    fn queenside_castle(&mut self, king: Square, moves: &mut Vec<Move>) {
        let rank = king.rank();
        if !self.has_own_rook(Square(rank, 0)) {
            return;
        }
        let (b, c, d) = (Square(rank, 1), Square(rank, 2), Square(rank, 3));
        if self.position.is_empty(b)
            && self.position.is_empty(c)
            && self.position.is_empty(d)
            && !self.square_under_attack(d)
            && !self.square_under_attack(c)
        {
            moves.extend(Move::castle(king, c, &self.position));
        }
    }

    fn has_own_rook(&self, sq: Square) -> bool {
        self.position.piece_at(sq) == Some((self.position.side_to_move, Piece::Rook))
    }
}
