use super::{Color, GameState, Move, Piece, Square};

impl GameState {
    /// Apply a move taken from [`GameState::get_valid_moves`].
    ///
    /// The move is trusted: handing in anything else leaves the position in
    /// an unspecified (but memory-safe) state. Everything the move changes
    /// is recorded so [`GameState::undo_move`] can restore it exactly.
    pub fn make_move(&mut self, mv: Move) {
        let (color, piece) = mv.piece_moved();
        let from = mv.from();
        let to = mv.to();
        let pos = &mut self.position;

        pos.set(to, Some(mv.piece_moved()));
        pos.set(from, None);
        self.move_log.push(mv);
        pos.side_to_move = color.opponent();

        if piece == Piece::King {
            pos.set_king_square(color, to);
        }

        if mv.is_pawn_promotion() {
            pos.set(to, Some((color, Piece::Queen)));
        }

        if mv.is_en_passant() {
            pos.set(Square(from.rank(), to.file()), None);
        }

        pos.en_passant_target = if piece == Piece::Pawn && from.rank().abs_diff(to.rank()) == 2 {
            Some(Square((from.rank() + to.rank()) / 2, from.file()))
        } else {
            None
        };

        if mv.is_castle() {
            let (rook_from, rook_to) = castle_rook_squares(&mv);
            let rook = pos.piece_at(rook_from);
            pos.set(rook_to, rook);
            pos.set(rook_from, None);
        }

        self.en_passant_log.push(pos.en_passant_target);
        self.update_castling_rights(&mv);
        self.castling_rights_log.push(self.position.castling_rights);
    }

    /// Take back the last move. Does nothing when no move has been made.
    ///
    /// Castling rights and the en passant target come back from their
    /// snapshots rather than being recomputed.
    pub fn undo_move(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            return;
        };
        let (color, piece) = mv.piece_moved();
        let from = mv.from();
        let to = mv.to();
        let pos = &mut self.position;

        pos.set(from, Some(mv.piece_moved()));
        pos.set(to, mv.piece_captured());
        pos.side_to_move = color;

        if piece == Piece::King {
            pos.set_king_square(color, from);
        }

        if mv.is_en_passant() {
            pos.set(to, None);
            pos.set(Square(from.rank(), to.file()), mv.piece_captured());
        }

        self.en_passant_log.pop();
        pos.en_passant_target = self.en_passant_log.last().copied().flatten();

        self.castling_rights_log.pop();
        if let Some(rights) = self.castling_rights_log.last() {
            pos.castling_rights = *rights;
        }

        if mv.is_castle() {
            let (rook_from, rook_to) = castle_rook_squares(&mv);
            let rook = pos.piece_at(rook_to);
            pos.set(rook_from, rook);
            pos.set(rook_to, None);
        }

        self.status.checkmate = false;
        self.status.stalemate = false;
    }

    /// Clear rights for a king or rook leaving its home square, or a rook
    /// being captured on its home square.
    fn update_castling_rights(&mut self, mv: &Move) {
        let rights = &mut self.position.castling_rights;

        if let Some((captured_color, Piece::Rook)) = mv.piece_captured() {
            if mv.to().rank() == captured_color.back_rank() {
                match mv.to().file() {
                    0 => rights.remove(captured_color, false),
                    7 => rights.remove(captured_color, true),
                    _ => {}
                }
            }
        }

        match mv.piece_moved() {
            (color, Piece::King) => rights.remove_all(color),
            (color, Piece::Rook) if mv.from().rank() == color.back_rank() => {
                match mv.from().file() {
                    0 => rights.remove(color, false),
                    7 => rights.remove(color, true),
                    _ => {}
                }
            }
            _ => {}
        }
    }

    /// Number of moves that can still be undone
    #[inline]
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.move_log.len()
    }
}

/// Rook origin and destination for a castling move.
fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let rank = mv.to().rank();
    if mv.to().file() > mv.from().file() {
        (Square(rank, 7), Square(rank, mv.to().file() - 1))
    } else {
        (Square(rank, 0), Square(rank, mv.to().file() + 1))
    }
}
