use super::super::{GameState, Move, Square};
use super::pins::KNIGHT_OFFSETS;

impl GameState {
    /// A pinned knight never has a move: every jump leaves the pin line.
    pub(crate) fn knight_moves(
        &self,
        from: Square,
        pin: Option<(isize, isize)>,
        moves: &mut Vec<Move>,
    ) {
        if pin.is_some() {
            return;
        }
        let pos = &self.position;
        let us = pos.side_to_move;
        for &(d_rank, d_file) in &KNIGHT_OFFSETS {
            let Some(to) = from.offset(d_rank, d_file) else {
                continue;
            };
            if pos.color_on(to) != Some(us) {
                moves.extend(Move::new(from, to, pos));
            }
        }
    }
}
