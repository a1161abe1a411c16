use super::super::{GameState, Move, Square};
use super::on_pin_axis;

impl GameState {
    /// Rays in each direction up to the first occupied square, which is
    /// included only when it holds an enemy piece.
    pub(crate) fn slider_moves(
        &self,
        from: Square,
        directions: &[(isize, isize)],
        pin: Option<(isize, isize)>,
        moves: &mut Vec<Move>,
    ) {
        let pos = &self.position;
        let us = pos.side_to_move;
        for &direction in directions {
            if pin.is_some_and(|p| !on_pin_axis(p, direction)) {
                continue;
            }
            for distance in 1..8 {
                let Some(to) = from.offset(direction.0 * distance, direction.1 * distance) else {
                    break;
                };
                match pos.color_on(to) {
                    None => moves.extend(Move::new(from, to, pos)),
                    Some(color) if color != us => {
                        moves.extend(Move::new(from, to, pos));
                        break;
                    }
                    Some(_) => break,
                }
            }
        }
    }
}
