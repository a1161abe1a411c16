use super::super::{Color, GameState, Piece, Square};

/// Rook directions as (rank, file) steps.
pub(crate) const ORTHOGONAL: [(isize, isize); 4] = [(1, 0), (0, -1), (-1, 0), (0, 1)];

/// Bishop directions as (rank, file) steps.
pub(crate) const DIAGONAL: [(isize, isize); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

pub(super) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, -1),
    (-2, 1),
    (1, -2),
    (-1, -2),
];

/// A friendly piece standing between its king and an enemy slider.
///
/// `direction` points from the king toward the pinned piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Pin {
    pub(crate) square: Square,
    pub(crate) direction: (isize, isize),
}

/// An enemy piece attacking the king.
///
/// `direction` points from the king toward the checker (for a knight it is
/// the knight offset itself).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Check {
    pub(crate) square: Square,
    pub(crate) direction: (isize, isize),
}

#[derive(Debug, Default)]
pub(crate) struct KingLines {
    pub(crate) in_check: bool,
    pub(crate) pins: Vec<Pin>,
    pub(crate) checks: Vec<Check>,
}

impl GameState {
    /// Cast rays and knight jumps from the cached king square of the side
    /// to move, collecting pins and checks.
    ///
    /// The friendly king itself is looked through, so moving the cached
    /// square to a trial destination sees the lines the king would stand
    /// on after moving there.
    pub(crate) fn scan_king_lines(&self) -> KingLines {
        let pos = &self.position;
        let us = pos.side_to_move;
        let them = us.opponent();
        let king = pos.king_square(us);
        let mut lines = KingLines::default();

        for (idx, &direction) in ORTHOGONAL.iter().chain(DIAGONAL.iter()).enumerate() {
            let orthogonal = idx < ORTHOGONAL.len();
            let mut possible_pin: Option<Pin> = None;

            for distance in 1..8 {
                let Some(sq) = king.offset(direction.0 * distance, direction.1 * distance) else {
                    break;
                };
                match pos.piece_at(sq) {
                    None => {}
                    Some((color, Piece::King)) if color == us => {}
                    Some((color, _)) if color == us => {
                        if possible_pin.is_some() {
                            break;
                        }
                        possible_pin = Some(Pin {
                            square: sq,
                            direction,
                        });
                    }
                    Some((_, piece)) => {
                        if attacks_along(piece, them, orthogonal, direction, distance) {
                            match possible_pin {
                                Some(pin) => lines.pins.push(pin),
                                None => {
                                    lines.in_check = true;
                                    lines.checks.push(Check {
                                        square: sq,
                                        direction,
                                    });
                                }
                            }
                        }
                        break;
                    }
                }
            }
        }

        for &offset in &KNIGHT_OFFSETS {
            let Some(sq) = king.offset(offset.0, offset.1) else {
                continue;
            };
            if pos.piece_at(sq) == Some((them, Piece::Knight)) {
                lines.in_check = true;
                lines.checks.push(Check {
                    square: sq,
                    direction: offset,
                });
            }
        }

        lines
    }
}

/// Whether an enemy `piece` found `distance` squares from the king along
/// `direction` attacks the king.
fn attacks_along(
    piece: Piece,
    color: Color,
    orthogonal: bool,
    direction: (isize, isize),
    distance: isize,
) -> bool {
    match piece {
        // A pawn attacks the king from one diagonal step ahead of it.
        Piece::Pawn => distance == 1 && !orthogonal && direction.0 == -color.pawn_direction(),
        Piece::King => distance == 1,
        _ if orthogonal => piece.attacks_straight(),
        _ => piece.attacks_diagonally(),
    }
}
