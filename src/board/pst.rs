//! Piece-square tables.
//!
//! Each table is written from White's side with the 8th rank first, the
//! way a board diagram reads. Black uses the same table flipped
//! vertically. Kings have no table.

use once_cell::sync::Lazy;

use super::{Color, Piece, Square};

type Table = [[i32; 8]; 8];

#[rustfmt::skip]
const PAWN: Table = [
    [90, 90, 90, 90, 90, 90, 90, 90],
    [70, 70, 75, 80, 80, 75, 70, 70],
    [40, 40, 50, 60, 60, 50, 40, 40],
    [20, 30, 30, 50, 50, 30, 30, 20],
    [10, 20, 20, 40, 40, 20, 20, 10],
    [10, 10, 10, 20, 20, 10, 10, 10],
    [20, 30, 30,  0,  0, 30, 30, 20],
    [10, 10, 10, 10, 10, 10, 10, 10],
];

#[rustfmt::skip]
const KNIGHT: Table = [
    [ 0,  5, 10, 20, 20, 10,  5,  0],
    [ 0, 20, 40, 50, 50, 40, 20,  0],
    [10, 50, 60, 60, 60, 60, 50, 10],
    [20, 50, 70, 80, 80, 70, 50, 20],
    [20, 50, 70, 80, 80, 70, 50, 20],
    [10, 50, 60, 60, 60, 60, 50, 10],
    [ 0, 20, 40, 50, 50, 40, 20,  0],
    [ 0,  5, 10, 20, 20, 10,  5,  0],
];

#[rustfmt::skip]
const BISHOP: Table = [
    [20, 10, 20, 30, 30, 20, 10, 20],
    [10, 50, 40, 50, 50, 40, 50, 10],
    [20, 40, 50, 60, 60, 50, 40, 20],
    [20, 50, 50, 60, 60, 50, 50, 20],
    [20, 40, 60, 60, 60, 60, 40, 20],
    [20, 40, 60, 60, 60, 60, 40, 20],
    [10, 50, 40, 50, 50, 40, 50, 10],
    [20, 10, 20, 30, 30, 20, 10, 20],
];

#[rustfmt::skip]
const ROOK: Table = [
    [20, 30, 30, 60, 60, 30, 30, 20],
    [40, 50, 70, 80, 80, 70, 50, 40],
    [ 0, 30, 30, 60, 60, 30, 30,  0],
    [ 0, 30, 30, 50, 50, 30, 30,  0],
    [ 0, 30, 30, 40, 40, 30, 30,  0],
    [ 0, 30, 30, 40, 40, 30, 30,  0],
    [ 0, 30, 30, 40, 40, 30, 30,  0],
    [20, 30, 50, 60, 60, 50, 30, 20],
];

#[rustfmt::skip]
const QUEEN: Table = [
    [10,  0, 10, 30, 30, 10,  0, 10],
    [10, 20, 30, 40, 40, 30, 20, 10],
    [20, 30, 40, 50, 50, 40, 30, 20],
    [20, 40, 50, 70, 60, 50, 40, 20],
    [20, 40, 50, 60, 70, 50, 40, 20],
    [20, 30, 40, 50, 50, 40, 30, 20],
    [10, 20, 30, 40, 40, 30, 20, 10],
    [10,  0, 10, 30, 30, 10,  0, 10],
];

const NONE: Table = [[0; 8]; 8];

/// Tables re-indexed by `[color][piece][rank][file]` with rank 0 as
/// White's back rank.
static PST: Lazy<[[Table; 6]; 2]> = Lazy::new(|| {
    let mut tables = [[NONE; 6]; 2];
    for piece in Piece::ALL {
        let source = match piece {
            Piece::Pawn => &PAWN,
            Piece::Knight => &KNIGHT,
            Piece::Bishop => &BISHOP,
            Piece::Rook => &ROOK,
            Piece::Queen => &QUEEN,
            Piece::King => &NONE,
        };
        for rank in 0..8 {
            tables[Color::White.index()][piece.index()][rank] = source[7 - rank];
            tables[Color::Black.index()][piece.index()][rank] = source[rank];
        }
    }
    tables
});

/// Positional bonus in centipawns for `piece` of `color` standing on `sq`.
#[inline]
pub(crate) fn bonus(color: Color, piece: Piece, sq: Square) -> i32 {
    PST[color.index()][piece.index()][sq.rank()][sq.file()]
}
