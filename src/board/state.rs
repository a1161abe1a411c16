use super::error::PositionError;
use super::{CastlingRights, Color, Piece, Square};

/// Contents of one square.
pub(crate) type Occupant = Option<(Color, Piece)>;

/// The 8x8 board plus everything needed to decide legality: side to move,
/// both king squares, castling rights and the en passant target.
///
/// The king squares are a cache of where each king stands on `squares`.
/// Every king move updates them in the same transition that moves the king,
/// and the only place they deliberately disagree with the grid is the
/// trial placement done while testing king-move safety.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) squares: [[Occupant; 8]; 8], // [rank][file]
    pub(crate) side_to_move: Color,
    pub(crate) white_king: Square,
    pub(crate) black_king: Square,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// The standard initial array, White to move, all castling rights.
    #[must_use]
    pub fn new() -> Self {
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        let mut squares = [[None; 8]; 8];
        for (file, piece) in back_rank.iter().enumerate() {
            squares[0][file] = Some((Color::White, *piece));
            squares[1][file] = Some((Color::White, Piece::Pawn));
            squares[6][file] = Some((Color::Black, Piece::Pawn));
            squares[7][file] = Some((Color::Black, *piece));
        }

        Position {
            squares,
            side_to_move: Color::White,
            white_king: Square(0, 4),
            black_king: Square(7, 4),
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
        }
    }

    /// Assemble a position from a grid, locating both kings.
    pub(crate) fn from_grid(
        squares: [[Occupant; 8]; 8],
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
    ) -> Result<Self, PositionError> {
        let mut kings: [Option<Square>; 2] = [None, None];
        for (rank, row) in squares.iter().enumerate() {
            for (file, occupant) in row.iter().enumerate() {
                if let Some((color, Piece::King)) = occupant {
                    if kings[color.index()].is_some() {
                        return Err(PositionError::DuplicateKing { color: *color });
                    }
                    kings[color.index()] = Some(Square(rank, file));
                }
            }
        }
        let white_king = kings[0].ok_or(PositionError::MissingKing {
            color: Color::White,
        })?;
        let black_king = kings[1].ok_or(PositionError::MissingKing {
            color: Color::Black,
        })?;

        Ok(Position {
            squares,
            side_to_move,
            white_king,
            black_king,
            castling_rights,
            en_passant_target,
        })
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    /// Color of the piece on a square, if any
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, occupant: Occupant) {
        self.squares[sq.0][sq.1] = occupant;
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub const fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub const fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Cached king square for a color
    #[inline]
    #[must_use]
    pub const fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    #[inline]
    pub(crate) fn set_king_square(&mut self, color: Color, sq: Square) {
        match color {
            Color::White => self.white_king = sq,
            Color::Black => self.black_king = sq,
        }
    }

    /// Iterate over every occupied square
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(rank, row)| {
            row.iter().enumerate().filter_map(move |(file, occupant)| {
                occupant.map(|(color, piece)| (Square(rank, file), color, piece))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position_layout() {
        let pos = Position::new();
        assert_eq!(pos.piece_at(Square(0, 4)), Some((Color::White, Piece::King)));
        assert_eq!(pos.piece_at(Square(7, 3)), Some((Color::Black, Piece::Queen)));
        assert_eq!(pos.piece_at(Square(6, 0)), Some((Color::Black, Piece::Pawn)));
        assert!(pos.is_empty(Square(4, 4)));
        assert_eq!(pos.pieces().count(), 32);
        assert_eq!(pos.king_square(Color::White), Square(0, 4));
        assert_eq!(pos.king_square(Color::Black), Square(7, 4));
        assert_eq!(pos.castling_rights(), CastlingRights::all());
        assert_eq!(pos.en_passant_target(), None);
    }

    #[test]
    fn test_from_grid_locates_kings() {
        let mut squares = [[None; 8]; 8];
        squares[2][3] = Some((Color::White, Piece::King));
        squares[5][6] = Some((Color::Black, Piece::King));
        let pos = Position::from_grid(squares, Color::Black, CastlingRights::none(), None)
            .expect("both kings present");
        assert_eq!(pos.king_square(Color::White), Square(2, 3));
        assert_eq!(pos.king_square(Color::Black), Square(5, 6));
        assert_eq!(pos.side_to_move(), Color::Black);
    }

    #[test]
    fn test_from_grid_rejects_missing_or_extra_kings() {
        let mut squares = [[None; 8]; 8];
        squares[0][0] = Some((Color::White, Piece::King));
        assert_eq!(
            Position::from_grid(squares, Color::White, CastlingRights::none(), None),
            Err(PositionError::MissingKing {
                color: Color::Black
            })
        );
        squares[7][7] = Some((Color::Black, Piece::King));
        squares[7][0] = Some((Color::Black, Piece::King));
        assert_eq!(
            Position::from_grid(squares, Color::White, CastlingRights::none(), None),
            Err(PositionError::DuplicateKing {
                color: Color::Black
            })
        );
    }
}
