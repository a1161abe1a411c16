use std::str::FromStr;

use super::error::FenError;
use super::{CastlingRights, Color, Piece, Position, Square};

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// Only the first four fields are interpreted; the move clocks are
    /// accepted and ignored.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }

        let mut squares = [[None; 8]; 8];
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    if file > 8 {
                        return Err(FenError::TooManyFiles { rank, files: file });
                    }
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank,
                        files: file + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                squares[rank][file] = Some((color, piece));
                file += 1;
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut castling_rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => castling_rights.set(Color::White, true),
                'Q' => castling_rights.set(Color::White, false),
                'k' => castling_rights.set(Color::Black, true),
                'q' => castling_rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        let en_passant_target = if parts[3] == "-" {
            None
        } else {
            let sq = Square::from_str(parts[3]).map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?;
            if sq.rank() != 2 && sq.rank() != 5 {
                return Err(FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                });
            }
            Some(sq)
        };

        Ok(Position::from_grid(
            squares,
            side_to_move,
            castling_rights,
            en_passant_target,
        )?)
    }

    /// Convert the position to FEN notation.
    ///
    /// Move clocks are not tracked, so they are always written as `0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} 0 1",
            rows.join("/"),
            active,
            self.castling_rights,
            ep
        )
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::error::PositionError;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_start_fen_matches_initial_position() {
        let pos = Position::try_from_fen(START_FEN).expect("valid FEN");
        assert_eq!(pos, Position::new());
        assert_eq!(Position::new().to_fen(), START_FEN);
    }

    #[test]
    fn test_fen_roundtrip_with_en_passant() {
        let fen = "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 1";
        let pos: Position = fen.parse().expect("valid FEN");
        assert_eq!(pos.en_passant_target(), Some(Square(5, 5)));
        assert_eq!(pos.to_fen(), fen);
    }

    #[test]
    fn test_kings_located_from_fen() {
        let pos = Position::try_from_fen("8/8/8/8/8/2k5/8/6K1 b - - 0 1").expect("valid FEN");
        assert_eq!(pos.king_square(Color::White), Square(0, 6));
        assert_eq!(pos.king_square(Color::Black), Square(2, 2));
        assert_eq!(pos.side_to_move(), Color::Black);
        assert_eq!(pos.castling_rights(), CastlingRights::none());
    }

    #[test]
    fn test_fen_errors() {
        assert_eq!(
            Position::try_from_fen("8/8/8/8 w"),
            Err(FenError::TooFewParts { found: 2 })
        );
        assert_eq!(
            Position::try_from_fen("8/8/8/8/8/8/8 w - -"),
            Err(FenError::InvalidRankCount { found: 7 })
        );
        assert_eq!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/4K2X w - -"),
            Err(FenError::InvalidPiece { char: 'X' })
        );
        assert_eq!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/4K3 x - -"),
            Err(FenError::InvalidSideToMove {
                found: "x".to_string()
            })
        );
        assert_eq!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/4K3 w Z -"),
            Err(FenError::InvalidCastling { char: 'Z' })
        );
        assert_eq!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - e4"),
            Err(FenError::InvalidEnPassant {
                found: "e4".to_string()
            })
        );
        assert_eq!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/4K3N w - -"),
            Err(FenError::TooManyFiles { rank: 0, files: 9 })
        );
        assert_eq!(
            Position::try_from_fen("8/8/8/8/8/8/8/4K3 w - -"),
            Err(FenError::InvalidPosition(PositionError::MissingKing {
                color: Color::Black
            }))
        );
    }
}
