//! Error types for parsing positions and moves.
//!
//! The engine itself never fails at runtime; errors only arise at the input
//! boundary (FEN text, square names, coordinate moves from a driver).

use std::fmt;

use super::Color;

/// Error type for structurally invalid positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// A side has no king on the board
    MissingKing { color: Color },
    /// A side has more than one king on the board
    DuplicateKing { color: Color },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::MissingKing { color } => write!(f, "{color} has no king"),
            PositionError::DuplicateKing { color } => write!(f, "{color} has more than one king"),
        }
    }
}

impl std::error::Error for PositionError {}

/// Rejected FEN text.
///
/// Only placement, side to move, castling and en passant are read, so
/// these are the only fields that can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Fewer than the four fields that are interpreted
    TooFewParts { found: usize },
    /// Placement contains a letter that is not a piece
    InvalidPiece { char: char },
    /// Castling field contains something other than `KQkq-`
    InvalidCastling { char: char },
    /// Side to move is neither `w` nor `b`
    InvalidSideToMove { found: String },
    /// En passant field is not `-` or a square on the 3rd or 6th rank
    InvalidEnPassant { found: String },
    /// Placement does not have eight `/`-separated ranks
    InvalidRankCount { found: usize },
    /// A rank describes more than eight squares
    TooManyFiles { rank: usize, files: usize },
    /// Placement parsed but the kings are wrong
    InvalidPosition(PositionError),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "expected at least 4 FEN fields, got {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "unknown piece '{char}' in FEN placement")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "unexpected '{char}' in FEN castling field")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "side to move must be 'w' or 'b', got '{found}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "'{found}' is not a usable en passant square")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "expected 8 ranks in FEN placement, got {found}")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "rank index {rank} spans {files} files")
            }
            FenError::InvalidPosition(e) => write!(f, "unplayable position: {e}"),
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::InvalidPosition(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PositionError> for FenError {
    fn from(e: PositionError) -> Self {
        FenError::InvalidPosition(e)
    }
}

/// Rejected coordinate move such as `"e2e4"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Not exactly two squares' worth of text
    InvalidLength { len: usize },
    /// One of the two halves does not name a square
    InvalidSquare { notation: String },
    /// Well formed, but no legal move joins the two squares
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "coordinate move needs 4 characters, got {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "'{notation}' does not name two squares")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "'{notation}' is not a legal move here")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Rejected square coordinates or name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    RankOutOfBounds { rank: usize },
    FileOutOfBounds { file: usize },
    /// Not a file letter followed by a rank digit
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "rank index {rank} is off the board")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "file index {file} is off the board")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "'{notation}' is not a square name")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_messages_name_the_offending_input() {
        assert_eq!(
            FenError::TooFewParts { found: 2 }.to_string(),
            "expected at least 4 FEN fields, got 2"
        );
        assert!(FenError::InvalidPiece { char: 'z' }
            .to_string()
            .contains("'z'"));
        let illegal = MoveParseError::IllegalMove {
            notation: "e2e5".to_string(),
        };
        assert_eq!(illegal.to_string(), "'e2e5' is not a legal move here");
        let square = SquareError::InvalidNotation {
            notation: "i9".to_string(),
        };
        assert!(square.to_string().contains("i9"));
    }

    #[test]
    fn test_fen_error_wraps_position_error() {
        let err: FenError = PositionError::MissingKing {
            color: Color::Black,
        }
        .into();
        assert_eq!(err.to_string(), "unplayable position: Black has no king");
        assert!(err.source().is_some());
        assert!(FenError::InvalidRankCount { found: 7 }.source().is_none());
    }

    #[test]
    fn test_duplicate_king_message() {
        let err = PositionError::DuplicateKing {
            color: Color::White,
        };
        assert_eq!(err.to_string(), "White has more than one king");
    }
}
