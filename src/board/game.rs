//! Game state: one position plus the history needed to take moves back.

use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::movegen::{Check, Pin};
use super::{CastlingRights, Color, Move, Position, Square};

/// Terminal result of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
}

/// Status flags derived by the last call to [`GameState::get_valid_moves`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Status {
    pub(crate) in_check: bool,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

/// A position plus the move, castling-rights and en passant history that
/// make `undo_move` exact.
///
/// The three stacks move in lockstep: the rights and en passant logs hold
/// one snapshot per position reached, starting with the initial one, so
/// they are always exactly one longer than the move log.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) position: Position,
    pub(crate) move_log: Vec<Move>,
    pub(crate) castling_rights_log: Vec<CastlingRights>,
    pub(crate) en_passant_log: Vec<Option<Square>>,
    pub(crate) pins: Vec<Pin>,
    pub(crate) checks: Vec<Check>,
    pub(crate) status: Status,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A new game from the standard initial array.
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(Position::new())
    }

    /// Start a game from an arbitrary position with empty history.
    #[must_use]
    pub fn from_position(position: Position) -> Self {
        GameState {
            castling_rights_log: vec![position.castling_rights],
            en_passant_log: vec![position.en_passant_target],
            position,
            move_log: Vec::new(),
            pins: Vec::new(),
            checks: Vec::new(),
            status: Status::default(),
        }
    }

    /// Start a game from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Position::try_from_fen(fen).map(Self::from_position)
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    /// Moves played so far, oldest first
    #[inline]
    #[must_use]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    /// Whether the side to move was in check at the last legality query.
    #[inline]
    #[must_use]
    pub const fn is_in_check(&self) -> bool {
        self.status.in_check
    }

    #[inline]
    #[must_use]
    pub const fn is_checkmate(&self) -> bool {
        self.status.checkmate
    }

    #[inline]
    #[must_use]
    pub const fn is_stalemate(&self) -> bool {
        self.status.stalemate
    }

    /// Terminal outcome as of the last legality query, if any.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        if self.status.checkmate {
            Some(Outcome::Checkmate {
                winner: self.position.side_to_move.opponent(),
            })
        } else if self.status.stalemate {
            Some(Outcome::Stalemate)
        } else {
            None
        }
    }

    /// FEN of the current position.
    #[must_use]
    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }

    /// Resolve a move given by its two squares against the legal move list.
    ///
    /// This is the boundary where driver input enters the engine: a move
    /// built from raw coordinates is only accepted if an equal move is
    /// legal, and the generated move (with its special-move flags) is the
    /// one returned.
    pub fn legal_move_between(&mut self, from: Square, to: Square) -> Option<Move> {
        let candidate = Move::new(from, to, &self.position)?;
        let found = self
            .get_valid_moves()
            .into_iter()
            .find(|mv| *mv == candidate);
        if found.is_none() {
            log::trace!("rejected move {from}{to}: not in the legal move list");
        }
        found
    }

    /// Parse a coordinate move such as `"e2e4"` and check it is legal.
    pub fn parse_move(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let text = text.trim();
        if text.len() != 4 || !text.is_ascii() {
            return Err(MoveParseError::InvalidLength {
                len: text.chars().count(),
            });
        }
        let invalid_square = |_| MoveParseError::InvalidSquare {
            notation: text.to_string(),
        };
        let from = Square::from_str(&text[..2]).map_err(invalid_square)?;
        let to = Square::from_str(&text[2..]).map_err(invalid_square)?;

        self.legal_move_between(from, to)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }

    /// Parse a coordinate move and, if legal, play it.
    pub fn play(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(text)?;
        self.make_move(mv);
        Ok(mv)
    }
}
