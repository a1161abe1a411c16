//! Human-readable move notation and the game transcript.
//!
//! Two forms are produced:
//! - `Display` is the short move-log form: "e4", "exd5", "Nxf3", "e8Q",
//!   "0-0".
//! - [`Move::chess_notation`] is the long form, which marks en passant
//!   explicitly ("exd6 e.p.") and always tags promotions.
//!
//! Neither form carries check or mate suffixes or disambiguation.

use std::fmt;

use super::{GameState, Move, Piece};

impl Move {
    /// Both forms name the castle by the king's destination: the g-file is
    /// kingside and anything else queenside.
    fn castle_notation(&self) -> &'static str {
        if self.to().file() == 6 {
            "0-0"
        } else {
            "0-0-0"
        }
    }

    /// Long algebraic-style notation used by transcripts.
    #[must_use]
    pub fn chess_notation(&self) -> String {
        let (_, piece) = self.piece_moved();
        let to = self.to();
        if self.is_pawn_promotion() {
            return format!("{to}Q");
        }
        if self.is_castle() {
            return self.castle_notation().to_string();
        }
        if self.is_en_passant() {
            return format!("{}x{to} e.p.", self.from().file_char());
        }
        match (piece.notation_letter(), self.is_capture()) {
            (None, true) => format!("{}x{to}", self.from().file_char()),
            (None, false) => to.to_string(),
            (Some(letter), true) => format!("{letter}x{to}"),
            (Some(letter), false) => format!("{letter}{to}"),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_castle() {
            return f.write_str(self.castle_notation());
        }
        let (_, piece) = self.piece_moved();
        let to = self.to();
        if piece == Piece::Pawn {
            if self.is_capture() {
                return write!(f, "{}x{to}", self.from().file_char());
            }
            write!(f, "{to}")?;
            if self.is_pawn_promotion() {
                f.write_str("Q")?;
            }
            return Ok(());
        }
        if let Some(letter) = piece.notation_letter() {
            write!(f, "{letter}")?;
        }
        if self.is_capture() {
            f.write_str("x")?;
        }
        write!(f, "{to}")
    }
}

impl GameState {
    /// The move log as numbered full moves, one entry per move pair:
    /// `"1. e4 e5  "`, with a trailing `"N. move "` while Black is still to
    /// reply.
    #[must_use]
    pub fn transcript(&self) -> Vec<String> {
        self.move_log
            .chunks(2)
            .enumerate()
            .map(|(idx, pair)| {
                let mut entry = format!("{}. {} ", idx + 1, pair[0]);
                if let Some(reply) = pair.get(1) {
                    entry.push_str(&format!("{reply}  "));
                }
                entry
            })
            .collect()
    }
}
