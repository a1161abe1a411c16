//! Chess rules and search.
//!
//! A mailbox board with fully legal move generation (pins, checks,
//! castling, en passant and queen promotion), exact make/undo, a
//! material-plus-placement evaluator and a fixed-depth negamax search.
//!
//! # Example
//! ```
//! use negamax_chess::board::GameState;
//!
//! let mut game = GameState::new();
//! let moves = game.get_valid_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod builder;
mod error;
mod eval;
mod fen;
mod game;
mod make_unmake;
mod movegen;
mod notation;
mod perft;
mod pst;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, MoveParseError, PositionError, SquareError};
pub use eval::{score_board, MATE_SCORE, STALEMATE_SCORE};
pub use game::{GameState, Outcome};
pub use state::Position;
pub use types::{CastlingRights, Color, Move, Piece, Square};

pub use search::worker::SearchWorker;
pub use search::{
    find_best_move, find_best_move_with_config, find_random_move, find_random_move_with,
    SearchConfig, SearchResult, DEFAULT_DEPTH,
};
