pub mod board;

pub use board::{GameState, Move, Position, SearchConfig};
