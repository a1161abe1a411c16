//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation
//! - `movegen.rs` - Legal move generation under checks and pins
//! - `make_unmake.rs` - Make/undo move correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Negamax search
//! - `proptest.rs` - Property-based tests

mod perft;
mod proptest;
