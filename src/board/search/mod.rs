//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! The search runs on the caller's `GameState`, playing and taking back
//! moves in place; every explored branch is undone before returning,
//! including on cutoffs and when stopped early. The best root move is
//! returned as part of the result rather than recorded on the side.
//!
//! Root moves are shuffled before searching so that equally scored moves
//! are picked at random. Among equal scores the first one searched wins.

pub mod worker;

use std::sync::atomic::{AtomicBool, Ordering};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::eval::{score_board, MATE_SCORE};
use super::{GameState, Move};

/// Search depth in plies used by [`find_best_move`].
pub const DEFAULT_DEPTH: u32 = 3;

/// Tunable search settings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Plies to search below the root.
    pub depth: u32,
    /// Shuffle root moves before searching.
    pub shuffle_root: bool,
    /// Seed for the root shuffle and the random fallback. `None` draws
    /// from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            shuffle_root: true,
            seed: None,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Random source for this configuration.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Outcome of one search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Best root move, or `None` when no move beat the mate bound, the
    /// depth was zero, or the search was stopped.
    pub best_move: Option<Move>,
    /// Score of the best move from the side to move's point of view.
    pub score: i32,
    /// Positions evaluated at the horizon or at terminal nodes.
    pub nodes: u64,
    /// The stop flag was raised before the search completed.
    pub aborted: bool,
}

/// Pick the best of `valid_moves` with the default configuration.
///
/// Returns `None` when the search finds nothing better than being mated;
/// callers fall back to [`find_random_move`] in that case.
pub fn find_best_move(state: &mut GameState, valid_moves: &[Move]) -> Option<Move> {
    let stop = AtomicBool::new(false);
    find_best_move_with_config(state, valid_moves, &SearchConfig::default(), &stop).best_move
}

/// Run a search with explicit settings and a stop flag.
///
/// `state` is returned to exactly the position it was given in, status
/// flags included.
pub fn find_best_move_with_config(
    state: &mut GameState,
    valid_moves: &[Move],
    config: &SearchConfig,
    stop: &AtomicBool,
) -> SearchResult {
    let mut root: Vec<Move> = valid_moves.to_vec();
    if config.shuffle_root {
        root.shuffle(&mut config.rng());
    }

    let status = state.status;
    let turn = state.side_to_move().sign();
    let mut searcher = Searcher {
        state,
        stop,
        nodes: 0,
        aborted: false,
    };

    let (score, best_move) = if config.depth == 0 || root.is_empty() {
        (-MATE_SCORE, None)
    } else {
        searcher.negamax(&root, config.depth, -MATE_SCORE, MATE_SCORE, turn)
    };

    let result = SearchResult {
        best_move: if searcher.aborted { None } else { best_move },
        score,
        nodes: searcher.nodes,
        aborted: searcher.aborted,
    };
    searcher.state.status = status;

    if result.aborted {
        log::trace!("search stopped after {} nodes", result.nodes);
    } else {
        match result.best_move {
            Some(mv) => log::debug!(
                "depth {} best {} score {} nodes {}",
                config.depth,
                mv,
                result.score,
                result.nodes
            ),
            None => log::debug!("depth {} found no move, nodes {}", config.depth, result.nodes),
        }
    }
    result
}

/// A uniformly random move, or `None` when there are no moves.
#[must_use]
pub fn find_random_move(valid_moves: &[Move]) -> Option<Move> {
    find_random_move_with(valid_moves, &mut rand::thread_rng())
}

/// [`find_random_move`] with a caller-supplied random source.
pub fn find_random_move_with<R: Rng + ?Sized>(valid_moves: &[Move], rng: &mut R) -> Option<Move> {
    valid_moves.choose(rng).copied()
}

struct Searcher<'a> {
    state: &'a mut GameState,
    stop: &'a AtomicBool,
    nodes: u64,
    aborted: bool,
}

impl Searcher<'_> {
    /// Score of the current position for the side to move, with the move
    /// that achieves it.
    ///
    /// `moves` must be the legal moves of the current position, generated
    /// just before the call so the terminal flags are up to date. `turn`
    /// is +1 when White is to move and -1 otherwise.
    fn negamax(
        &mut self,
        moves: &[Move],
        depth: u32,
        mut alpha: i32,
        beta: i32,
        turn: i32,
    ) -> (i32, Option<Move>) {
        if depth == 0 || moves.is_empty() {
            self.nodes += 1;
            return (turn * score_board(self.state), None);
        }

        let mut best_score = -MATE_SCORE;
        let mut best_move = None;
        for &mv in moves {
            if self.stop.load(Ordering::Relaxed) {
                self.aborted = true;
                break;
            }

            self.state.make_move(mv);
            let replies = self.state.get_valid_moves();
            let (reply_score, _) = self.negamax(&replies, depth - 1, -beta, -alpha, -turn);
            self.state.undo_move();

            let score = -reply_score;
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(best_score);
            if alpha >= beta {
                break;
            }
        }
        (best_score, best_move)
    }
}
