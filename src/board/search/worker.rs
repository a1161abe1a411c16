//! Background search worker.
//!
//! A search at a fixed depth can take long enough to stall an interactive
//! caller, so it can be run on its own thread. The worker searches a clone
//! of the game, so the caller's `GameState` stays free to use; the result
//! is handed back through a shared slot. Cancelling raises the stop flag,
//! the search unwinds, and the worker reports no move.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use super::{find_best_move_with_config, SearchConfig, SearchResult};
use crate::board::{GameState, Move};

/// Handle to a search running on another thread.
pub struct SearchWorker {
    result: Arc<Mutex<Option<SearchResult>>>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SearchWorker {
    /// Start searching `moves` from a snapshot of `state`.
    pub fn spawn(
        state: &GameState,
        moves: Vec<Move>,
        config: SearchConfig,
    ) -> std::io::Result<Self> {
        let result = Arc::new(Mutex::new(None));
        let stop = Arc::new(AtomicBool::new(false));

        let mut snapshot = state.clone();
        let slot = Arc::clone(&result);
        let stop_flag = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name("search-worker".to_string())
            .spawn(move || {
                let outcome = find_best_move_with_config(&mut snapshot, &moves, &config, &stop_flag);
                *slot.lock() = Some(outcome);
            })?;

        Ok(SearchWorker {
            result,
            stop,
            handle: Some(handle),
        })
    }

    /// Whether the search has produced its result.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.result.lock().is_some()
    }

    /// The result if the search has finished, without blocking.
    #[must_use]
    pub fn poll(&self) -> Option<SearchResult> {
        *self.result.lock()
    }

    /// Block until the search finishes and return its result.
    ///
    /// Returns `None` only if the worker thread panicked.
    pub fn wait(mut self) -> Option<SearchResult> {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::debug!("search worker panicked");
                return None;
            }
        }
        *self.result.lock()
    }

    /// Ask the search to stop. The worker still publishes a result, with
    /// no best move and `aborted` set.
    pub fn cancel(&self) {
        log::trace!("cancelling search worker");
        self.stop.store(true, Ordering::Relaxed);
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
