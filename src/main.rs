//! Engine-vs-engine self-play.
//!
//! Usage: `negamax_chess [FEN] [MAX_PLIES]`
//!
//! Plays from the start position (or the given FEN) until the game ends or
//! the ply limit is reached, printing the transcript and the result.

use std::env;
use std::process::ExitCode;

use negamax_chess::board::{find_random_move, GameState, Outcome, SearchConfig, SearchWorker};

const DEFAULT_MAX_PLIES: usize = 80;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let (fen, max_plies) = match args.as_slice() {
        [] => (None, DEFAULT_MAX_PLIES),
        [one] => match one.parse::<usize>() {
            Ok(plies) => (None, plies),
            Err(_) => (Some(one.as_str()), DEFAULT_MAX_PLIES),
        },
        [fen, plies, ..] => match plies.parse::<usize>() {
            Ok(plies) => (Some(fen.as_str()), plies),
            Err(_) => {
                eprintln!("usage: negamax_chess [FEN] [MAX_PLIES]");
                return ExitCode::FAILURE;
            }
        },
    };

    let mut game = match fen {
        Some(fen) => match GameState::from_fen(fen) {
            Ok(game) => game,
            Err(e) => {
                eprintln!("invalid FEN: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => GameState::new(),
    };

    for _ in 0..max_plies {
        let moves = game.get_valid_moves();
        if moves.is_empty() {
            break;
        }

        let worker = match SearchWorker::spawn(&game, moves.clone(), SearchConfig::default()) {
            Ok(worker) => worker,
            Err(e) => {
                eprintln!("failed to start search: {e}");
                return ExitCode::FAILURE;
            }
        };
        let best = worker.wait().and_then(|result| result.best_move);
        let Some(mv) = best.or_else(|| find_random_move(&moves)) else {
            break;
        };
        game.make_move(mv);
        println!("{}", mv.chess_notation());
    }

    // Refresh the terminal flags for the final position.
    game.get_valid_moves();

    println!();
    for line in game.transcript() {
        println!("{line}");
    }
    match game.outcome() {
        Some(Outcome::Checkmate { winner }) => println!("Checkmate, {winner} wins"),
        Some(Outcome::Stalemate) => println!("Stalemate"),
        None => println!("Stopped after {} plies: {}", game.move_log().len(), game.to_fen()),
    }
    ExitCode::SUCCESS
}
