use std::env;

use negamax_chess::board::GameState;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return;
    }

    let mut game = GameState::new();
    for text in args.iter().skip(1) {
        if let Err(e) = game.play(text) {
            eprintln!("{text}: {e}");
            return;
        }
    }

    let legal_moves = game.get_valid_moves();
    println!("side_to_move: {}", game.side_to_move());
    println!("in_check: {}", game.is_in_check());
    println!("legal_moves: {}", legal_moves.len());
    println!("checkmate: {}", game.is_checkmate());
    println!("stalemate: {}", game.is_stalemate());
    for mv in &legal_moves {
        println!("{}{} {}", mv.from(), mv.to(), mv);
    }
}
