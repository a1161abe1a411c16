use super::GameState;

impl GameState {
    /// Count leaf nodes of the legal move tree to `depth` plies.
    ///
    /// The position is walked with make/undo and is left as it was found.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.get_valid_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }

        nodes
    }
}
