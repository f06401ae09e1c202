use super::Board;

impl Board {
    /// Count legal move sequences of length `depth` from this position.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            let info = self.make_move(m);
            nodes += self.perft(depth - 1);
            self.unmake_move(info);
        }

        nodes
    }

    /// Per-root-move node counts, in encoded move order.
    pub fn perft_divide(&mut self, depth: usize) -> Vec<(super::Move, u64)> {
        let mut counts = Vec::new();
        if depth == 0 {
            return counts;
        }
        for m in self.legal_moves() {
            let info = self.make_move(m);
            counts.push((m, self.perft(depth - 1)));
            self.unmake_move(info);
        }
        counts
    }
}
