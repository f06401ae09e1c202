//! Self-check exclusion.
//!
//! A move is tried on the real board inside a `Speculation`, which puts
//! the saved placement back when it is dropped. That covers every exit,
//! including a panic while the move is applied.

use std::ops::{Deref, DerefMut};

use super::state::Placement;
use super::tables::castling_path;
use super::types::{Color, Move};
use super::Board;

struct Speculation<'a> {
    board: &'a mut Board,
    saved: Placement,
}

impl<'a> Speculation<'a> {
    fn begin(board: &'a mut Board) -> Self {
        let saved = board.placement();
        Speculation { board, saved }
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.restore_placement(&self.saved);
    }
}

impl Board {
    /// Returns true if playing `m` would leave the mover's king safe.
    ///
    /// The board is unchanged afterwards whatever the answer.
    pub fn test_pseudo_legal_move(&mut self, m: Move) -> bool {
        let Some((mover, _)) = self.piece_at(m.from()) else {
            return false;
        };
        if m.is_castle() && !self.castling_path_clear(m, mover) {
            return false;
        }

        let mut speculation = Speculation::begin(self);
        speculation.apply_placement(m);
        let exposed = speculation.is_in_check(mover);
        !exposed
    }

    /// Castling needs the king out of check, the squares between king and
    /// rook empty, and the squares the king crosses unattacked.
    fn castling_path_clear(&self, m: Move, mover: Color) -> bool {
        let Some(path) = castling_path(m.to()) else {
            return false;
        };
        if path.color != mover || path.king_from != m.from() {
            return false;
        }
        if self.is_in_check(mover) {
            return false;
        }
        let them = mover.opponent();
        path.must_be_empty
            .iter()
            .all(|&square| self.piece_at(square).is_none())
            && path
                .must_be_safe
                .iter()
                .all(|&square| !self.square_under_attack(square, them))
    }

    /// Pseudo-legal moves that pass the self-check filter, in encoded order.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let candidates = self.possible_moves.to_sorted_vec();
        candidates
            .into_iter()
            .filter(|&m| self.test_pseudo_legal_move(m))
            .collect()
    }
}
