//! Pseudo-legal move generation.
//!
//! Moves are generated for the side to move without regard to the safety
//! of its own king; `Board::test_pseudo_legal_move` filters those later.

mod castling;
mod pawns;
mod pieces;

use std::collections::HashMap;

use super::types::{Move, MoveKey, Piece, Square};
use super::Board;

/// Pseudo-legal moves keyed by `MoveKey`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveSet {
    moves: HashMap<MoveKey, Move>,
}

impl MoveSet {
    pub fn new() -> Self {
        MoveSet {
            moves: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, mv: Move) {
        self.moves.insert(MoveKey::of(&mv), mv);
    }

    pub fn get(&self, key: &MoveKey) -> Option<Move> {
        self.moves.get(key).copied()
    }

    /// The move from `from` to `to`.
    ///
    /// For a promotion the queen promotion stands in for all four; use
    /// `Move::with_promotion` to pick another piece.
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        self.get(&MoveKey::new(from, to, None))
            .or_else(|| self.get(&MoveKey::new(from, to, Some(Piece::Queen))))
    }

    /// True if exactly this move, flags included, is in the set.
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.get(&MoveKey::of(mv)) == Some(mv)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.values()
    }

    /// All moves in encoded order.
    pub fn to_sorted_vec(&self) -> Vec<Move> {
        let mut moves: Vec<Move> = self.moves.values().copied().collect();
        moves.sort_unstable();
        moves
    }
}

impl Board {
    /// Every pseudo-legal move for the side to move.
    pub fn generate_all_possible_moves(&self) -> MoveSet {
        let us = self.side_to_move;
        let mut moves = MoveSet::new();

        for from in Square::all() {
            match self.piece_at(from) {
                Some((color, Piece::Pawn)) if color == us => self.pawn_moves(from, us, &mut moves),
                Some((color, piece)) if color == us => {
                    self.piece_moves(from, piece, us, &mut moves)
                }
                _ => {}
            }
        }

        self.castling_moves(us, &mut moves);
        self.en_passant_moves(us, &mut moves);
        moves
    }

    /// Replace the cached move set with a fresh generation.
    pub(crate) fn regenerate_moves(&mut self) {
        self.possible_moves = self.generate_all_possible_moves();
    }

    /// The cached pseudo-legal moves of the current position.
    pub fn possible_moves(&self) -> &MoveSet {
        &self.possible_moves
    }
}
