//! Zobrist hashing for chess positions.
//!
//! The hash covers occupancy, side to move and the en passant target.
//! Castling rights are not part of it: two positions that differ only in
//! castling rights hash the same and count as a repetition.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Board, Color, Square, BOARD_SLOTS};

pub(crate) struct ZobristKeys {
    // piece_keys[color][piece_type][square_index], indexed over all 128 slots
    pub(crate) piece_keys: [[[u64; BOARD_SLOTS]; 6]; 2],
    pub(crate) black_to_move_key: u64,
    pub(crate) en_passant_keys: [u64; BOARD_SLOTS],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // Use a fixed seed for reproducibility
        let mut piece_keys = [[[0; BOARD_SLOTS]; 6]; 2];
        let mut en_passant_keys = [0; BOARD_SLOTS];

        for color in &mut piece_keys {
            for piece in color.iter_mut() {
                for key in piece.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            en_passant_keys,
        }
    }
}

// Built once per process, never reseeded
pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

impl Board {
    /// Hash of the position computed from scratch.
    pub fn zobrist_hash(&self) -> u64 {
        let keys = &*ZOBRIST;
        let mut hash = 0;

        for square in Square::all() {
            if let Some((color, piece)) = self.piece_at(square) {
                hash ^= keys.piece_keys[color.index()][piece.index()][square.index()];
            }
        }

        if self.side_to_move == Color::Black {
            hash ^= keys.black_to_move_key;
        }

        if let Some(ep_square) = self.en_passant_target {
            hash ^= keys.en_passant_keys[ep_square.index()];
        }

        hash
    }
}
