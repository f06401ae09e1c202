//! Static move-generation tables for the 0x88 board.
//!
//! Offsets are added to a square index; a result with any `0x88` bit set
//! has left the board (see `Square::offset`).

use super::types::{
    Color, Piece, Square, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q,
};

pub(crate) const NORTH: i8 = 16;
pub(crate) const SOUTH: i8 = -16;
pub(crate) const EAST: i8 = 1;
pub(crate) const WEST: i8 = -1;
pub(crate) const NORTH_EAST: i8 = 17;
pub(crate) const NORTH_WEST: i8 = 15;
pub(crate) const SOUTH_EAST: i8 = -15;
pub(crate) const SOUTH_WEST: i8 = -17;

pub(crate) const KNIGHT_OFFSETS: [i8; 8] = [33, 31, 18, 14, -14, -18, -31, -33];
pub(crate) const BISHOP_DIRECTIONS: [i8; 4] = [NORTH_WEST, NORTH_EAST, SOUTH_WEST, SOUTH_EAST];
pub(crate) const ROOK_DIRECTIONS: [i8; 4] = [NORTH, WEST, EAST, SOUTH];
pub(crate) const KING_DIRECTIONS: [i8; 8] = [
    NORTH, NORTH_EAST, EAST, SOUTH_EAST, SOUTH, SOUTH_WEST, WEST, NORTH_WEST,
];

/// Direction offsets walked by `piece`. Pawns have none; they are handled separately.
pub(crate) const fn offsets(piece: Piece) -> &'static [i8] {
    match piece {
        Piece::Knight => &KNIGHT_OFFSETS,
        Piece::Bishop => &BISHOP_DIRECTIONS,
        Piece::Rook => &ROOK_DIRECTIONS,
        Piece::Queen | Piece::King => &KING_DIRECTIONS,
        Piece::Pawn => &[],
    }
}

/// Mask ANDed into the castling rights whenever `square` is moved from or onto.
pub(crate) const fn castling_clear_mask(square: Square) -> u8 {
    match square {
        Square::E1 => !(CASTLE_WHITE_K | CASTLE_WHITE_Q),
        Square::H1 => !CASTLE_WHITE_K,
        Square::A1 => !CASTLE_WHITE_Q,
        Square::E8 => !(CASTLE_BLACK_K | CASTLE_BLACK_Q),
        Square::H8 => !CASTLE_BLACK_K,
        Square::A8 => !CASTLE_BLACK_Q,
        _ => 0xFF,
    }
}

/// Squares involved in one of the four castling moves.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CastlingPath {
    pub(crate) color: Color,
    pub(crate) kingside: bool,
    pub(crate) right: u8,
    pub(crate) king_from: Square,
    pub(crate) king_to: Square,
    pub(crate) rook_from: Square,
    pub(crate) rook_to: Square,
    /// Squares between king and rook.
    pub(crate) must_be_empty: &'static [Square],
    /// Squares the king crosses or lands on, besides its start square.
    pub(crate) must_be_safe: &'static [Square],
}

pub(crate) const CASTLING_PATHS: [CastlingPath; 4] = [
    CastlingPath {
        color: Color::White,
        kingside: true,
        right: CASTLE_WHITE_K,
        king_from: Square::E1,
        king_to: Square::G1,
        rook_from: Square::H1,
        rook_to: Square::F1,
        must_be_empty: &[Square::F1, Square::G1],
        must_be_safe: &[Square::F1, Square::G1],
    },
    CastlingPath {
        color: Color::White,
        kingside: false,
        right: CASTLE_WHITE_Q,
        king_from: Square::E1,
        king_to: Square::C1,
        rook_from: Square::A1,
        rook_to: Square::D1,
        must_be_empty: &[Square::B1, Square::C1, Square::D1],
        must_be_safe: &[Square::D1, Square::C1],
    },
    CastlingPath {
        color: Color::Black,
        kingside: true,
        right: CASTLE_BLACK_K,
        king_from: Square::E8,
        king_to: Square::G8,
        rook_from: Square::H8,
        rook_to: Square::F8,
        must_be_empty: &[Square::F8, Square::G8],
        must_be_safe: &[Square::F8, Square::G8],
    },
    CastlingPath {
        color: Color::Black,
        kingside: false,
        right: CASTLE_BLACK_Q,
        king_from: Square::E8,
        king_to: Square::C8,
        rook_from: Square::A8,
        rook_to: Square::D8,
        must_be_empty: &[Square::B8, Square::C8, Square::D8],
        must_be_safe: &[Square::D8, Square::C8],
    },
];

/// The castling move whose king lands on `king_to`.
pub(crate) fn castling_path(king_to: Square) -> Option<&'static CastlingPath> {
    CASTLING_PATHS.iter().find(|path| path.king_to == king_to)
}
