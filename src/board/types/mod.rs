//! Core chess types.
//!
//! - `Piece` and `Color` - chess piece kinds and sides
//! - `Square` - a 0x88 board index
//! - `Move`, `MoveFlags` and `MoveKey` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveFlags, MoveKey};
pub use piece::{Color, Piece};
pub use square::{is_valid_index, Square, BOARD_SLOTS};

pub(crate) use castling::{CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q};
pub(crate) use piece::PROMOTION_PIECES;
