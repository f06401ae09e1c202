//! Chess board representation and game logic.
//!
//! Uses a 0x88 mailbox: two 128-slot arrays hold the color and kind of the
//! piece on each square, and direction offsets walk the board with a
//! single mask test for the edges. Supports full chess rules including
//! castling, en passant and promotions, plus fifty-move and threefold
//! repetition draws.
//!
//! # Example
//! ```
//! use simple_chess::board::{Board, GameStatus};
//!
//! let mut board = Board::new();
//! assert_eq!(board.possible_moves().len(), 20);
//!
//! let e2e4 = board.find_move(0x14, 0x34);
//! assert_eq!(board.play_next_move(e2e4), GameStatus::NotOver);
//! ```

mod attacks;
mod builder;
mod display;
mod error;
mod history;
mod legality;
mod make_unmake;
mod movegen;
mod perft;
mod state;
mod status;
mod tables;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardError, MoveParseError, SquareError};
pub use movegen::MoveSet;
pub use state::{Board, PawnSquares, UnmakeInfo};
pub use status::GameStatus;
pub use types::{
    is_valid_index, CastlingRights, Color, Move, MoveFlags, MoveKey, Piece, Square, BOARD_SLOTS,
};
