//! A chess rules engine on a 0x88 mailbox board.
//!
//! `board` holds the position and the rules: move generation, attack
//! detection, move execution, the self-check filter, Zobrist hashing with
//! a repetition history, and game status. `game` wraps it in a two-player
//! terminal session.

pub mod board;
pub mod game;
pub mod logging;
pub mod zobrist;

pub use board::{Board, BoardBuilder, Color, GameStatus, Move, Piece, Square};
pub use game::{Outcome, Session, SessionConfig};
