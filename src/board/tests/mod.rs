//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation correctness
//! - `draw.rs` - Draw detection (50-move, repetition, stalemate)
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `castling.rs` - Castling legality and rights bookkeeping
//! - `proptest.rs` - Property-based tests

mod draw;
mod make_unmake;

use crate::board::{Board, BoardBuilder, Color, GameStatus, Move, Piece, Square};

/// Builder holding the pieces drawn in `rows`, rank 8 first.
///
/// Each row has eight characters: a piece letter (uppercase White) or `.`.
pub(super) fn diagram(rows: [&str; 8]) -> BoardBuilder {
    let mut builder = BoardBuilder::new();
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), 8, "row {row} must have 8 squares");
        for (file, c) in line.chars().enumerate() {
            if c == '.' {
                continue;
            }
            let piece = Piece::from_char(c).unwrap_or_else(|| panic!("bad piece '{c}'"));
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let square = Square::new(7 - row as u8, file as u8).unwrap();
            builder = builder.piece(square, color, piece);
        }
    }
    builder
}

/// Resolve move text like `e2e4` or `e7e8n` against the current move set.
pub(super) fn lookup(board: &Board, text: &str) -> Option<Move> {
    let from: Square = text[0..2].parse().ok()?;
    let to: Square = text[2..4].parse().ok()?;
    let found = board.find_move(from.index(), to.index())?;
    match text.chars().nth(4) {
        Some(c) => found.with_promotion(Piece::from_char(c)?),
        None => Some(found),
    }
}

/// Play a move through `play_next_move` and return the verdict.
pub(super) fn play(board: &mut Board, text: &str) -> GameStatus {
    let candidate = lookup(board, text);
    board.play_next_move(candidate)
}

/// Play a sequence of moves, asserting none is rejected.
pub(super) fn play_all(board: &mut Board, moves: &[&str]) -> GameStatus {
    let mut status = GameStatus::NotOver;
    for text in moves {
        status = play(board, text);
        assert_ne!(status, GameStatus::InvalidMove, "move {text} rejected");
    }
    status
}

/// Assert the king and pawn caches mirror the occupancy arrays.
pub(super) fn assert_caches_consistent(board: &Board) {
    for color in Color::BOTH {
        let mut expected: Vec<Square> = Square::all()
            .filter(|&sq| board.piece_at(sq) == Some((color, Piece::Pawn)))
            .collect();
        let mut cached: Vec<Square> = board.pawn_squares(color).iter().collect();
        expected.sort();
        cached.sort();
        assert_eq!(cached, expected, "{color} pawn cache");

        let king = board.king_square(color);
        assert_eq!(board.piece_at(king), Some((color, Piece::King)), "{color} king cache");
    }
    for idx in 0..crate::board::BOARD_SLOTS {
        assert_eq!(board.colors[idx].is_none(), board.pieces[idx].is_none());
    }
}
