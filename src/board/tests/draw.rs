//! Draw detection tests.

use super::{diagram, play, play_all};
use crate::board::{Board, Color, GameStatus};

const KNIGHT_SHUFFLE: [&str; 4] = ["g1f3", "g8f6", "f3g1", "f6g8"];

fn rook_endgame(halfmove_clock: u32) -> Board {
    diagram([
        "....k...",
        "........",
        "........",
        "........",
        "........",
        "....p...",
        "........",
        "R...K...",
    ])
    .halfmove_clock(halfmove_clock)
    .build()
    .unwrap()
}

#[test]
fn test_builder_halfmove_clock() {
    let board = rook_endgame(57);
    assert_eq!(board.halfmove_clock(), 57);
}

#[test]
fn test_fifty_move_rule_draw() {
    let mut board = rook_endgame(99);
    assert_eq!(board.game_status(), GameStatus::NotOver);
    assert_eq!(play(&mut board, "a1a2"), GameStatus::DrawByFiftyMoves);
    assert_eq!(board.halfmove_clock(), 100);
}

#[test]
fn test_halfmove_resets_on_pawn_move() {
    let mut board = rook_endgame(98);
    assert_eq!(play(&mut board, "a1a2"), GameStatus::NotOver);
    assert_eq!(board.halfmove_clock(), 99);
    assert_eq!(play(&mut board, "e3e2"), GameStatus::NotOver);
    assert_eq!(board.halfmove_clock(), 0);
}

#[test]
fn test_halfmove_resets_on_capture() {
    let mut board = rook_endgame(40);
    play_all(&mut board, &["a1a3", "e8d8"]);
    assert_eq!(board.halfmove_clock(), 42);
    assert_eq!(play(&mut board, "a3e3"), GameStatus::NotOver);
    assert_eq!(board.halfmove_clock(), 0);
}

#[test]
fn test_hundred_quiet_half_moves_from_start() {
    let mut board = Board::new();
    let mut last = GameStatus::NotOver;
    for half_move in 0..100 {
        last = play(&mut board, KNIGHT_SHUFFLE[half_move % 4]);
        assert_ne!(last, GameStatus::InvalidMove);
        if half_move < 99 {
            assert_ne!(last, GameStatus::DrawByFiftyMoves, "half-move {half_move}");
        }
    }
    // The fifty-move draw outranks the repetition offer
    assert_eq!(last, GameStatus::DrawByFiftyMoves);
}

#[test]
fn test_threefold_repetition_on_third_occurrence() {
    let mut board = Board::new();
    let start = board.hash();

    for mv in KNIGHT_SHUFFLE {
        assert_eq!(play(&mut board, mv), GameStatus::NotOver);
    }
    assert_eq!(board.repetition_count(start), 2);

    for mv in &KNIGHT_SHUFFLE[..3] {
        assert_eq!(play(&mut board, mv), GameStatus::NotOver);
    }
    assert_eq!(play(&mut board, "f6g8"), GameStatus::DrawByRepetition);
    assert_eq!(board.repetition_count(start), 3);
    assert!(board.repetition_observed());
}

#[test]
fn test_repetition_reported_again_on_later_moves() {
    let mut board = Board::new();
    play_all(&mut board, &KNIGHT_SHUFFLE);
    play_all(&mut board, &KNIGHT_SHUFFLE);
    assert!(board.repetition_observed());

    // Third time after 1.Nf3 as well
    assert_eq!(play(&mut board, "g1f3"), GameStatus::DrawByRepetition);

    // A fresh position clears the flag
    assert_eq!(play(&mut board, "e7e5"), GameStatus::NotOver);
    assert!(!board.repetition_observed());
}

#[test]
fn test_lost_castling_rights_still_repeat() {
    let mut board = Board::new();
    play_all(&mut board, &["g1f3", "g8f6"]);
    let after_development = board.hash();

    // Rook steps out and back: same placement, but no king-side castling
    play_all(&mut board, &["h1g1", "f6g8", "g1h1", "g8f6"]);
    assert_eq!(board.hash(), after_development);
    assert_eq!(board.repetition_count(after_development), 2);
    assert!(!board.castling_rights().has(Color::White, true));

    play_all(&mut board, &["f3g1", "f6g8", "g1f3"]);
    assert_eq!(play(&mut board, "g8f6"), GameStatus::DrawByRepetition);
}

#[test]
fn test_stalemate() {
    let mut board = diagram([
        "k.......",
        "........",
        "........",
        ".Q......",
        "........",
        "........",
        "........",
        ".......K",
    ])
    .build()
    .unwrap();
    assert_eq!(play(&mut board, "b5b6"), GameStatus::Stalemate);
    assert!(!board.king_in_check());
    assert_eq!(board.game_status(), GameStatus::Stalemate);
}

#[test]
fn test_checkmate_outranks_fifty_move_rule() {
    let mut board = diagram([
        "......k.",
        ".....ppp",
        "........",
        "........",
        "........",
        "........",
        ".....PPP",
        "R.....K.",
    ])
    .halfmove_clock(99)
    .build()
    .unwrap();
    assert_eq!(play(&mut board, "a1a8"), GameStatus::Checkmate);
    assert_eq!(board.halfmove_clock(), 100);
}
