//! Make/unmake move tests.

use super::{assert_caches_consistent, diagram, lookup};
use crate::board::{Board, Color, Move, Piece, Square};
use rand::prelude::*;

fn find(board: &Board, text: &str) -> Move {
    lookup(board, text).unwrap_or_else(|| panic!("Expected move {text} not found"))
}

fn en_passant_position() -> Board {
    diagram([
        "rnbqkbnr",
        "ppp.p.pp",
        "........",
        "...pPp..",
        "........",
        "........",
        "PPPP.PPP",
        "RNBQKBNR",
    ])
    .all_castling_rights()
    .en_passant(Square::F6)
    .build()
    .unwrap()
}

#[test]
fn test_en_passant_make_unmake() {
    let mut board = en_passant_position();
    let original_hash = board.hash();
    let original_ep = board.en_passant_target();
    let mv = find(&board, "e5f6");
    assert!(mv.is_en_passant());

    let info = board.make_move(mv);
    assert_eq!(board.piece_at(Square::F5), None);
    assert!(!board.pawn_squares(Color::Black).contains(Square::F5));
    assert_caches_consistent(&board);

    board.unmake_move(info);
    assert_eq!(board.hash(), original_hash);
    assert_eq!(board.en_passant_target(), original_ep);
    assert_eq!(board.piece_at(Square::F5), Some((Color::Black, Piece::Pawn)));
    assert_caches_consistent(&board);
}

#[test]
fn test_promotion_make_unmake() {
    let mut board = diagram([
        "........",
        "P.......",
        "........",
        "........",
        "........",
        "........",
        "........",
        "K.k.....",
    ])
    .build()
    .unwrap();
    let original_hash = board.hash();
    let mv = find(&board, "a7a8n");

    let info = board.make_move(mv);
    assert_eq!(board.piece_at(Square::A8), Some((Color::White, Piece::Knight)));
    assert!(board.pawn_squares(Color::White).is_empty());

    board.unmake_move(info);
    assert_eq!(board.hash(), original_hash);
    assert_eq!(board.piece_at(Square::A7), Some((Color::White, Piece::Pawn)));
    assert_eq!(board.pawn_squares(Color::White).len(), 1);
}

#[test]
fn test_castling_make_unmake() {
    let mut board = diagram([
        "r...k..r",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
        "R...K..R",
    ])
    .all_castling_rights()
    .build()
    .unwrap();
    let rights = board.castling_rights();

    let info = board.make_move(find(&board, "e1c1"));
    assert_eq!(board.piece_at(Square::C1), Some((Color::White, Piece::King)));
    assert_eq!(board.piece_at(Square::D1), Some((Color::White, Piece::Rook)));
    assert_eq!(board.piece_at(Square::A1), None);
    assert_eq!(board.king_square(Color::White), Square::C1);

    board.unmake_move(info);
    assert_eq!(board.castling_rights(), rights);
    assert_eq!(board.king_square(Color::White), Square::E1);
    assert_eq!(board.piece_at(Square::A1), Some((Color::White, Piece::Rook)));
}

#[test]
fn test_legal_moves_stable_after_make_unmake() {
    let mut board = Board::new();
    let initial: Vec<String> = board.legal_moves().iter().map(|m| m.to_string()).collect();

    for mv in board.legal_moves() {
        let info = board.make_move(mv);
        board.unmake_move(info);
    }

    let after: Vec<String> = board.legal_moves().iter().map(|m| m.to_string()).collect();
    assert_eq!(initial, after);
}

#[test]
fn test_make_move_records_history() {
    let mut board = Board::new();
    let info = board.make_move(find(&board, "e2e4"));
    let made = board.hash();
    assert_eq!(board.repetition_count(made), 1);
    assert_eq!(board.en_passant_target(), Some(Square::E3));
    assert_eq!(board.side_to_move(), Color::Black);

    board.unmake_move(info);
    assert_eq!(board.repetition_count(made), 0);
    assert_eq!(board.side_to_move(), Color::White);
}

#[test]
fn test_random_walk_unmake_restores_everything() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut board = Board::new();
    let mut infos = Vec::new();
    let mut hashes = Vec::new();

    for _ in 0..40 {
        let moves = board.legal_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        hashes.push((board.hash(), board.placement(), board.castling_rights()));
        infos.push(board.make_move(mv));
        assert_eq!(board.hash(), board.zobrist_hash());
        assert_caches_consistent(&board);
    }

    while let Some(info) = infos.pop() {
        board.unmake_move(info);
        let (hash, placement, rights) = hashes.pop().unwrap();
        assert_eq!(board.hash(), hash);
        assert!(board.placement() == placement);
        assert_eq!(board.castling_rights(), rights);
    }
    assert_eq!(board.possible_moves(), Board::new().possible_moves());
}
