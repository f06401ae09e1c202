//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece. The result is validated, so
//! a built `Board` always satisfies the invariants the move generator and
//! executor rely on.
//!
//! # Example
//! ```
//! use simple_chess::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::E1, Color::White, Piece::King)
//!     .piece(Square::E8, Color::Black, Piece::King)
//!     .piece(Square::A2, Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.pawn_squares(Color::White).len(), 1);
//! ```

use super::error::BoardError;
use super::tables::CASTLING_PATHS;
use super::types::{CastlingRights, Color, Piece, Square};
use super::Board;

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        let board = Board::new();
        for square in Square::all() {
            if let Some((color, piece)) = board.piece_at(square) {
                builder.pieces.push((square, color, piece));
            }
        }
        builder.castling_rights = CastlingRights::all();
        builder
    }

    /// Place a piece on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, false);
        self
    }

    /// Enable all castling rights.
    #[must_use]
    pub const fn all_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::all();
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Set the halfmove clock (for 50-move rule).
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Build and validate the board.
    ///
    /// The king and pawn caches are filled from the placed pieces and the
    /// built position is recorded once in the repetition history.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        for &(square, color, piece) in &self.pieces {
            board.set_piece(square, color, piece);
        }

        for color in Color::BOTH {
            let count_of = |kind: Piece| {
                self.pieces
                    .iter()
                    .filter(|&&(_, c, p)| c == color && p == kind)
                    .count()
            };
            match count_of(Piece::King) {
                0 => return Err(BoardError::MissingKing { color }),
                1 => {}
                _ => return Err(BoardError::DuplicateKing { color }),
            }
            let pawns = count_of(Piece::Pawn);
            if pawns > 8 {
                return Err(BoardError::TooManyPawns {
                    color,
                    count: pawns,
                });
            }
        }

        if let Some(&(square, _, _)) = self
            .pieces
            .iter()
            .find(|&&(sq, _, p)| p == Piece::Pawn && (sq.rank() == 0 || sq.rank() == 7))
        {
            return Err(BoardError::PawnOnBackRank { square });
        }

        for path in &CASTLING_PATHS {
            if self.castling_rights.has_bit(path.right)
                && (board.piece_at(path.king_from) != Some((path.color, Piece::King))
                    || board.piece_at(path.rook_from) != Some((path.color, Piece::Rook)))
            {
                return Err(BoardError::CastlingWithoutPieces {
                    color: path.color,
                    kingside: path.kingside,
                });
            }
        }

        if let Some(target) = self.en_passant_target {
            if !en_passant_consistent(&board, target, self.side_to_move) {
                return Err(BoardError::InvalidEnPassant { square: target });
            }
        }

        board.side_to_move = self.side_to_move;
        board.castling_rights = self.castling_rights;
        board.en_passant_target = self.en_passant_target;
        board.halfmove_clock = self.halfmove_clock;
        board.finish_setup();

        let waiting = self.side_to_move.opponent();
        if board.is_in_check(waiting) {
            return Err(BoardError::OpponentInCheck { color: waiting });
        }

        Ok(board)
    }
}

/// The target must be the empty square just skipped by an enemy double push.
fn en_passant_consistent(board: &Board, target: Square, side_to_move: Color) -> bool {
    let them = side_to_move.opponent();
    let expected_rank = if side_to_move == Color::White { 5 } else { 2 };
    if target.rank() != expected_rank || board.piece_at(target).is_some() {
        return false;
    }
    let pushed = target.offset(them.pawn_forward());
    let origin = target.offset(-them.pawn_forward());
    matches!(pushed.and_then(|sq| board.piece_at(sq)), Some((c, Piece::Pawn)) if c == them)
        && origin.is_some_and(|sq| board.piece_at(sq).is_none())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_kings() -> BoardBuilder {
        BoardBuilder::new()
            .piece(Square::E1, Color::White, Piece::King)
            .piece(Square::E8, Color::Black, Piece::King)
    }

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build().unwrap();
        let standard = Board::new();

        assert_eq!(built.hash(), standard.hash());
        assert_eq!(built.castling_rights(), standard.castling_rights());
        assert_eq!(built.possible_moves().len(), 20);
    }

    #[test]
    fn test_empty_board() {
        let board = two_kings().build().unwrap();

        // Should have only two kings
        assert!(board.piece_at(Square::E1).is_some());
        assert!(board.piece_at(Square::E8).is_some());
        assert!(board.piece_at(Square::A1).is_none());
        assert_eq!(board.king_square(Color::Black), Square::E8);
    }

    #[test]
    fn test_castling_rights() {
        let board = BoardBuilder::starting_position()
            .no_castling_rights()
            .castle_kingside(Color::White)
            .build()
            .unwrap();

        let rights = board.castling_rights();
        assert!(rights.has(Color::White, true)); // Kingside
        assert!(!rights.has(Color::White, false)); // Queenside
        assert!(!rights.has(Color::Black, true));
        assert!(!rights.has(Color::Black, false));
    }

    #[test]
    fn test_side_to_move() {
        let board = two_kings().side_to_move(Color::Black).build().unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position()
            .clear(Square::A1) // Remove white rook on a1
            .no_castling_rights()
            .build()
            .unwrap();

        assert!(board.piece_at(Square::A1).is_none());
        assert!(board.piece_at(Square::B1).is_some()); // Knight still there
    }

    #[test]
    fn test_missing_and_duplicate_kings() {
        let err = BoardBuilder::new()
            .piece(Square::E1, Color::White, Piece::King)
            .build()
            .unwrap_err();
        assert_eq!(err, BoardError::MissingKing { color: Color::Black });

        let err = two_kings()
            .piece(Square::A1, Color::White, Piece::King)
            .build()
            .unwrap_err();
        assert_eq!(err, BoardError::DuplicateKing { color: Color::White });
    }

    #[test]
    fn test_pawn_limits() {
        let err = two_kings()
            .piece(Square::C8, Color::White, Piece::Pawn)
            .build()
            .unwrap_err();
        assert_eq!(err, BoardError::PawnOnBackRank { square: Square::C8 });

        let mut builder = two_kings();
        for square in Square::all().filter(|sq| sq.rank() == 2 || sq.rank() == 3).take(9) {
            builder = builder.piece(square, Color::Black, Piece::Pawn);
        }
        let err = builder.build().unwrap_err();
        assert_eq!(
            err,
            BoardError::TooManyPawns {
                color: Color::Black,
                count: 9
            }
        );
    }

    #[test]
    fn test_castling_requires_home_pieces() {
        let err = BoardBuilder::starting_position()
            .clear(Square::H8)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BoardError::CastlingWithoutPieces {
                color: Color::Black,
                kingside: true
            }
        );
    }

    #[test]
    fn test_en_passant_validation() {
        let good = two_kings()
            .piece(Square::D5, Color::Black, Piece::Pawn)
            .en_passant(Square::D6)
            .build();
        assert!(good.is_ok());

        let wrong_rank = two_kings()
            .piece(Square::D5, Color::Black, Piece::Pawn)
            .en_passant(Square::D3)
            .build();
        assert_eq!(
            wrong_rank.unwrap_err(),
            BoardError::InvalidEnPassant { square: Square::D3 }
        );

        let no_pawn = two_kings().en_passant(Square::D6).build();
        assert!(no_pawn.is_err());
    }

    #[test]
    fn test_waiting_side_in_check_rejected() {
        let err = two_kings()
            .piece(Square::E4, Color::White, Piece::Rook)
            .build()
            .unwrap_err();
        assert_eq!(err, BoardError::OpponentInCheck { color: Color::Black });
    }
}
