//! Error types for chess board operations.

use std::fmt;

use super::types::{Color, Square};

/// Error type for typed move text that cannot be turned into squares or a promotion piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move text has the wrong length (must be exactly 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece (must be one of q, r, b, n)
    InvalidPromotion { text: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { text } => {
                write!(f, "Invalid promotion piece '{text}', expected q, r, b or n")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square conversion failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Index outside the board or with an off-board bit set
    InvalidIndex { index: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidIndex { index } => {
                write!(f, "Index {index:#04x} is not an on-board square")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for positions rejected by `BoardBuilder::build`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A side has no king
    MissingKing { color: Color },
    /// A side has more than one king
    DuplicateKing { color: Color },
    /// A side has more than eight pawns
    TooManyPawns { color: Color, count: usize },
    /// A pawn stands on the first or last rank
    PawnOnBackRank { square: Square },
    /// A castling right is set but the king or rook is not on its home square
    CastlingWithoutPieces { color: Color, kingside: bool },
    /// The en passant target does not follow a double push by the side that just moved
    InvalidEnPassant { square: Square },
    /// The side that just moved has its king attacked
    OpponentInCheck { color: Color },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::MissingKing { color } => write!(f, "{color} has no king"),
            BoardError::DuplicateKing { color } => write!(f, "{color} has more than one king"),
            BoardError::TooManyPawns { color, count } => {
                write!(f, "{color} has {count} pawns, at most 8 allowed")
            }
            BoardError::PawnOnBackRank { square } => {
                write!(f, "Pawn on {square} cannot stand on the first or last rank")
            }
            BoardError::CastlingWithoutPieces { color, kingside } => {
                let side = if *kingside { "king-side" } else { "queen-side" };
                write!(
                    f,
                    "{color} {side} castling right set without king and rook on their home squares"
                )
            }
            BoardError::InvalidEnPassant { square } => {
                write!(f, "Invalid en passant target {square}")
            }
            BoardError::OpponentInCheck { color } => {
                write!(f, "{color} is in check but it is not their turn")
            }
        }
    }
}

impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    // MoveParseError tests
    #[test]
    fn test_move_error_invalid_length() {
        let err = MoveParseError::InvalidLength { len: 3 };
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_move_error_invalid_square() {
        let err = MoveParseError::InvalidSquare {
            notation: "z9z9".to_string(),
        };
        assert!(err.to_string().contains("z9z9"));
    }

    #[test]
    fn test_move_error_invalid_promotion() {
        let err = MoveParseError::InvalidPromotion {
            text: "k".to_string(),
        };
        assert!(err.to_string().contains("'k'"));
    }

    // SquareError tests
    #[test]
    fn test_square_error_rank_bounds() {
        let err = SquareError::RankOutOfBounds { rank: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_square_error_file_bounds() {
        let err = SquareError::FileOutOfBounds { file: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_square_error_invalid_index() {
        let err = SquareError::InvalidIndex { index: 0x08 };
        assert!(err.to_string().contains("0x08"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    // BoardError tests
    #[test]
    fn test_board_error_missing_king() {
        let err = BoardError::MissingKing {
            color: Color::Black,
        };
        assert!(err.to_string().contains("Black"));
    }

    #[test]
    fn test_board_error_pawn_square() {
        let err = BoardError::PawnOnBackRank { square: Square::C8 };
        assert!(err.to_string().contains("c8"));
    }

    #[test]
    fn test_board_error_castling_side() {
        let err = BoardError::CastlingWithoutPieces {
            color: Color::White,
            kingside: false,
        };
        assert!(err.to_string().contains("queen-side"));
    }

    #[test]
    fn test_error_clone() {
        let err = BoardError::TooManyPawns {
            color: Color::White,
            count: 9,
        };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
