//! Attack and check detection.

use super::tables::{BISHOP_DIRECTIONS, KING_DIRECTIONS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};
use super::types::{Color, Piece, Square};
use super::Board;

impl Board {
    /// Returns true if any piece of `attacker` attacks `square`.
    pub fn square_under_attack(&self, square: Square, attacker: Color) -> bool {
        self.attacked_by_pawn(square, attacker)
            || self.attacked_by_leaper(square, attacker, &KNIGHT_OFFSETS, Piece::Knight)
            || self.attacked_by_leaper(square, attacker, &KING_DIRECTIONS, Piece::King)
            || self.attacked_by_slider(square, attacker, &BISHOP_DIRECTIONS, Piece::attacks_diagonally)
            || self.attacked_by_slider(square, attacker, &ROOK_DIRECTIONS, Piece::attacks_straight)
    }

    /// Is the side to move in check?
    pub fn king_in_check(&self) -> bool {
        self.is_in_check(self.side_to_move)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.square_under_attack(self.king_squares[color.index()], color.opponent())
    }

    // Uses the pawn cache instead of scanning the board.
    fn attacked_by_pawn(&self, square: Square, attacker: Color) -> bool {
        let forward = attacker.pawn_forward();
        self.pawn_squares[attacker.index()].iter().any(|pawn| {
            pawn.offset(forward - 1) == Some(square) || pawn.offset(forward + 1) == Some(square)
        })
    }

    fn attacked_by_leaper(
        &self,
        square: Square,
        attacker: Color,
        offsets: &[i8],
        piece: Piece,
    ) -> bool {
        offsets.iter().any(|&delta| {
            square
                .offset(delta)
                .is_some_and(|from| self.piece_at(from) == Some((attacker, piece)))
        })
    }

    // The first occupied square along each ray decides.
    fn attacked_by_slider(
        &self,
        square: Square,
        attacker: Color,
        directions: &[i8],
        moves_along: fn(Piece) -> bool,
    ) -> bool {
        for &direction in directions {
            let mut current = square;
            while let Some(next) = current.offset(direction) {
                if let Some((color, piece)) = self.piece_at(next) {
                    if color == attacker && moves_along(piece) {
                        return true;
                    }
                    break;
                }
                current = next;
            }
        }
        false
    }
}
