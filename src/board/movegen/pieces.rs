use super::super::tables::offsets;
use super::super::types::{Color, Move, MoveFlags, Piece, Square};
use super::super::Board;
use super::MoveSet;

impl Board {
    /// Knight, bishop, rook, queen and king moves from `from`.
    pub(crate) fn piece_moves(&self, from: Square, piece: Piece, us: Color, moves: &mut MoveSet) {
        for &direction in offsets(piece) {
            let mut current = from;
            while let Some(target) = current.offset(direction) {
                match self.colors[target.index()] {
                    None => {
                        moves.insert(Move::new(from, target, MoveFlags::QUIET));
                        if !piece.is_slider() {
                            break;
                        }
                        current = target;
                    }
                    Some(color) => {
                        if color != us {
                            moves.insert(Move::new(from, target, MoveFlags::CAPTURE));
                        }
                        break;
                    }
                }
            }
        }
    }
}
