use super::super::tables::CASTLING_PATHS;
use super::super::types::{Color, Move, MoveFlags};
use super::super::Board;
use super::MoveSet;

impl Board {
    /// One castle move per castling right `us` still holds whose squares
    /// between king and rook are empty. Attacked squares are left to the
    /// legality filter.
    pub(crate) fn castling_moves(&self, us: Color, moves: &mut MoveSet) {
        for path in CASTLING_PATHS.iter().filter(|path| path.color == us) {
            if !self.castling_rights.has_bit(path.right) {
                continue;
            }
            let blocked = path
                .must_be_empty
                .iter()
                .any(|&square| self.pieces[square.index()].is_some());
            if !blocked {
                moves.insert(Move::new(path.king_from, path.king_to, MoveFlags::CASTLE));
            }
        }
    }
}
