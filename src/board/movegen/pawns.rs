use super::super::tables::{EAST, WEST};
use super::super::types::{Color, Move, MoveFlags, Piece, Square, PROMOTION_PIECES};
use super::super::Board;
use super::MoveSet;

impl Board {
    pub(crate) fn pawn_moves(&self, from: Square, us: Color, moves: &mut MoveSet) {
        let forward = us.pawn_forward();

        for side in [WEST, EAST] {
            // Off-board targets mean the pawn is on the edge file
            if let Some(target) = from.offset(forward + side) {
                if self.colors[target.index()] == Some(us.opponent()) {
                    push_pawn_move(from, target, us, MoveFlags::PAWN_CAPTURE, moves);
                }
            }
        }

        let Some(single) = from.offset(forward) else {
            return;
        };
        if self.pieces[single.index()].is_some() {
            return;
        }
        push_pawn_move(from, single, us, MoveFlags::PAWN_PUSH, moves);

        if from.rank() == us.pawn_start_rank() {
            if let Some(double) = single.offset(forward) {
                if self.pieces[double.index()].is_none() {
                    moves.insert(Move::new(from, double, MoveFlags::DOUBLE_PUSH));
                }
            }
        }
    }

    pub(crate) fn en_passant_moves(&self, us: Color, moves: &mut MoveSet) {
        let Some(target) = self.en_passant_target else {
            return;
        };
        let behind = -us.pawn_forward();
        for side in [WEST, EAST] {
            if let Some(from) = target.offset(behind + side) {
                if self.piece_at(from) == Some((us, Piece::Pawn)) {
                    moves.insert(Move::new(from, target, MoveFlags::EN_PASSANT));
                }
            }
        }
    }
}

/// Insert a pawn move, expanding it into the four promotions on the last rank.
fn push_pawn_move(from: Square, to: Square, us: Color, flags: MoveFlags, moves: &mut MoveSet) {
    if to.rank() == us.pawn_promotion_rank() {
        for piece in PROMOTION_PIECES {
            moves.insert(Move::new_promotion(from, to, piece, flags));
        }
    } else {
        moves.insert(Move::new(from, to, flags));
    }
}
