use std::mem;

use super::state::UnmakeInfo;
use super::tables::{castling_clear_mask, castling_path};
use super::types::{Move, Piece};
use super::Board;

impl Board {
    /// Move pieces and keep the king and pawn caches in step.
    ///
    /// Touches only occupancy and caches, so the legality filter can run
    /// it speculatively and undo it with a `Placement` copy.
    pub(crate) fn apply_placement(&mut self, m: Move) {
        let (from, to) = (m.from(), m.to());
        let Some((color, piece)) = self.piece_at(from) else {
            return;
        };
        let them = color.opponent();

        if m.is_castle() {
            if let Some(path) = castling_path(to) {
                if let Some((rook_color, rook)) = self.piece_at(path.rook_from) {
                    self.clear_square(path.rook_from);
                    self.set_piece(path.rook_to, rook_color, rook);
                }
            }
        }

        let captured = self.piece_at(to);
        self.set_piece(to, color, m.promotion().unwrap_or(piece));
        self.clear_square(from);

        if piece == Piece::King {
            self.king_squares[color.index()] = to;
        }

        if captured == Some((them, Piece::Pawn)) {
            self.pawn_squares[them.index()].remove(to);
        }
        if piece == Piece::Pawn {
            let pawns = &mut self.pawn_squares[color.index()];
            if m.is_promotion() {
                pawns.remove(from);
            } else {
                pawns.relocate(from, to);
            }
        }

        if m.is_en_passant() {
            if let Some(victim) = to.offset(-color.pawn_forward()) {
                self.clear_square(victim);
                self.pawn_squares[them.index()].remove(victim);
            }
        }
    }

    /// Apply an assumed-legal move for the side to move and record the
    /// resulting position. No legality checking happens here.
    pub(crate) fn play_move(&mut self, m: Move) {
        let mover = self.side_to_move;
        self.apply_placement(m);

        self.castling_rights
            .apply_mask(castling_clear_mask(m.from()) & castling_clear_mask(m.to()));

        self.en_passant_target = if m.is_double_push() {
            m.from().offset(mover.pawn_forward())
        } else {
            None
        };

        if m.is_pawn_move() || m.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        self.side_to_move = mover.opponent();

        self.hash = self.zobrist_hash();
        let occurrences = self.repetition_counts.increment(self.hash);
        self.repetition_observed = occurrences >= 3;
    }

    /// Play `m` and regenerate the move set, returning what `unmake_move`
    /// needs to take it back.
    pub fn make_move(&mut self, m: Move) -> UnmakeInfo {
        let placement = self.placement();
        let previous_side_to_move = self.side_to_move;
        let previous_castling_rights = self.castling_rights;
        let previous_en_passant_target = self.en_passant_target;
        let previous_halfmove_clock = self.halfmove_clock;
        let previous_hash = self.hash;
        let previous_repetition_observed = self.repetition_observed;

        self.play_move(m);
        let made_hash = self.hash;
        let previous_repetition_count = self.repetition_counts.get(made_hash).saturating_sub(1);

        let fresh = self.generate_all_possible_moves();
        let previous_moves = mem::replace(&mut self.possible_moves, fresh);

        UnmakeInfo {
            placement,
            previous_side_to_move,
            previous_castling_rights,
            previous_en_passant_target,
            previous_halfmove_clock,
            previous_hash,
            made_hash,
            previous_repetition_count,
            previous_repetition_observed,
            previous_moves,
        }
    }

    /// Take back the move `info` was returned for.
    pub fn unmake_move(&mut self, info: UnmakeInfo) {
        self.repetition_counts
            .set(info.made_hash, info.previous_repetition_count);
        self.restore_placement(&info.placement);
        self.side_to_move = info.previous_side_to_move;
        self.castling_rights = info.previous_castling_rights;
        self.en_passant_target = info.previous_en_passant_target;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.hash = info.previous_hash;
        self.repetition_observed = info.previous_repetition_observed;
        self.possible_moves = info.previous_moves;
    }
}
