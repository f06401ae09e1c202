use super::history::RepetitionTable;
use super::movegen::MoveSet;
use super::types::{CastlingRights, Color, Piece, Square, BOARD_SLOTS};

/// Squares holding the pawns of one color, at most eight.
///
/// This is a cache kept in step with the occupancy arrays by the move
/// executor; the arrays remain the source of truth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PawnSquares {
    slots: [Option<Square>; 8],
}

impl PawnSquares {
    pub const fn new() -> Self {
        PawnSquares { slots: [None; 8] }
    }

    /// Add a pawn square. Returns false if all eight slots are taken.
    pub(crate) fn insert(&mut self, square: Square) -> bool {
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(square);
                true
            }
            None => false,
        }
    }

    /// Drop a pawn square. Returns false if it was not cached.
    pub(crate) fn remove(&mut self, square: Square) -> bool {
        match self.slots.iter_mut().find(|slot| **slot == Some(square)) {
            Some(slot) => {
                *slot = None;
                true
            }
            None => false,
        }
    }

    /// Move a cached pawn from `from` to `to`.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> bool {
        match self.slots.iter_mut().find(|slot| **slot == Some(from)) {
            Some(slot) => {
                *slot = Some(to);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, square: Square) -> bool {
        self.slots.contains(&Some(square))
    }

    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.slots.iter().flatten().copied()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

/// Board geometry touched by a move: both occupancy arrays and the
/// king and pawn caches. Copied whole to undo a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Placement {
    pub(crate) colors: [Option<Color>; BOARD_SLOTS],
    pub(crate) pieces: [Option<Piece>; BOARD_SLOTS],
    pub(crate) king_squares: [Square; 2],
    pub(crate) pawn_squares: [PawnSquares; 2],
}

/// Everything needed to take back one `make_move`.
#[derive(Clone, Debug)]
pub struct UnmakeInfo {
    pub(crate) placement: Placement,
    pub(crate) previous_side_to_move: Color,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_hash: u64,
    pub(crate) made_hash: u64,
    pub(crate) previous_repetition_count: u32,
    pub(crate) previous_repetition_observed: bool,
    pub(crate) previous_moves: MoveSet,
}

/// One game's position: occupancy, caches, rights, counters and history.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) colors: [Option<Color>; BOARD_SLOTS],
    pub(crate) pieces: [Option<Piece>; BOARD_SLOTS],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) king_squares: [Square; 2],
    pub(crate) pawn_squares: [PawnSquares; 2],
    pub(crate) possible_moves: MoveSet,
    pub(crate) hash: u64, // Zobrist hash of the current position
    pub(crate) repetition_counts: RepetitionTable,
    pub(crate) repetition_observed: bool,
}

impl Board {
    /// The standard starting position with full castling rights.
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, &piece) in (0u8..).zip(back_rank.iter()) {
            for (rank, color, piece) in [
                (0, Color::White, piece),
                (1, Color::White, Piece::Pawn),
                (6, Color::Black, Piece::Pawn),
                (7, Color::Black, piece),
            ] {
                if let Some(square) = Square::new(rank, file) {
                    board.set_piece(square, color, piece);
                }
            }
        }

        board.castling_rights = CastlingRights::all();
        board.side_to_move = Color::White;
        board.finish_setup();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            colors: [None; BOARD_SLOTS],
            pieces: [None; BOARD_SLOTS],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            king_squares: [Square::E1, Square::E8],
            pawn_squares: [PawnSquares::new(); 2],
            possible_moves: MoveSet::new(),
            hash: 0,
            repetition_counts: RepetitionTable::new(),
            repetition_observed: false,
        }
    }

    /// Write a piece into both occupancy arrays. Caches are not touched.
    #[inline]
    pub(crate) fn set_piece(&mut self, square: Square, color: Color, piece: Piece) {
        self.colors[square.index()] = Some(color);
        self.pieces[square.index()] = Some(piece);
    }

    #[inline]
    pub(crate) fn clear_square(&mut self, square: Square) {
        self.colors[square.index()] = None;
        self.pieces[square.index()] = None;
    }

    /// Rebuild caches from occupancy, hash the position, seed the history
    /// with it and generate the move set.
    pub(crate) fn finish_setup(&mut self) {
        self.pawn_squares = [PawnSquares::new(); 2];
        for square in Square::all() {
            match self.piece_at(square) {
                Some((color, Piece::King)) => self.king_squares[color.index()] = square,
                Some((color, Piece::Pawn)) => {
                    self.pawn_squares[color.index()].insert(square);
                }
                _ => {}
            }
        }
        self.hash = self.zobrist_hash();
        self.repetition_counts = RepetitionTable::new();
        self.repetition_counts.set(self.hash, 1);
        self.repetition_observed = false;
        self.regenerate_moves();
    }

    pub(crate) fn placement(&self) -> Placement {
        Placement {
            colors: self.colors,
            pieces: self.pieces,
            king_squares: self.king_squares,
            pawn_squares: self.pawn_squares,
        }
    }

    pub(crate) fn restore_placement(&mut self, placement: &Placement) {
        self.colors = placement.colors;
        self.pieces = placement.pieces;
        self.king_squares = placement.king_squares;
        self.pawn_squares = placement.pawn_squares;
    }

    /// Color and kind of the piece on `square`, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        let idx = square.index();
        self.colors[idx].zip(self.pieces[idx])
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Half-moves since the last pawn move or capture.
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    pub fn pawn_squares(&self, color: Color) -> &PawnSquares {
        &self.pawn_squares[color.index()]
    }

    /// Zobrist hash of the current position as last recorded.
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// How many times the position with `hash` has occurred this game.
    pub fn repetition_count(&self, hash: u64) -> u32 {
        self.repetition_counts.get(hash)
    }

    /// True if the last move reached a position for the third time or more.
    pub fn repetition_observed(&self) -> bool {
        self.repetition_observed
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
