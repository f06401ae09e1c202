//! Move types.

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::{Square, BOARD_SLOTS};

// Bit values used by `Move::encoded`.
const ENC_CAPTURE: u32 = 1;
const ENC_CASTLE: u32 = 2;
const ENC_EN_PASSANT: u32 = 4;
const ENC_DOUBLE_PUSH: u32 = 8;
const ENC_PAWN_MOVE: u32 = 16;
const ENC_PROMOTE: u32 = 32;

/// Independent properties of a move.
///
/// Flags combine freely: a pawn capturing onto the last rank is
/// `capture + pawn_move` with a promotion piece on the `Move`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveFlags {
    pub capture: bool,
    pub castle: bool,
    pub en_passant: bool,
    /// Any pawn move.
    pub pawn_move: bool,
    /// Two-square pawn advance; sets the en passant target.
    pub double_push: bool,
}

impl MoveFlags {
    pub const QUIET: MoveFlags = MoveFlags {
        capture: false,
        castle: false,
        en_passant: false,
        pawn_move: false,
        double_push: false,
    };
    pub const CAPTURE: MoveFlags = MoveFlags {
        capture: true,
        ..MoveFlags::QUIET
    };
    pub const CASTLE: MoveFlags = MoveFlags {
        castle: true,
        ..MoveFlags::QUIET
    };
    pub const PAWN_PUSH: MoveFlags = MoveFlags {
        pawn_move: true,
        ..MoveFlags::QUIET
    };
    pub const DOUBLE_PUSH: MoveFlags = MoveFlags {
        pawn_move: true,
        double_push: true,
        ..MoveFlags::QUIET
    };
    pub const PAWN_CAPTURE: MoveFlags = MoveFlags {
        capture: true,
        pawn_move: true,
        ..MoveFlags::QUIET
    };
    pub const EN_PASSANT: MoveFlags = MoveFlags {
        capture: true,
        en_passant: true,
        pawn_move: true,
        ..MoveFlags::QUIET
    };

    const fn bits(self) -> u32 {
        let mut bits = 0;
        if self.capture {
            bits |= ENC_CAPTURE;
        }
        if self.castle {
            bits |= ENC_CASTLE;
        }
        if self.en_passant {
            bits |= ENC_EN_PASSANT;
        }
        if self.double_push {
            bits |= ENC_DOUBLE_PUSH;
        }
        if self.pawn_move {
            bits |= ENC_PAWN_MOVE;
        }
        bits
    }
}

/// A move from one square to another with its flags and optional promotion piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<Piece>,
    flags: MoveFlags,
}

impl Move {
    /// Create a non-promoting move.
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, flags: MoveFlags) -> Self {
        Move {
            from,
            to,
            promotion: None,
            flags,
        }
    }

    /// Create a promotion to `piece`.
    #[inline]
    #[must_use]
    pub const fn new_promotion(from: Square, to: Square, piece: Piece, flags: MoveFlags) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
            flags,
        }
    }

    /// The same promotion move with a different piece chosen.
    ///
    /// Returns `None` if this is not a promotion or `piece` cannot be promoted to.
    #[must_use]
    pub fn with_promotion(self, piece: Piece) -> Option<Self> {
        if self.is_promotion() && piece.is_promotable() {
            Some(Move {
                promotion: Some(piece),
                ..self
            })
        } else {
            None
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    #[inline]
    #[must_use]
    pub const fn flags(self) -> MoveFlags {
        self.flags
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.flags.capture
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(self) -> bool {
        self.flags.castle
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.flags.en_passant
    }

    #[inline]
    #[must_use]
    pub const fn is_pawn_move(self) -> bool {
        self.flags.pawn_move
    }

    #[inline]
    #[must_use]
    pub const fn is_double_push(self) -> bool {
        self.flags.double_push
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Pack the move into one integer: from, to, promotion and flag bytes.
    ///
    /// Ordering between moves compares this value.
    #[must_use]
    pub const fn encoded(self) -> u32 {
        let (promote, promote_bit) = match self.promotion {
            Some(piece) => (piece.index() as u32, ENC_PROMOTE),
            None => (0, 0),
        };
        self.from.index() as u32
            | (self.to.index() as u32) << 8
            | promote << 16
            | (self.flags.bits() | promote_bit) << 24
    }
}

impl PartialOrd for Move {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Move {
    fn cmp(&self, other: &Self) -> Ordering {
        self.encoded().cmp(&other.encoded())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.flags.capture {
            write!(f, " cap")?;
        }
        if self.flags.castle {
            write!(f, " castle")?;
        }
        if self.flags.en_passant {
            write!(f, " ep")?;
        }
        if self.flags.double_push {
            write!(f, " double")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// Lookup key of a move: `from * 128 + to`, plus the promotion piece so
/// that the four promotions sharing one pair of squares stay distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveKey {
    from_to: u16,
    promotion: Option<Piece>,
}

impl MoveKey {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, promotion: Option<Piece>) -> Self {
        MoveKey {
            from_to: (from.index() * BOARD_SLOTS + to.index()) as u16,
            promotion,
        }
    }

    #[inline]
    #[must_use]
    pub const fn of(mv: &Move) -> Self {
        MoveKey::new(mv.from, mv.to, mv.promotion)
    }

    #[inline]
    #[must_use]
    pub const fn from_to(self) -> u16 {
        self.from_to
    }
}
