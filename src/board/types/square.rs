//! 0x88 square addressing.
//!
//! A square is an index into a 128-slot space laid over the 8x8 board:
//! `index = rank * 16 + file`. The upper half of every row (files 8..16)
//! is padding, so any index with a bit of `0x88` set is off the board.
//! Stepping by a direction offset and testing that mask is all the
//! edge detection move generation needs.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of slots in the 0x88 addressing space.
pub const BOARD_SLOTS: usize = 128;

/// Returns true if `index` addresses a real board square.
#[inline]
#[must_use]
pub const fn is_valid_index(index: i32) -> bool {
    index >= 0 && index < BOARD_SLOTS as i32 && index & 0x88 == 0
}

/// A square on the chess board, stored as its 0x88 index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

#[rustfmt::skip]
impl Square {
    pub const A1: Square = Square(0x00); pub const B1: Square = Square(0x01);
    pub const C1: Square = Square(0x02); pub const D1: Square = Square(0x03);
    pub const E1: Square = Square(0x04); pub const F1: Square = Square(0x05);
    pub const G1: Square = Square(0x06); pub const H1: Square = Square(0x07);
    pub const A2: Square = Square(0x10); pub const B2: Square = Square(0x11);
    pub const C2: Square = Square(0x12); pub const D2: Square = Square(0x13);
    pub const E2: Square = Square(0x14); pub const F2: Square = Square(0x15);
    pub const G2: Square = Square(0x16); pub const H2: Square = Square(0x17);
    pub const A3: Square = Square(0x20); pub const B3: Square = Square(0x21);
    pub const C3: Square = Square(0x22); pub const D3: Square = Square(0x23);
    pub const E3: Square = Square(0x24); pub const F3: Square = Square(0x25);
    pub const G3: Square = Square(0x26); pub const H3: Square = Square(0x27);
    pub const A4: Square = Square(0x30); pub const B4: Square = Square(0x31);
    pub const C4: Square = Square(0x32); pub const D4: Square = Square(0x33);
    pub const E4: Square = Square(0x34); pub const F4: Square = Square(0x35);
    pub const G4: Square = Square(0x36); pub const H4: Square = Square(0x37);
    pub const A5: Square = Square(0x40); pub const B5: Square = Square(0x41);
    pub const C5: Square = Square(0x42); pub const D5: Square = Square(0x43);
    pub const E5: Square = Square(0x44); pub const F5: Square = Square(0x45);
    pub const G5: Square = Square(0x46); pub const H5: Square = Square(0x47);
    pub const A6: Square = Square(0x50); pub const B6: Square = Square(0x51);
    pub const C6: Square = Square(0x52); pub const D6: Square = Square(0x53);
    pub const E6: Square = Square(0x54); pub const F6: Square = Square(0x55);
    pub const G6: Square = Square(0x56); pub const H6: Square = Square(0x57);
    pub const A7: Square = Square(0x60); pub const B7: Square = Square(0x61);
    pub const C7: Square = Square(0x62); pub const D7: Square = Square(0x63);
    pub const E7: Square = Square(0x64); pub const F7: Square = Square(0x65);
    pub const G7: Square = Square(0x66); pub const H7: Square = Square(0x67);
    pub const A8: Square = Square(0x70); pub const B8: Square = Square(0x71);
    pub const C8: Square = Square(0x72); pub const D8: Square = Square(0x73);
    pub const E8: Square = Square(0x74); pub const F8: Square = Square(0x75);
    pub const G8: Square = Square(0x76); pub const H8: Square = Square(0x77);
}

impl Square {
    /// Create a square from rank and file (both 0-7), or `None` if out of range.
    #[must_use]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square((rank << 4) | file))
        } else {
            None
        }
    }

    /// Create a square from a raw 0x88 index, rejecting padding and out-of-range slots.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < BOARD_SLOTS && index & 0x88 == 0 {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// The raw 0x88 index, usable directly into 128-slot arrays.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 >> 4
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 & 0x7
    }

    /// Step by a direction offset. Returns `None` when the step leaves the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: i8) -> Option<Self> {
        let target = self.0 as i32 + delta as i32;
        if is_valid_index(target) {
            Some(Square(target as u8))
        } else {
            None
        }
    }

    /// All 64 board squares, a1 first, h8 last.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SLOTS).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() + b'a') as char, self.rank() + 1)
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Square::from_index(index).ok_or(SquareError::InvalidIndex { index })
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(((rank << 4) | file) as u8))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let file = match file.to_ascii_lowercase() {
            f @ 'a'..='h' => f as u8 - b'a',
            _ => return Err(invalid()),
        };
        let rank = match rank {
            r @ '1'..='8' => r as u8 - b'1',
            _ => return Err(invalid()),
        };
        Square::new(rank, file).ok_or_else(invalid)
    }
}
