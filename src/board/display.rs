use std::fmt;

use super::types::Square;
use super::Board;

const FILE_LABELS: &str = "  a b c d e f g h";

impl fmt::Display for Board {
    /// Ranks 8 to 1 with file letters above and below and rank numbers on
    /// both sides. White pieces are uppercase, empty squares are `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{FILE_LABELS}")?;
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let symbol = Square::new(rank, file)
                    .and_then(|square| self.piece_at(square))
                    .map_or('-', |(color, piece)| piece.to_colored_char(color));
                write!(f, "{symbol} ")?;
            }
            writeln!(f, "{}", rank + 1)?;
        }
        writeln!(f, "{FILE_LABELS}")
    }
}
