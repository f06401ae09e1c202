//! Parsing of typed moves and promotion choices.

use crate::board::{MoveParseError, Piece, Square};

/// Parse four characters like `e2e4` or `E2E4` into 0x88 from/to indices.
pub fn parse_move_text(text: &str) -> Result<(usize, usize), MoveParseError> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != 4 {
        return Err(MoveParseError::InvalidLength { len: chars.len() });
    }
    let invalid = || MoveParseError::InvalidSquare {
        notation: text.to_string(),
    };
    let from = parse_square(chars[0], chars[1]).ok_or_else(invalid)?;
    let to = parse_square(chars[2], chars[3]).ok_or_else(invalid)?;
    Ok((from.index(), to.index()))
}

/// Parse a promotion choice: one of `q`, `r`, `b`, `n` in either case.
pub fn parse_promotion(text: &str) -> Result<Piece, MoveParseError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Piece::from_char(c)
            .filter(|piece| piece.is_promotable())
            .ok_or_else(|| MoveParseError::InvalidPromotion {
                text: text.to_string(),
            }),
        _ => Err(MoveParseError::InvalidPromotion {
            text: text.to_string(),
        }),
    }
}

fn parse_square(file: char, rank: char) -> Option<Square> {
    let file = file.to_ascii_lowercase();
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return None;
    }
    Square::new(rank as u8 - b'1', file as u8 - b'a')
}
