//! Game status evaluation and the per-turn entry point.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{Move, Square};
use super::Board;

/// Verdict returned after each attempted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// The candidate was missing, unknown or left the king in check.
    InvalidMove,
    Checkmate,
    Stalemate,
    /// The last move reached a position for the third time; a draw may be claimed.
    DrawByRepetition,
    /// 100 half-moves without a pawn move or capture.
    DrawByFiftyMoves,
    NotOver,
}

impl GameStatus {
    /// True for verdicts that end the game without a player's decision.
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::DrawByFiftyMoves
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::InvalidMove => "Invalid move",
            GameStatus::Checkmate => "Checkmate",
            GameStatus::Stalemate => "Draw by stalemate",
            GameStatus::DrawByRepetition => "Draw by threefold repetition",
            GameStatus::DrawByFiftyMoves => "Draw by 50 moves rule",
            GameStatus::NotOver => "Not over",
        };
        f.write_str(text)
    }
}

impl Board {
    /// Checkmate, stalemate, fifty-move draw or not over, for the side to move.
    ///
    /// Repetition is not reported here; see `play_next_move`.
    pub fn game_status(&mut self) -> GameStatus {
        let candidates = self.possible_moves.to_sorted_vec();
        let has_legal_move = candidates
            .into_iter()
            .any(|m| self.test_pseudo_legal_move(m));

        if !has_legal_move {
            if self.king_in_check() {
                GameStatus::Checkmate
            } else {
                GameStatus::Stalemate
            }
        } else if self.halfmove_clock >= 100 {
            GameStatus::DrawByFiftyMoves
        } else {
            GameStatus::NotOver
        }
    }

    /// Look up the pseudo-legal move between two 0x88 indices.
    ///
    /// Out-of-range or off-board indices give `None`.
    pub fn find_move(&self, from: usize, to: usize) -> Option<Move> {
        let from = Square::from_index(from)?;
        let to = Square::from_index(to)?;
        self.possible_moves.find(from, to)
    }

    /// Validate and play one move for the side to move.
    ///
    /// A missing candidate, a move not in the current move set, or one that
    /// exposes the mover's king yields `InvalidMove` and leaves the board
    /// untouched. Otherwise the move is played, the move set regenerated and
    /// the new status returned. `DrawByRepetition` is reported only when the
    /// game is not otherwise over.
    pub fn play_next_move(&mut self, candidate: Option<Move>) -> GameStatus {
        let Some(m) = candidate else {
            return GameStatus::InvalidMove;
        };
        if !self.possible_moves.contains(&m) || !self.test_pseudo_legal_move(m) {
            return GameStatus::InvalidMove;
        }

        self.play_move(m);
        self.regenerate_moves();

        match self.game_status() {
            GameStatus::NotOver if self.repetition_observed => GameStatus::DrawByRepetition,
            status => status,
        }
    }
}
