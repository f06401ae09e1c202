//! Two-player terminal game on top of the board engine.
//!
//! `Session` reads moves from any `BufRead`, writes prompts and verdicts to
//! any `Write`, and drives the board one turn at a time.

mod input;

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, Write};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, GameStatus, Piece};
use crate::logging::{debug, info};

pub use input::{parse_move_text, parse_promotion};

/// Session behaviour switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print the board at the start of every fresh turn.
    pub show_board: bool,
    /// Ask the players whether to take a threefold repetition draw.
    pub offer_repetition_draws: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            show_board: true,
            offer_repetition_draws: true,
        }
    }
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveDraw,
    RepetitionDraw,
    /// Input ran out before the game finished.
    Abandoned,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            Outcome::Stalemate => write!(f, "Draw by stalemate"),
            Outcome::FiftyMoveDraw => write!(f, "Draw by 50 moves rule"),
            Outcome::RepetitionDraw => write!(f, "Draw by threefold repetition"),
            Outcome::Abandoned => write!(f, "Abandoned"),
        }
    }
}

/// One game between two players sharing a reader and a writer.
pub struct Session<R, W> {
    board: Board,
    input: R,
    output: W,
    config: SessionConfig,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// A game from the standard starting position.
    pub fn new(input: R, output: W) -> Self {
        Self::with_board(Board::new(), input, output, SessionConfig::default())
    }

    /// A game from an already built position.
    pub fn with_board(board: Board, input: R, output: W, config: SessionConfig) -> Self {
        Session {
            board,
            input,
            output,
            config,
            pending: VecDeque::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consume the session, returning the final board and the writer.
    pub fn into_parts(self) -> (Board, W) {
        (self.board, self.output)
    }

    /// Play until the game ends or the input runs out.
    pub fn run(&mut self) -> io::Result<Outcome> {
        let mut previous = GameStatus::NotOver;

        loop {
            if previous == GameStatus::InvalidMove {
                writeln!(self.output, "Invalid move! Try again")?;
            } else {
                if self.config.show_board {
                    write!(self.output, "{}", self.board)?;
                }
                if let Some(outcome) = self.report_game_over()? {
                    info!("game over: {outcome}");
                    return Ok(outcome);
                }
            }

            let Some((from, to)) = self.read_move()? else {
                info!("input ended, game abandoned");
                return Ok(Outcome::Abandoned);
            };

            let mut candidate = self.board.find_move(from, to);
            if let Some(found) = candidate.filter(|m| m.is_promotion()) {
                let Some(piece) = self.read_promotion()? else {
                    return Ok(Outcome::Abandoned);
                };
                candidate = found.with_promotion(piece);
            }

            previous = self.board.play_next_move(candidate);
            match candidate {
                Some(m) => debug!("{} played {m}: {previous}", self.board.side_to_move().opponent()),
                None => debug!("no move from {from:#04x} to {to:#04x}"),
            }

            if previous == GameStatus::DrawByRepetition && self.config.offer_repetition_draws {
                match self.ask_for_draw()? {
                    None => return Ok(Outcome::Abandoned),
                    Some(true) => {
                        writeln!(self.output, "Draw by threefold repetition")?;
                        info!("repetition draw accepted");
                        return Ok(Outcome::RepetitionDraw);
                    }
                    Some(false) => debug!("repetition draw declined"),
                }
            }
        }
    }

    fn report_game_over(&mut self) -> io::Result<Option<Outcome>> {
        let outcome = match self.board.game_status() {
            GameStatus::Checkmate => {
                let winner = self.board.side_to_move().opponent();
                writeln!(self.output, "Checkmate")?;
                writeln!(self.output, "{winner} is the WINNER!")?;
                Outcome::Checkmate { winner }
            }
            GameStatus::Stalemate => {
                writeln!(self.output, "Draw by stalemate")?;
                Outcome::Stalemate
            }
            GameStatus::DrawByFiftyMoves => {
                writeln!(self.output, "Draw by 50 moves rule")?;
                Outcome::FiftyMoveDraw
            }
            _ => return Ok(None),
        };
        self.output.flush()?;
        Ok(Some(outcome))
    }

    /// Next whitespace-separated token, or `None` at end of input.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    fn read_move(&mut self) -> io::Result<Option<(usize, usize)>> {
        let player = format!("{}: ", self.board.side_to_move());
        self.prompt(&player)?;
        loop {
            let Some(token) = self.next_token()? else {
                return Ok(None);
            };
            match parse_move_text(&token) {
                Ok(pair) => return Ok(Some(pair)),
                Err(err) => {
                    debug!("rejected move text: {err}");
                    writeln!(self.output, "Invalid format! Try again.")?;
                    writeln!(self.output, "(hint: e2e4 or E2E4)")?;
                    self.prompt(&player)?;
                }
            }
        }
    }

    fn read_promotion(&mut self) -> io::Result<Option<Piece>> {
        for piece in [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight] {
            let c = piece.to_char();
            writeln!(self.output, "{piece} ({c} or {})", c.to_ascii_uppercase())?;
        }
        self.prompt("Select piece for promotion: ")?;
        loop {
            let Some(token) = self.next_token()? else {
                return Ok(None);
            };
            match parse_promotion(&token) {
                Ok(piece) => return Ok(Some(piece)),
                Err(err) => {
                    debug!("rejected promotion: {err}");
                    writeln!(self.output, "Invalid format! Try again.")?;
                    self.prompt("Select piece for promotion: ")?;
                }
            }
        }
    }

    fn ask_for_draw(&mut self) -> io::Result<Option<bool>> {
        writeln!(self.output, "You can claim draw by threefold repetition!")?;
        writeln!(
            self.output,
            "If you decline now you will be asked again if the same position"
        )?;
        writeln!(
            self.output,
            "occurs again or if another position gets repeated 3 or more times"
        )?;
        writeln!(self.output, "(yY) for Yes or anything other for No")?;
        self.output.flush()?;

        let answer = self.next_token()?;
        Ok(answer.map(|token| token.to_ascii_lowercase().starts_with('y')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> (Outcome, Board, String) {
        let config = SessionConfig {
            show_board: false,
            offer_repetition_draws: true,
        };
        let mut session = Session::with_board(Board::new(), script.as_bytes(), Vec::new(), config);
        let outcome = session.run().unwrap();
        let (board, output) = session.into_parts();
        (outcome, board, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_fools_mate() {
        let (outcome, _, output) = run_script("f2f3 e7e5\ng2g4 d8h4\n");
        assert_eq!(
            outcome,
            Outcome::Checkmate {
                winner: Color::Black
            }
        );
        assert!(output.contains("Checkmate\nBlack is the WINNER!"));
    }

    #[test]
    fn test_bad_format_reprompts_with_hint() {
        let (outcome, board, output) = run_script("e2-e4\ne2e4\n");
        assert_eq!(outcome, Outcome::Abandoned);
        assert!(output.contains("Invalid format! Try again.\n(hint: e2e4 or E2E4)"));
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn test_illegal_move_reports_invalid() {
        let (_, board, output) = run_script("e2e5\nE2E4\n");
        assert_eq!(output.matches("Invalid move! Try again").count(), 1);
        assert_eq!(board.hash(), {
            let mut expected = Board::new();
            let e2e4 = expected.find_move(0x14, 0x34);
            expected.play_next_move(e2e4);
            expected.hash()
        });
    }

    #[test]
    fn test_prompts_name_the_side_to_move() {
        let (_, _, output) = run_script("e2e4\n");
        assert!(output.starts_with("White: "));
        assert!(output.ends_with("Black: "));
    }

    #[test]
    fn test_declined_then_accepted_repetition_draw() {
        let shuffle = "g1f3 g8f6 f3g1 f6g8 g1f3 g8f6 f3g1 f6g8";
        let script = format!("{shuffle}\nn\ng1f3\ny\n");
        let (outcome, _, output) = run_script(&script);
        assert_eq!(outcome, Outcome::RepetitionDraw);
        assert_eq!(
            output
                .matches("You can claim draw by threefold repetition!")
                .count(),
            2
        );
        assert!(output.ends_with("Draw by threefold repetition\n"));
    }
}
