use std::io::{self, BufRead, Write};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info};

use crate::chess_board::{ChessBoard, Color, Move, MoveError};
use crate::ui::{render_to_string, GlyphSet};

lazy_static! {
    static ref MOVE_PATTERN: Regex = Regex::new(r"^[a-h][1-8]-[a-h][1-8]$").expect("move pattern compiles");
}

/// Odd turns belong to White, even turns to Black.
pub fn color_for_turn(turn: u32) -> Color {
    if turn % 2 == 0 {
        Color::Black
    } else {
        Color::White
    }
}

/// Parses a move command like "e2-e4". Surrounding whitespace is ignored.
pub fn parse_move(input: &str) -> Result<Move, MoveError> {
    let input = input.trim();
    if !MOVE_PATTERN.is_match(input) {
        return Err(MoveError::Format);
    }
    Move::from_algebraic(input).ok_or(MoveError::Format)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TurnState {
    AwaitInput,
    ValidateFormat(String),
    ResolveMove(Move),
    Error(MoveError),
    NextTurn,
}

/// Alternating two player game on one board, reading moves from `input` and
/// drawing to `output`.
pub struct TurnLoop<R, W> {
    board: ChessBoard,
    turn: u32,
    glyphs: GlyphSet,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TurnLoop<R, W> {
    pub fn new(board: ChessBoard, turn: u32, glyphs: GlyphSet, input: R, output: W) -> Self {
        Self {
            board,
            turn: turn.max(1),
            glyphs,
            input,
            output,
        }
    }

    pub fn board(&self) -> &ChessBoard {
        &self.board
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn active_color(&self) -> Color {
        color_for_turn(self.turn)
    }

    /// Plays turns until the input runs dry. The game itself never ends: there
    /// is no checkmate or draw detection, so closing the input is the only way
    /// out.
    pub fn run(&mut self) -> io::Result<()> {
        let mut state = TurnState::AwaitInput;
        loop {
            state = match state {
                TurnState::AwaitInput => {
                    self.draw()?;
                    match self.read_line()? {
                        Some(line) => TurnState::ValidateFormat(line),
                        None => break,
                    }
                }
                TurnState::ValidateFormat(line) => match parse_move(&line) {
                    Ok(mv) => TurnState::ResolveMove(mv),
                    Err(e) => TurnState::Error(e),
                },
                TurnState::ResolveMove(mv) => {
                    let color = self.active_color();
                    match self.board.make_move(color, mv) {
                        Ok(()) => TurnState::NextTurn,
                        Err(e) => TurnState::Error(e),
                    }
                }
                TurnState::Error(e) => {
                    debug!(turn = self.turn, error = %e, "turn rejected");
                    write!(self.output, "{} (Press Enter to continue)", e)?;
                    self.output.flush()?;
                    match self.read_line()? {
                        Some(_) => TurnState::AwaitInput,
                        None => break,
                    }
                }
                TurnState::NextTurn => {
                    // u32::MAX is odd, so wrapping to 0 keeps the parity.
                    self.turn = self.turn.wrapping_add(1);
                    debug!(turn = self.turn, "{} to move", self.active_color());
                    TurnState::AwaitInput
                }
            };
        }
        info!(turn = self.turn, "input closed, leaving the game");
        Ok(())
    }

    fn draw(&mut self) -> io::Result<()> {
        let frame = render_to_string(&self.board, self.glyphs);
        write!(self.output, "\n{}\n{}. {}'s turn : ", frame, self.turn, self.active_color())?;
        self.output.flush()
    }

    /// `None` once the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
