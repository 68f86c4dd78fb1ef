use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Rank direction a pawn of this color advances in.
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub fn name(&self) -> &'static str {
        match self {
            PieceType::Pawn => "pawn",
            PieceType::Knight => "knight",
            PieceType::Bishop => "bishop",
            PieceType::Rook => "rook",
            PieceType::Queen => "queen",
            PieceType::King => "king",
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceType::Pawn => write!(f, "P"),
            PieceType::Knight => write!(f, "N"),
            PieceType::Bishop => write!(f, "B"),
            PieceType::Rook => write!(f, "R"),
            PieceType::Queen => write!(f, "Q"),
            PieceType::King => write!(f, "K"),
        }
    }
}

/// A square on the board. `col` is the file (0 = "a"), `row` the rank (0 = "1").
///
/// Fields are signed so targets beyond the edge of the board can be expressed
/// and rejected by the move rules instead of wrapping around.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct ChessField {
    pub row: i8,
    pub col: i8,
}

impl ChessField {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Parses a square like "e3". Returns `None` for anything outside a1..h8.
    pub fn from_algebraic(algebraic: &str) -> Option<Self> {
        let mut chars = algebraic.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }
        Some(Self {
            row: (rank as u8 - b'1') as i8,
            col: (file as u8 - b'a') as i8,
        })
    }

    pub fn as_algebraic(&self) -> String {
        to_algebraic_square(self.row, self.col)
    }

    pub fn is_on_board(&self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }
}

impl fmt::Display for ChessField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_algebraic())
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Piece {
    pub kind: PieceType,
    pub color: Color,
    pub position: ChessField,
}

impl Piece {
    pub fn new(kind: PieceType, color: Color, position: ChessField) -> Self {
        Self { kind, color, position }
    }

    pub fn to_char(&self) -> char {
        let c = match self.kind {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        };
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    pub fn from_char(c: char, position: ChessField) -> Option<Self> {
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Self::new(kind, color, position))
    }

    pub fn to_unicode(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceType::Pawn) => '♙',
            (Color::White, PieceType::Knight) => '♘',
            (Color::White, PieceType::Bishop) => '♗',
            (Color::White, PieceType::Rook) => '♖',
            (Color::White, PieceType::Queen) => '♕',
            (Color::White, PieceType::King) => '♔',
            (Color::Black, PieceType::Pawn) => '♟',
            (Color::Black, PieceType::Knight) => '♞',
            (Color::Black, PieceType::Bishop) => '♝',
            (Color::Black, PieceType::Rook) => '♜',
            (Color::Black, PieceType::Queen) => '♛',
            (Color::Black, PieceType::King) => '♚',
        }
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Move {
    pub from: ChessField,
    pub to: ChessField,
}

impl Move {
    pub fn new(from: ChessField, to: ChessField) -> Self {
        Self { from, to }
    }

    /// Parses "e2-e4". Syntax checking against the full input pattern is the
    /// caller's job; this only needs two squares around a dash.
    pub fn from_algebraic(algebraic: &str) -> Option<Self> {
        let (from, to) = algebraic.split_once('-')?;
        Some(Self {
            from: ChessField::from_algebraic(from)?,
            to: ChessField::from_algebraic(to)?,
        })
    }

    pub fn as_algebraic(&self) -> String {
        format!("{}-{}", self.from.as_algebraic(), self.to.as_algebraic())
    }
}

pub fn to_algebraic_square(row: i8, col: i8) -> String {
    if !(0..8).contains(&row) || !(0..8).contains(&col) {
        return format!("({},{})", col, row);
    }
    let file = (b'a' + col as u8) as char;
    let rank = row + 1;
    format!("{}{}", file, rank)
}
