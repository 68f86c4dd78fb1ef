use thiserror::Error;

use super::{ChessField, PieceType};

/// Reasons a move command is rejected. None of these are fatal: the turn loop
/// shows the message and the same player tries again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Invalid position, enter your move in the format coordinateFrom-coordinateTo")]
    Format,

    #[error("The given position {0} is empty")]
    EmptySquare(ChessField),

    #[error("The piece on {0} belongs to the other player")]
    WrongColor(ChessField),

    #[error("Illegal {} move: {}", .kind.name(), .reason)]
    IllegalMove { kind: PieceType, reason: &'static str },

    #[error("A friendly piece is at that position")]
    FriendlyOccupied,

    #[error("This position is beyond the chess playing field")]
    OutOfBounds,

    #[error("This is the initial position of the chosen chess piece")]
    NoOpMove,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("Invalid FEN string: expected 8 rows, found {0}")]
    RowCount(usize),

    #[error("Invalid FEN string: too many squares in row {0}")]
    RowTooLong(usize),

    #[error("Invalid FEN string: too few squares in row {0}")]
    RowTooShort(usize),

    #[error("Invalid piece character in FEN string: {0}")]
    InvalidPiece(char),

    #[error("Invalid FEN string: invalid active color {0:?}")]
    InvalidColor(String),

    #[error("Invalid FEN string: fullmove number is not a valid number: {0}")]
    InvalidFullmove(String),
}
