use super::error::FenError;
use super::{ChessBoard, ChessField, Color, Piece};

pub const INITIAL_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A board together with the turn number the game continues from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartPosition {
    pub board: ChessBoard,
    pub turn: u32,
}

impl Default for StartPosition {
    /// Standard layout, White to move on turn 1.
    fn default() -> Self {
        Self {
            board: ChessBoard::default(),
            turn: 1,
        }
    }
}

/// Parses a FEN string into a board and a turn number.
///
/// Only the placement field is required. The active color and the fullmove
/// number are used when present to work out the turn (odd for White, even for
/// Black). Castling, en passant and the halfmove clock are accepted and ignored.
pub fn from_fen(fen: &str) -> Result<StartPosition, FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    let placement = parts.first().copied().unwrap_or("");
    let board = parse_placement(placement)?;

    let active_color = match parts.get(1) {
        None | Some(&"w") => Color::White,
        Some(&"b") => Color::Black,
        Some(other) => return Err(FenError::InvalidColor(other.to_string())),
    };

    let color_offset = match active_color {
        Color::White => 1,
        Color::Black => 2,
    };
    let turn = match parts.get(5) {
        None => color_offset,
        Some(s) => s
            .parse::<u32>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|n| n.checked_mul(2))
            .and_then(|n| n.checked_add(color_offset))
            .ok_or_else(|| FenError::InvalidFullmove(s.to_string()))?,
    };

    Ok(StartPosition { board, turn })
}

fn parse_placement(placement: &str) -> Result<ChessBoard, FenError> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::RowCount(rows.len()));
    }

    let mut board = ChessBoard::empty();
    for (row_index, row) in rows.iter().enumerate() {
        let mut col_index = 0;

        for c in row.chars() {
            if col_index > 7 {
                return Err(FenError::RowTooLong(row_index));
            }
            if let Some(skip) = c.to_digit(10) {
                if skip == 0 {
                    return Err(FenError::InvalidPiece(c));
                }
                col_index += skip as usize;
            } else {
                let field = ChessField::new(7 - row_index as i8, col_index as i8);
                let piece = Piece::from_char(c, field).ok_or(FenError::InvalidPiece(c))?;
                board.put_piece(piece);
                col_index += 1;
            }
        }
        if col_index > 8 {
            return Err(FenError::RowTooLong(row_index));
        }
        if col_index < 8 {
            return Err(FenError::RowTooShort(row_index));
        }
    }
    Ok(board)
}

/// Piece placement field for the board, rank 8 first.
pub fn to_fen(board: &ChessBoard) -> String {
    let mut board_representation = String::new();

    for row in (0..8).rev() {
        let mut empty_count = 0;

        for col in 0..8 {
            match board.piece_at(ChessField::new(row, col)) {
                Some(piece) => {
                    if empty_count > 0 {
                        board_representation.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    board_representation.push(piece.to_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            board_representation.push_str(&empty_count.to_string());
        }

        if row > 0 {
            board_representation.push('/');
        }
    }
    board_representation
}
