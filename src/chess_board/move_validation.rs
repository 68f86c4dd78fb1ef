use super::error::MoveError;
use super::{ChessField, Color, Piece, PieceType};

const KNIGHT_MOVES: [(i8, i8); 8] = [(-2, -1), (-1, -2), (1, -2), (2, -1), (2, 1), (1, 2), (-1, 2), (-2, 1)];

fn illegal(kind: PieceType, reason: &'static str) -> MoveError {
    MoveError::IllegalMove { kind, reason }
}

fn piece_on(pieces: &[Piece], field: ChessField) -> Option<&Piece> {
    pieces.iter().find(|p| p.position == field)
}

impl Piece {
    /// Checks whether this piece may move to `target` given every piece on the
    /// board. Does not look at whose turn it is or whether the own king ends up
    /// attacked.
    pub fn can_move(&self, target: ChessField, pieces: &[Piece]) -> Result<(), MoveError> {
        if target == self.position {
            return Err(MoveError::NoOpMove);
        }
        if !target.is_on_board() {
            return Err(MoveError::OutOfBounds);
        }
        let occupant = piece_on(pieces, target);
        if occupant.is_some_and(|p| p.color == self.color) {
            return Err(MoveError::FriendlyOccupied);
        }

        match self.kind {
            PieceType::Pawn => self.check_pawn_move(target, occupant.is_some(), pieces),
            PieceType::Knight => self.check_knight_move(target),
            PieceType::Bishop => self.check_bishop_move(target, pieces),
            PieceType::Rook => self.check_rook_move(target, pieces),
            PieceType::Queen => self.check_queen_move(target, pieces),
            PieceType::King => self.check_king_move(target),
        }
    }

    fn delta(&self, target: ChessField) -> (i8, i8) {
        (target.row - self.position.row, target.col - self.position.col)
    }

    fn check_pawn_move(&self, target: ChessField, is_capture: bool, pieces: &[Piece]) -> Result<(), MoveError> {
        let (d_row, d_col) = self.delta(target);
        let forward = self.color.forward();
        let start_row = match self.color {
            Color::White => 1,
            Color::Black => 6,
        };

        if d_col == 0 {
            if is_capture {
                return Err(illegal(PieceType::Pawn, "a pawn can only capture diagonally"));
            }
            if d_row == forward {
                return Ok(());
            }
            if d_row == 2 * forward {
                if self.position.row != start_row {
                    return Err(illegal(PieceType::Pawn, "a pawn can only advance two squares from its starting rank"));
                }
                let between = ChessField::new(self.position.row + forward, self.position.col);
                if piece_on(pieces, between).is_some() {
                    return Err(illegal(PieceType::Pawn, "the path is blocked by another piece"));
                }
                return Ok(());
            }
            return Err(illegal(PieceType::Pawn, "a pawn can only move forward one square, or two from its starting rank"));
        }

        if d_col.abs() == 1 && d_row == forward {
            if is_capture {
                return Ok(());
            }
            return Err(illegal(PieceType::Pawn, "a pawn can only move diagonally when capturing"));
        }

        Err(illegal(PieceType::Pawn, "a pawn can only move forward, or diagonally forward to capture"))
    }

    fn check_knight_move(&self, target: ChessField) -> Result<(), MoveError> {
        if KNIGHT_MOVES.contains(&self.delta(target)) {
            Ok(())
        } else {
            Err(illegal(
                PieceType::Knight,
                "the knight can only move to the closest squares that are not on the same rank, file or diagonal",
            ))
        }
    }

    fn check_bishop_move(&self, target: ChessField, pieces: &[Piece]) -> Result<(), MoveError> {
        let (d_row, d_col) = self.delta(target);
        if d_row.abs() != d_col.abs() {
            return Err(illegal(PieceType::Bishop, "the bishop can only move diagonally"));
        }
        self.check_path_clear(target, pieces)
    }

    fn check_rook_move(&self, target: ChessField, pieces: &[Piece]) -> Result<(), MoveError> {
        let (d_row, d_col) = self.delta(target);
        if d_row != 0 && d_col != 0 {
            return Err(illegal(PieceType::Rook, "the rook can only move along a rank or a file"));
        }
        self.check_path_clear(target, pieces)
    }

    fn check_queen_move(&self, target: ChessField, pieces: &[Piece]) -> Result<(), MoveError> {
        let (d_row, d_col) = self.delta(target);
        if d_row != 0 && d_col != 0 && d_row.abs() != d_col.abs() {
            return Err(illegal(PieceType::Queen, "the queen can only move along a rank, a file or a diagonal"));
        }
        self.check_path_clear(target, pieces)
    }

    fn check_king_move(&self, target: ChessField) -> Result<(), MoveError> {
        let (d_row, d_col) = self.delta(target);
        if d_row.abs() <= 1 && d_col.abs() <= 1 {
            Ok(())
        } else {
            Err(illegal(PieceType::King, "the king can only move one square in either direction"))
        }
    }

    /// Every square strictly between the current position and `target` must be
    /// empty. Only meaningful for straight or diagonal lines.
    fn check_path_clear(&self, target: ChessField, pieces: &[Piece]) -> Result<(), MoveError> {
        let (d_row, d_col) = self.delta(target);
        let (step_row, step_col) = (d_row.signum(), d_col.signum());

        let mut current = ChessField::new(self.position.row + step_row, self.position.col + step_col);
        while current != target {
            if piece_on(pieces, current).is_some() {
                return Err(illegal(self.kind, "the path is blocked by another piece"));
            }
            current = ChessField::new(current.row + step_row, current.col + step_col);
        }
        Ok(())
    }
}
