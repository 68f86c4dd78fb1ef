use tracing::debug;

use super::error::MoveError;
use super::{fen, ChessField, Color, Move, Piece, PieceType};

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessBoard {
    pieces: Vec<Piece>,
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessBoard {
    /// Creates a board with the standard 32 piece starting layout.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (color, back_row, pawn_row) in [(Color::White, 0, 1), (Color::Black, 7, 6)] {
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.pieces.push(Piece::new(*kind, color, ChessField::new(back_row, col as i8)));
            }
            for col in 0..8 {
                board.pieces.push(Piece::new(PieceType::Pawn, color, ChessField::new(pawn_row, col)));
            }
        }
        board
    }

    /// Creates an empty chess board
    pub fn empty() -> Self {
        Self { pieces: Vec::with_capacity(32) }
    }

    /// Delegates FEN parsing to the `fen` module.
    pub fn from_fen(fen: &str) -> Result<fen::StartPosition, super::FenError> {
        fen::from_fen(fen)
    }

    pub fn to_fen(&self) -> String {
        fen::to_fen(self)
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// First piece found on `field`. The board never holds two pieces on one
    /// square, so the scan order only matters for a corrupted board.
    pub fn piece_at(&self, field: ChessField) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.position == field)
    }

    fn index_of(&self, field: ChessField) -> Option<usize> {
        self.pieces.iter().position(|p| p.position == field)
    }

    /// Places a piece, replacing whatever stood on its square.
    pub(crate) fn put_piece(&mut self, piece: Piece) {
        self.pieces.retain(|p| p.position != piece.position);
        self.pieces.push(piece);
    }

    /// Moves the piece standing on `mv.from` for the player `color`.
    ///
    /// The board is untouched unless the move is legal. A legal move onto an
    /// enemy piece removes that piece.
    pub fn make_move(&mut self, color: Color, mv: Move) -> Result<(), MoveError> {
        let index = self.index_of(mv.from).ok_or(MoveError::EmptySquare(mv.from))?;
        let piece = self.pieces[index];

        if piece.color != color {
            debug!(from = %mv.from, "{} tried to move a {} piece", color, piece.color);
            return Err(MoveError::WrongColor(mv.from));
        }

        if let Err(e) = piece.can_move(mv.to, &self.pieces) {
            debug!(mv = %mv.as_algebraic(), error = %e, "move rejected");
            return Err(e);
        }

        if let Some(captured) = self.index_of(mv.to) {
            debug!(square = %mv.to, kind = %self.pieces[captured].kind, "{} piece captured", self.pieces[captured].color);
            self.pieces.swap_remove(captured);
        }

        // swap_remove may have relocated the mover, so look it up again.
        if let Some(mover) = self.pieces.iter_mut().find(|p| p.position == mv.from) {
            mover.position = mv.to;
        }
        debug!(mv = %mv.as_algebraic(), kind = %piece.kind, "{} moved", color);
        Ok(())
    }
}
