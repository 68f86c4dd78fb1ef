pub mod error;
pub mod fen;
pub mod model;
pub use error::{FenError, MoveError};
pub use fen::StartPosition;
pub use model::{ChessField, Color, Move, Piece, PieceType};

mod chess_board;
mod move_validation;
#[cfg(test)]
pub mod test_utils;
pub use chess_board::ChessBoard;

#[cfg(test)]
mod tests {
    use super::model::to_algebraic_square;
    use super::*;

    #[test]
    fn test_convertion_method() {
        assert_eq!(ChessField::from_algebraic("b2"), Some(ChessField::new(1, 1)));
        assert_eq!(ChessField::from_algebraic("b2").unwrap().as_algebraic(), "b2");
        assert_eq!(ChessField::from_algebraic("e2"), Some(ChessField::new(1, 4)));
        assert_eq!(Move::from_algebraic("e2-e4").unwrap().as_algebraic(), "e2-e4");
        assert_eq!(to_algebraic_square(7, 7), "h8");
    }

    #[test]
    fn test_convertion_rejects_bad_squares() {
        assert_eq!(ChessField::from_algebraic("i1"), None);
        assert_eq!(ChessField::from_algebraic("a9"), None);
        assert_eq!(ChessField::from_algebraic("a10"), None);
        assert_eq!(ChessField::from_algebraic(""), None);
        assert_eq!(Move::from_algebraic("e2e4"), None);
        assert_eq!(Move::from_algebraic("e2-e9"), None);
    }

    #[test]
    fn test_off_board_square_formatting() {
        assert_eq!(ChessField::new(-1, 4).as_algebraic(), "(4,-1)");
        assert!(!ChessField::new(-1, 4).is_on_board());
        assert!(ChessField::new(0, 0).is_on_board());
    }

    #[test]
    fn test_piece_equality_uses_kind() {
        let field = ChessField::new(3, 3);
        let knight = Piece::new(PieceType::Knight, Color::White, field);
        let bishop = Piece::new(PieceType::Bishop, Color::White, field);
        assert_ne!(knight, bishop);
        assert_eq!(knight, Piece::new(PieceType::Knight, Color::White, field));
    }

    #[test]
    fn test_piece_chars() {
        let field = ChessField::new(0, 0);
        for c in "PNBRQKpnbrqk".chars() {
            assert_eq!(Piece::from_char(c, field).unwrap().to_char(), c);
        }
        assert_eq!(Piece::from_char('x', field), None);
        assert_eq!(Piece::new(PieceType::King, Color::White, field).to_unicode(), '♔');
        assert_eq!(Piece::new(PieceType::Pawn, Color::Black, field).to_unicode(), '♟');
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Color::White.to_string(), "White");
        assert_eq!(Color::Black.to_string(), "Black");
        assert_eq!(PieceType::Knight.to_string(), "N");
        assert_eq!(PieceType::King.to_string(), "K");
    }
}
