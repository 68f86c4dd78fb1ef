use super::error::MoveError;
use super::{ChessBoard, ChessField, Move, Piece, PieceType};

pub fn field(algebraic: &str) -> ChessField {
    ChessField::from_algebraic(algebraic).unwrap()
}

pub fn mv(algebraic: &str) -> Move {
    Move::from_algebraic(algebraic).unwrap()
}

pub fn board_from_placement(placement: &str) -> ChessBoard {
    ChessBoard::from_fen(placement).expect("Invalid FEN string").board
}

/// Compares every on-board square the piece on `from` accepts with `expected`.
pub fn assert_legal_targets(board: &ChessBoard, from: &str, mut expected: Vec<&str>) {
    let pieces: Vec<Piece> = board.pieces().copied().collect();
    let piece = board.piece_at(field(from)).unwrap();
    let mut generated: Vec<_> = (0..8)
        .flat_map(|row| (0..8).map(move |col| ChessField::new(row, col)))
        .filter(|target| piece.can_move(*target, &pieces).is_ok())
        .map(|target| target.as_algebraic())
        .collect();
    generated.sort();
    expected.sort();

    assert_eq!(generated, expected);
}

pub fn assert_rejected(result: Result<(), MoveError>, expected_kind: PieceType) {
    match result {
        Err(MoveError::IllegalMove { kind, .. }) => assert_eq!(kind, expected_kind),
        other => panic!("expected an illegal {:?} move, got {:?}", expected_kind, other),
    }
}
