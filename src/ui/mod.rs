use crate::chess_board::{ChessBoard, ChessField, Piece};

const TERMINAL_LINE: &str = " -----------------------------------------";
const SEPARATOR_LINE: &str = " |----+----+----+----+----+----+----+----|";
const FILE_LINE: &str = "   a    b    c    d    e    f    g    h";

/// Which characters stand for the pieces on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphSet {
    /// Chess symbols, e.g. ♔ for the white king.
    #[default]
    Unicode,
    /// FEN letters, uppercase for White and lowercase for Black.
    Ascii,
}

impl GlyphSet {
    pub fn glyph(&self, piece: &Piece) -> char {
        match self {
            GlyphSet::Unicode => piece.to_unicode(),
            GlyphSet::Ascii => piece.to_char(),
        }
    }
}

/// Renders the board as a fixed text grid, rank 8 on top, with rank numbers on
/// the left and file letters underneath.
pub fn render_to_string(board: &ChessBoard, glyphs: GlyphSet) -> String {
    let mut board_representation = String::new();
    board_representation.push_str(TERMINAL_LINE);
    board_representation.push('\n');

    for row in (0..8).rev() {
        board_representation.push_str(&format!("{}|", row + 1));
        for col in 0..8 {
            match board.piece_at(ChessField::new(row, col)) {
                Some(piece) => board_representation.push_str(&format!(" {}  |", glyphs.glyph(piece))),
                None => board_representation.push_str("    |"),
            }
        }
        board_representation.push('\n');

        if row > 0 {
            board_representation.push_str(SEPARATOR_LINE);
            board_representation.push('\n');
        }
    }

    board_representation.push_str(TERMINAL_LINE);
    board_representation.push('\n');
    board_representation.push_str(FILE_LINE);
    board_representation.push('\n');
    board_representation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_board::test_utils::board_from_placement;

    #[test]
    fn test_empty_board_layout() {
        let rendered = render_to_string(&ChessBoard::empty(), GlyphSet::Ascii);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], TERMINAL_LINE);
        assert_eq!(lines[1], "8|    |    |    |    |    |    |    |    |");
        assert_eq!(lines[2], SEPARATOR_LINE);
        assert_eq!(lines[15], "1|    |    |    |    |    |    |    |    |");
        assert_eq!(lines[16], TERMINAL_LINE);
        assert_eq!(lines[17], FILE_LINE);
    }

    #[test]
    fn test_rank_labels_descend() {
        let rendered = render_to_string(&ChessBoard::empty(), GlyphSet::Ascii);
        let labels: String = rendered
            .lines()
            .filter_map(|l| l.chars().next())
            .filter(|c| c.is_ascii_digit())
            .collect();
        assert_eq!(labels, "87654321");
    }

    #[test]
    fn test_initial_position_ascii() {
        let rendered = render_to_string(&ChessBoard::new(), GlyphSet::Ascii);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "8| r  | n  | b  | q  | k  | b  | n  | r  |");
        assert_eq!(lines[3], "7| p  | p  | p  | p  | p  | p  | p  | p  |");
        assert_eq!(lines[13], "2| P  | P  | P  | P  | P  | P  | P  | P  |");
        assert_eq!(lines[15], "1| R  | N  | B  | Q  | K  | B  | N  | R  |");
    }

    #[test]
    fn test_unicode_glyphs() {
        let board = board_from_placement("4k3/8/8/8/8/8/8/4K3");
        let rendered = render_to_string(&board, GlyphSet::Unicode);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "8|    |    |    |    | ♚  |    |    |    |");
        assert_eq!(lines[15], "1|    |    |    |    | ♔  |    |    |    |");
    }

    #[test]
    fn test_file_letters_line_up_with_cells() {
        let board = board_from_placement("8/8/8/8/8/8/8/R6R");
        let rendered = render_to_string(&board, GlyphSet::Ascii);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[15].find('R'), FILE_LINE.find('a'));
        assert_eq!(lines[15].rfind('R'), FILE_LINE.find('h'));
    }

    #[test]
    fn test_rendering_is_pure() {
        let board = ChessBoard::new();
        assert_eq!(
            render_to_string(&board, GlyphSet::Unicode),
            render_to_string(&board, GlyphSet::Unicode)
        );
    }
}
