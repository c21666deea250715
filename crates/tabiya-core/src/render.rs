//! Fixed-width text diagram of a position, for display only.

use std::fmt;

use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

const FILE_LABELS: &str = "  a   b   c   d   e   f   g   h";

/// Character set used for pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Glyphs {
    /// Chess symbols: filled for White, outlined for Black.
    #[default]
    Unicode,
    /// FEN letters: uppercase for White, lowercase for Black.
    Ascii,
}

impl Glyphs {
    /// Return the character drawn for `piece`.
    pub fn glyph(self, piece: &Piece) -> char {
        match self {
            Glyphs::Ascii => piece.fen_char(),
            Glyphs::Unicode => piece.kind.symbol(piece.color),
        }
    }
}

/// Wrapper for drawing a position as a grid with rank and file labels.
pub struct PrettyPosition<'a> {
    position: &'a Position,
    glyphs: Glyphs,
}

impl Position {
    /// Return a displayable diagram of this position.
    pub fn pretty(&self, glyphs: Glyphs) -> PrettyPosition<'_> {
        PrettyPosition {
            position: self,
            glyphs,
        }
    }
}

impl fmt::Display for PrettyPosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{FILE_LABELS}")?;
        for row in 0i8..8 {
            writeln!(f, "{}| {}", "|---".repeat(8), 8 - row)?;
            for col in 0i8..8 {
                let c = self
                    .position
                    .piece_at(Square::new(row, col))
                    .map_or(' ', |p| self.glyphs.glyph(p));
                write!(f, "| {c} ")?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{}|", "|---".repeat(8))?;
        writeln!(f, "{FILE_LABELS}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn empty_board_layout() {
        let mut expected = String::from("  a   b   c   d   e   f   g   h\n");
        for row in 0..8 {
            expected += &format!("{}| {}\n", "|---".repeat(8), 8 - row);
            expected += &format!("{}|\n", "|   ".repeat(8));
        }
        expected += &format!("{}|\n", "|---".repeat(8));
        expected += "  a   b   c   d   e   f   g   h\n";

        let rendered = Position::empty().pretty(Glyphs::Unicode).to_string();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn pieces_land_on_their_rank_lines() {
        let position = Position::empty()
            .with_piece(Piece::new(PieceKind::Rook, Color::White, Square::A8))
            .with_piece(Piece::new(PieceKind::King, Color::Black, Square::H1));
        let rendered = position.pretty(Glyphs::Unicode).to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[2].contains('♜'), "rank 8 line: {}", lines[2]);
        assert!(lines[16].contains('♔'), "rank 1 line: {}", lines[16]);
        assert!(lines[1].ends_with("| 8"));
        assert!(lines[15].ends_with("| 1"));
    }

    #[test]
    fn ascii_glyphs() {
        let rendered = Position::starting_position().pretty(Glyphs::Ascii).to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[2], "| r | n | b | q | k | b | n | r |");
        assert_eq!(lines[16], "| R | N | B | Q | K | B | N | R |");
    }
}
