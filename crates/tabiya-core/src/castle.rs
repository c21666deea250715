//! Castling geometry: which squares the king and rook use on each wing.

use std::fmt;

use crate::color::Color;
use crate::square::Square;

/// Column the king starts on for both sides.
pub const KING_HOME_COL: i8 = 4;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both wings, king side first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Column the rook starts on (h or a file).
    #[inline]
    pub const fn rook_home_col(self) -> i8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column the king lands on (g or c file).
    #[inline]
    pub const fn king_dest_col(self) -> i8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// Column the rook lands on (f or d file).
    #[inline]
    pub const fn rook_dest_col(self) -> i8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// King's home square for `color`.
    #[inline]
    pub const fn king_home(color: Color) -> Square {
        Square::new(color.home_row(), KING_HOME_COL)
    }

    /// Rook's home square on this wing for `color`.
    #[inline]
    pub const fn rook_home(self, color: Color) -> Square {
        Square::new(color.home_row(), self.rook_home_col())
    }

    /// King's destination square on this wing for `color`.
    #[inline]
    pub const fn king_dest(self, color: Color) -> Square {
        Square::new(color.home_row(), self.king_dest_col())
    }

    /// Rook's destination square on this wing for `color`.
    #[inline]
    pub const fn rook_dest(self, color: Color) -> Square {
        Square::new(color.home_row(), self.rook_dest_col())
    }

    /// The two squares the king crosses after leaving home (f/g or d/c file).
    pub const fn crossed_squares(self, color: Color) -> [Square; 2] {
        let row = color.home_row();
        match self {
            CastleSide::KingSide => [Square::new(row, 5), Square::new(row, 6)],
            CastleSide::QueenSide => [Square::new(row, 3), Square::new(row, 2)],
        }
    }

    /// Classify a king displacement: a two-column step on one row is castling.
    pub fn from_king_step(from: Square, to: Square) -> Option<CastleSide> {
        if from.row() != to.row() {
            return None;
        }
        match to.col() - from.col() {
            2 => Some(CastleSide::KingSide),
            -2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    /// Move-text spelling of the castle.
    pub const fn notation(self) -> &'static str {
        match self {
            CastleSide::KingSide => "O-O",
            CastleSide::QueenSide => "O-O-O",
        }
    }
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

#[cfg(test)]
mod tests {
    use super::CastleSide;
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn white_squares() {
        assert_eq!(CastleSide::king_home(Color::White), Square::E1);
        assert_eq!(CastleSide::KingSide.rook_home(Color::White), Square::H1);
        assert_eq!(CastleSide::KingSide.king_dest(Color::White), Square::G1);
        assert_eq!(CastleSide::KingSide.rook_dest(Color::White), Square::F1);
        assert_eq!(CastleSide::QueenSide.rook_home(Color::White), Square::A1);
        assert_eq!(CastleSide::QueenSide.king_dest(Color::White), Square::C1);
        assert_eq!(CastleSide::QueenSide.rook_dest(Color::White), Square::D1);
    }

    #[test]
    fn black_squares() {
        assert_eq!(CastleSide::king_home(Color::Black), Square::E8);
        assert_eq!(
            CastleSide::KingSide.crossed_squares(Color::Black),
            [Square::F8, Square::G8]
        );
        assert_eq!(
            CastleSide::QueenSide.crossed_squares(Color::Black),
            [Square::D8, Square::C8]
        );
    }

    #[test]
    fn classify_king_steps() {
        assert_eq!(
            CastleSide::from_king_step(Square::E1, Square::G1),
            Some(CastleSide::KingSide)
        );
        assert_eq!(
            CastleSide::from_king_step(Square::E8, Square::C8),
            Some(CastleSide::QueenSide)
        );
        assert_eq!(CastleSide::from_king_step(Square::E1, Square::F1), None);
        assert_eq!(CastleSide::from_king_step(Square::E1, Square::G2), None);
    }

    #[test]
    fn display() {
        assert_eq!(CastleSide::KingSide.to_string(), "O-O");
        assert_eq!(CastleSide::QueenSide.to_string(), "O-O-O");
    }
}
