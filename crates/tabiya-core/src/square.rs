//! Board squares as (row, column) pairs.
//!
//! Row 0 is rank 8 and row 7 is rank 1; column 0 is file a and column 7 is
//! file h. Coordinates are signed so that offset arithmetic can step off the
//! board and be rejected by [`Square::in_bounds`] instead of wrapping.

use std::fmt;

/// A square on (or, transiently, just off) the 8x8 board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: i8,
    col: i8,
}

impl Square {
    /// Total number of on-board squares.
    pub const COUNT: usize = 64;

    /// Create a square from a row and a column. No bounds check is applied.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Square {
        Square { row, col }
    }

    /// Create a square from a row-major index (0 = a8, 63 = h1), returning
    /// `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 {
            Some(Square::new((index / 8) as i8, (index % 8) as i8))
        } else {
            None
        }
    }

    /// Parse an algebraic notation string (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0];
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        let col = (file_byte - b'a') as i8;
        let row = 7 - (rank_byte - b'1') as i8;
        Some(Square::new(row, col))
    }

    /// Return the row (0 = rank 8).
    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    /// Return the column (0 = file a).
    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Return `true` iff both coordinates lie in `0..8`.
    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.row < 8 && self.col >= 0 && self.col < 8
    }

    /// Return the row-major index (a8 = 0, h1 = 63), or `None` off the board.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        if self.in_bounds() {
            Some(self.row as usize * 8 + self.col as usize)
        } else {
            None
        }
    }

    /// Return the square shifted by the given row and column deltas.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Square {
        Square::new(self.row + d_row, self.col + d_col)
    }

    /// Iterate over all 64 on-board squares in row-major order (a8, b8, ..., h1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).filter_map(Square::from_index)
    }

    /// Return the file letter, or `None` off the board.
    pub fn file_char(self) -> Option<char> {
        if self.in_bounds() {
            Some((b'a' + self.col as u8) as char)
        } else {
            None
        }
    }

    /// Return the rank digit, or `None` off the board.
    pub fn rank_char(self) -> Option<char> {
        if self.in_bounds() {
            Some((b'8' - self.row as u8) as char)
        } else {
            None
        }
    }

    // Named square constants
    pub const A1: Square = Square::new(7, 0);
    pub const B1: Square = Square::new(7, 1);
    pub const C1: Square = Square::new(7, 2);
    pub const D1: Square = Square::new(7, 3);
    pub const E1: Square = Square::new(7, 4);
    pub const F1: Square = Square::new(7, 5);
    pub const G1: Square = Square::new(7, 6);
    pub const H1: Square = Square::new(7, 7);
    pub const A2: Square = Square::new(6, 0);
    pub const B2: Square = Square::new(6, 1);
    pub const C2: Square = Square::new(6, 2);
    pub const D2: Square = Square::new(6, 3);
    pub const E2: Square = Square::new(6, 4);
    pub const F2: Square = Square::new(6, 5);
    pub const G2: Square = Square::new(6, 6);
    pub const H2: Square = Square::new(6, 7);
    pub const A3: Square = Square::new(5, 0);
    pub const B3: Square = Square::new(5, 1);
    pub const C3: Square = Square::new(5, 2);
    pub const D3: Square = Square::new(5, 3);
    pub const E3: Square = Square::new(5, 4);
    pub const F3: Square = Square::new(5, 5);
    pub const G3: Square = Square::new(5, 6);
    pub const H3: Square = Square::new(5, 7);
    pub const A4: Square = Square::new(4, 0);
    pub const B4: Square = Square::new(4, 1);
    pub const C4: Square = Square::new(4, 2);
    pub const D4: Square = Square::new(4, 3);
    pub const E4: Square = Square::new(4, 4);
    pub const F4: Square = Square::new(4, 5);
    pub const G4: Square = Square::new(4, 6);
    pub const H4: Square = Square::new(4, 7);
    pub const A5: Square = Square::new(3, 0);
    pub const B5: Square = Square::new(3, 1);
    pub const C5: Square = Square::new(3, 2);
    pub const D5: Square = Square::new(3, 3);
    pub const E5: Square = Square::new(3, 4);
    pub const F5: Square = Square::new(3, 5);
    pub const G5: Square = Square::new(3, 6);
    pub const H5: Square = Square::new(3, 7);
    pub const A6: Square = Square::new(2, 0);
    pub const B6: Square = Square::new(2, 1);
    pub const C6: Square = Square::new(2, 2);
    pub const D6: Square = Square::new(2, 3);
    pub const E6: Square = Square::new(2, 4);
    pub const F6: Square = Square::new(2, 5);
    pub const G6: Square = Square::new(2, 6);
    pub const H6: Square = Square::new(2, 7);
    pub const A7: Square = Square::new(1, 0);
    pub const B7: Square = Square::new(1, 1);
    pub const C7: Square = Square::new(1, 2);
    pub const D7: Square = Square::new(1, 3);
    pub const E7: Square = Square::new(1, 4);
    pub const F7: Square = Square::new(1, 5);
    pub const G7: Square = Square::new(1, 6);
    pub const H7: Square = Square::new(1, 7);
    pub const A8: Square = Square::new(0, 0);
    pub const B8: Square = Square::new(0, 1);
    pub const C8: Square = Square::new(0, 2);
    pub const D8: Square = Square::new(0, 3);
    pub const E8: Square = Square::new(0, 4);
    pub const F8: Square = Square::new(0, 5);
    pub const G8: Square = Square::new(0, 6);
    pub const H8: Square = Square::new(0, 7);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.file_char(), self.rank_char()) {
            (Some(file), Some(rank)) => write!(f, "{file}{rank}"),
            _ => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn in_bounds_matches_coordinate_range() {
        for row in -3i8..11 {
            for col in -3i8..11 {
                let expected = (0..8).contains(&row) && (0..8).contains(&col);
                assert_eq!(Square::new(row, col).in_bounds(), expected, "({row}, {col})");
            }
        }
    }

    #[test]
    fn orientation() {
        assert_eq!(Square::A8, Square::new(0, 0));
        assert_eq!(Square::H1, Square::new(7, 7));
        assert_eq!(Square::E1.row(), 7);
        assert_eq!(Square::E1.col(), 4);
    }

    #[test]
    fn index_roundtrip() {
        for sq in Square::all() {
            let idx = sq.index().unwrap();
            assert_eq!(Square::from_index(idx as u8), Some(sq));
        }
        assert_eq!(Square::new(8, 0).index(), None);
        assert!(Square::from_index(64).is_none());
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Square::from_algebraic("a1"), Some(Square::A1));
        assert_eq!(Square::from_algebraic("e4"), Some(Square::E4));
        assert_eq!(Square::from_algebraic("h8"), Some(Square::H8));
        assert_eq!(format!("{}", Square::E4), "e4");
        assert_eq!(format!("{}", Square::A8), "a8");
    }

    #[test]
    fn algebraic_invalid() {
        assert!(Square::from_algebraic("i1").is_none());
        assert!(Square::from_algebraic("a9").is_none());
        assert!(Square::from_algebraic("").is_none());
        assert!(Square::from_algebraic("a").is_none());
        assert!(Square::from_algebraic("a1b").is_none());
        assert!(Square::from_algebraic("E4").is_none());
    }

    #[test]
    fn offset_can_leave_the_board() {
        let sq = Square::A1.offset(1, -1);
        assert!(!sq.in_bounds());
        assert_eq!(format!("{sq}"), "(8, -1)");
    }

    #[test]
    fn all_iterator_count() {
        assert_eq!(Square::all().count(), Square::COUNT);
        assert!(Square::all().all(Square::in_bounds));
    }

    #[test]
    fn debug_shows_algebraic() {
        assert_eq!(format!("{:?}", Square::E4), "Square(e4)");
    }
}
