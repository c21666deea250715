//! FEN piece-placement parsing and serialization for [`Position`], plus
//! algebraic square conversion.

use std::fmt;
use std::str::FromStr;

use crate::error::FenError;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

/// Piece placement of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Position {
    type Err = FenError;

    /// Parse the piece-placement field of a FEN string.
    ///
    /// Anything after the first whitespace (side to move, castling, and so
    /// on) is ignored; castling eligibility comes from the pieces' own
    /// `has_moved` flags, which start out false.
    fn from_str(fen: &str) -> Result<Position, FenError> {
        let placement = fen.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut position = Position::empty();

        for (rank_index, rank_str) in ranks.iter().enumerate() {
            let row = rank_index as i8;
            let mut col: usize = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                } else {
                    if col >= 8 {
                        return Err(FenError::BadRankLength {
                            rank_index,
                            length: col + 1,
                        });
                    }
                    let sq = Square::new(row, col as i8);
                    let piece = Piece::from_fen_char(c, sq)
                        .ok_or(FenError::InvalidPieceChar { character: c })?;
                    position.set(piece);
                    col += 1;
                }
            }

            if col != 8 {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: col,
                });
            }
        }

        Ok(position)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0i8..8 {
            let mut empty_count = 0u8;
            for col in 0i8..8 {
                match self.piece_at(Square::new(row, col)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if row < 7 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

/// Convert an algebraic square ("e4") to board coordinates.
///
/// File `a..h` maps to column `0..7`; rank `1..8` maps to row `7..0`.
pub fn algebraic_to_index(s: &str) -> Option<Square> {
    Square::from_algebraic(s)
}

/// Convert board coordinates to an algebraic square, or `None` off the board.
pub fn index_to_algebraic(sq: Square) -> Option<String> {
    sq.in_bounds().then(|| sq.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn parse_starting_fen() {
        let position: Position = STARTING_FEN.parse().unwrap();
        assert_eq!(position, Position::starting_position());
        let rook = position.piece_at(Square::new(0, 0)).unwrap();
        assert_eq!((rook.kind, rook.color), (PieceKind::Rook, Color::Black));
        for col in 0..8 {
            assert!(position.piece_at(Square::new(2, col)).is_none());
        }
    }

    #[test]
    fn display_roundtrip() {
        let fens = [
            STARTING_FEN,
            "8/8/8/8/8/8/8/8",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
            "4k3/8/8/8/8/8/4R3/4K3",
        ];
        for fen in fens {
            let position: Position = fen.parse().unwrap();
            assert_eq!(position.to_string(), fen);
        }
    }

    #[test]
    fn trailing_fields_are_ignored() {
        let position: Position = "4k3/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(position.pieces().count(), 2);
    }

    #[test]
    fn all_empty_ranks() {
        let position: Position = "8/8/8/8/8/8/8/8".parse().unwrap();
        assert_eq!(position.pieces().count(), 0);
    }

    #[test]
    fn pawn_rows() {
        let position: Position = "pppppppp/8/8/8/8/8/8/pppppppp".parse().unwrap();
        for col in 0..8 {
            assert_eq!(position.piece_at(Square::new(0, col)).unwrap().kind, PieceKind::Pawn);
            assert_eq!(position.piece_at(Square::new(7, col)).unwrap().kind, PieceKind::Pawn);
        }
    }

    #[test]
    fn wrong_rank_count() {
        assert_eq!(
            "r1bqkbnr".parse::<Position>(),
            Err(FenError::WrongRankCount { found: 1 })
        );
        assert_eq!(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/".parse::<Position>(),
            Err(FenError::BadRankLength {
                rank_index: 7,
                length: 0
            })
        );
    }

    #[test]
    fn bad_rank_length() {
        assert_eq!(
            "rnbqkbnrr/8/8/8/8/8/8/8".parse::<Position>(),
            Err(FenError::BadRankLength {
                rank_index: 0,
                length: 9
            })
        );
        assert_eq!(
            "7/8/8/8/8/8/8/8".parse::<Position>(),
            Err(FenError::BadRankLength {
                rank_index: 0,
                length: 7
            })
        );
    }

    #[test]
    fn invalid_piece_char() {
        assert_eq!(
            "x7/8/8/8/8/8/8/8".parse::<Position>(),
            Err(FenError::InvalidPieceChar { character: 'x' })
        );
        assert_eq!(
            "9/8/8/8/8/8/8/8".parse::<Position>(),
            Err(FenError::InvalidPieceChar { character: '9' })
        );
    }

    #[test]
    fn algebraic_conversion() {
        assert_eq!(algebraic_to_index("a8"), Some(Square::new(0, 0)));
        assert_eq!(algebraic_to_index("h1"), Some(Square::new(7, 7)));
        assert_eq!(algebraic_to_index("e2"), Some(Square::new(6, 4)));
        assert_eq!(index_to_algebraic(Square::new(4, 4)).as_deref(), Some("e4"));
        assert_eq!(index_to_algebraic(Square::new(-1, 4)), None);
    }

    #[test]
    fn algebraic_roundtrip_all_squares() {
        for sq in Square::all() {
            let text = index_to_algebraic(sq).unwrap();
            assert_eq!(algebraic_to_index(&text), Some(sq));
        }
    }
}
