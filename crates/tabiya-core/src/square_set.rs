//! Unordered sets of squares packed into a 64-bit mask.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::square::Square;

/// A set of on-board squares. Bit `row * 8 + col` marks membership.
///
/// Destination sets produced by the move rules use this type, so two sets
/// compare equal exactly when they hold the same squares regardless of the
/// order in which they were built.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(u64);

impl SquareSet {
    /// The empty set.
    pub const EMPTY: SquareSet = SquareSet(0);

    /// Return `true` if no square is in the set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of squares in the set.
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Return `true` if `sq` is in the set. Off-board squares never are.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        match sq.index() {
            Some(i) => self.0 & (1u64 << i) != 0,
            None => false,
        }
    }

    /// Add `sq` to the set. Off-board squares are ignored.
    #[inline]
    pub fn insert(&mut self, sq: Square) {
        if let Some(i) = sq.index() {
            self.0 |= 1u64 << i;
        }
    }

    /// Remove `sq` from the set.
    #[inline]
    pub fn remove(&mut self, sq: Square) {
        if let Some(i) = sq.index() {
            self.0 &= !(1u64 << i);
        }
    }

    /// Return `true` if every square of `self` is also in `other`.
    #[inline]
    pub const fn is_subset(self, other: SquareSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterate over the squares in row-major order.
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> SquareSet {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> SquareSetIter {
        self.iter()
    }
}

/// Iterator over the members of a [`SquareSet`], popping the lowest bit each step.
pub struct SquareSetIter(u64);

impl Iterator for SquareSetIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Square::from_index(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl BitAnd for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn bitand(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 & rhs.0)
    }
}

impl BitOr for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn bitor(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: SquareSet) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|sq| sq.to_string())).finish()
    }
}
