//! Geometry primitives: [`Coord`] and [`GridSize`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downwards and columns grow
//! to the right, so "up" is `row - 1`.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// An integer grid position.
///
/// Components are signed so that neighbor offsets can step outside the grid
/// and be rejected by a bounds check instead of wrapping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by `(drow, dcol)`.
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Whether `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    /// Row-major order.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// GridSize
// ---------------------------------------------------------------------------

/// Dimensions of a rectangular grid, `rows × cols`, anchored at (0, 0).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSize {
    pub rows: i32,
    pub cols: i32,
}

impl GridSize {
    /// The 18×48 layout.
    pub const COMPACT: Self = Self { rows: 18, cols: 48 };
    /// The 21×58 layout.
    pub const WIDE: Self = Self { rows: 21, cols: 58 };

    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Number of cells. Zero for degenerate sizes.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.rows as usize * self.cols as usize
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Whether `c` lies inside `[0, rows) × [0, cols)`.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && c.row < self.rows && c.col < self.cols
    }

    /// Row-major flat index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Inverse of [`index`](Self::index). `idx` must be `< len()`.
    #[inline]
    pub fn coord(self, idx: usize) -> Coord {
        let cols = self.cols as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Row-major iterator over every coordinate.
    #[inline]
    pub fn iter(self) -> CoordIter {
        CoordIter {
            size: self,
            cur: Coord::ZERO,
        }
    }
}

impl IntoIterator for GridSize {
    type Item = Coord;
    type IntoIter = CoordIter;
    #[inline]
    fn into_iter(self) -> CoordIter {
        self.iter()
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// CoordIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the coordinates of a [`GridSize`].
#[derive(Clone, Debug)]
pub struct CoordIter {
    size: GridSize,
    cur: Coord,
}

impl Iterator for CoordIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.size.is_empty() || self.cur.row >= self.size.rows {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.size.cols {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.size.is_empty() || self.cur.row >= self.size.rows {
            return (0, Some(0));
        }
        let in_row = (self.size.cols - self.cur.col) as usize;
        let rows_left = (self.size.rows - self.cur.row - 1) as usize;
        let total = in_row + rows_left * self.size.cols as usize;
        (total, Some(total))
    }
}

impl ExactSizeIterator for CoordIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(2, 3);
        assert_eq!(a + Coord::new(-1, 0), Coord::new(1, 3));
        assert_eq!(a - Coord::new(2, 3), Coord::ZERO);
        assert_eq!(a.shift(1, -1), Coord::new(3, 2));
    }

    #[test]
    fn coord_adjacency() {
        let a = Coord::new(1, 1);
        assert!(a.is_adjacent(Coord::new(0, 1)));
        assert!(a.is_adjacent(Coord::new(1, 2)));
        assert!(!a.is_adjacent(Coord::new(2, 2)));
        assert!(!a.is_adjacent(a));
    }

    #[test]
    fn coord_orders_row_major() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 5), Coord::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(0, 1), Coord::new(0, 5), Coord::new(1, 0)]);
    }

    #[test]
    fn size_contains() {
        let s = GridSize::new(3, 4);
        assert!(s.contains(Coord::new(0, 0)));
        assert!(s.contains(Coord::new(2, 3)));
        assert!(!s.contains(Coord::new(3, 0)));
        assert!(!s.contains(Coord::new(0, 4)));
        assert!(!s.contains(Coord::new(-1, 0)));
    }

    #[test]
    fn index_round_trip_covers_grid() {
        let s = GridSize::new(3, 5);
        for (i, c) in s.iter().enumerate() {
            assert_eq!(s.index(c), Some(i));
            assert_eq!(s.coord(i), c);
        }
        assert_eq!(s.index(Coord::new(0, 5)), None);
    }

    #[test]
    fn iter_count_and_hint() {
        let s = GridSize::new(4, 6);
        let it = s.iter();
        assert_eq!(it.len(), 24);
        assert_eq!(s.iter().count(), 24);
        assert_eq!(GridSize::new(0, 6).iter().count(), 0);
    }

    #[test]
    fn presets() {
        assert_eq!(GridSize::COMPACT.len(), 18 * 48);
        assert_eq!(GridSize::WIDE.len(), 21 * 58);
        assert_eq!(GridSize::COMPACT.to_string(), "18x48");
    }
}
