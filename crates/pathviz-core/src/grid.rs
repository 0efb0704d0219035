//! The [`Grid`] type, a fixed-size rectangle of [`Cell`]s.
//!
//! The grid is a plain data model: bounds checks and cell reads/writes. It
//! does not police the one-start/one-end rule; the editing session that owns
//! the grid does.

use std::fmt;
use std::str::FromStr;

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::{Coord, CoordIter, GridSize};

/// A `rows × cols` grid of cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    size: GridSize,
}

impl Grid {
    /// Create a grid of the given dimensions filled with [`Cell::Empty`].
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        let size = GridSize::new(rows, cols);
        if size.is_empty() {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            cells: vec![Cell::Empty; size.len()],
            size,
        })
    }

    /// Create an empty grid with the dimensions of `size`.
    pub fn with_size(size: GridSize) -> Result<Self, GridError> {
        Self::new(size.rows, size.cols)
    }

    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.size.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.size.cols
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        self.size.contains(c)
    }

    /// The cell at `c`, or `None` if `c` is out of bounds.
    #[inline]
    pub fn cell_at(&self, c: Coord) -> Option<Cell> {
        self.size.index(c).map(|i| self.cells[i])
    }

    /// True iff `c` is in bounds and not a wall.
    #[inline]
    pub fn is_walkable(&self, c: Coord) -> bool {
        self.cell_at(c).is_some_and(Cell::is_walkable)
    }

    /// Overwrite the cell at `c`, returning the previous kind.
    pub fn set(&mut self, c: Coord, cell: Cell) -> Result<Cell, GridError> {
        let i = self.checked_index(c)?;
        Ok(std::mem::replace(&mut self.cells[i], cell))
    }

    /// Fill every position with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Count positions holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// First position (row-major) holding `cell`.
    pub fn find(&self, cell: Cell) -> Option<Coord> {
        self.cells
            .iter()
            .position(|&c| c == cell)
            .map(|i| self.size.coord(i))
    }

    /// Row-major iterator over `(Coord, Cell)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.size.iter(),
        }
    }

    fn checked_index(&self, c: Coord) -> Result<usize, GridError> {
        self.size.index(c).ok_or(GridError::OutOfBounds {
            coord: c,
            rows: self.size.rows,
            cols: self.size.cols,
        })
    }
}

// ---------------------------------------------------------------------------
// ASCII layout
// ---------------------------------------------------------------------------

impl Cell {
    /// Glyph used by the ASCII layout format.
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Start => 'S',
            Cell::End => 'E',
            Cell::Wall => '#',
        }
    }

    fn from_glyph(ch: char) -> Option<Cell> {
        match ch {
            '.' => Some(Cell::Empty),
            'S' => Some(Cell::Start),
            'E' => Some(Cell::End),
            '#' => Some(Cell::Wall),
            _ => None,
        }
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse a layout of `.`, `S`, `E` and `#`, one line per row. Blank
    /// lines and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        let mut grid = Grid::new(lines.len() as i32, cols as i32)?;
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridError::RaggedLayout {
                    line: row + 1,
                    found,
                    expected: cols,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::from_glyph(ch).ok_or(GridError::UnknownGlyph {
                    ch,
                    line: row + 1,
                    column: col + 1,
                })?;
                grid.set(Coord::new(row as i32, col as i32), cell)?;
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.cols as usize) {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Coord, Cell)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: CoordIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Coord, Cell);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let c = self.inner.next()?;
        let i = self.grid.size.index(c)?;
        Some((c, self.grid.cells[i]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = (Coord, Cell);
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}
