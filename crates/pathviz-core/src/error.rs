//! Errors raised by grid construction and editing.

use thiserror::Error;

use crate::geom::Coord;

/// Errors arising from grid construction or access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Both dimensions must be positive.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: i32, cols: i32 },

    /// A coordinate lies outside the grid.
    #[error("coordinate {coord} out of bounds for {rows}x{cols} grid")]
    OutOfBounds { coord: Coord, rows: i32, cols: i32 },

    /// A character in an ASCII layout has no cell meaning.
    #[error("unexpected character {ch:?} at line {line}, column {column}")]
    UnknownGlyph { ch: char, line: usize, column: usize },

    /// Lines of an ASCII layout differ in length.
    #[error("line {line} has {found} cells, expected {expected}")]
    RaggedLayout {
        line: usize,
        found: usize,
        expected: usize,
    },
}
