use pathviz_core::{Coord, Grid};

/// One of the four unit moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// `(drow, dcol)` offset of this move.
    #[inline]
    pub const fn offset(self) -> Coord {
        match self {
            Direction::Up => Coord::new(-1, 0),
            Direction::Right => Coord::new(0, 1),
            Direction::Down => Coord::new(1, 0),
            Direction::Left => Coord::new(0, -1),
        }
    }
}

/// Expansion order used by BFS, DFS, A* and the forward half of the
/// bidirectional search.
pub const FORWARD_ORDER: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

/// Expansion order of the backward half of the bidirectional search.
pub const BACKWARD_ORDER: [Direction; 4] = [
    Direction::Down,
    Direction::Left,
    Direction::Up,
    Direction::Right,
];

/// Cached neighbor computation helper.
///
/// Reuses one buffer so that expanding a node does not allocate.
#[derive(Debug)]
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Walkable neighbors of `c` in `order`. Out-of-bounds positions are
    /// filtered before the grid is consulted.
    pub fn walkable(&mut self, grid: &Grid, c: Coord, order: &[Direction]) -> &[Coord] {
        self.buf.clear();
        for d in order {
            let n = c + d.offset();
            if grid.in_bounds(n) && grid.is_walkable(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
