use pathviz_core::{Coord, Grid, GridSize};

use crate::distance::manhattan;
use crate::neighbors::{FORWARD_ORDER, Neighbors};
use crate::path::path_from_root;
use crate::queue::PriorityQueue;
use crate::traversal::{Algorithm, Progress, Traversal};
use crate::visit::VisitRecord;

/// Sentinel distance for cells not reached yet.
pub const UNREACHED: i32 = i32::MAX;

/// An open-list entry. Ordered by `distance + heuristic`, then by push order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OpenEntry {
    pub coord: Coord,
    pub distance: i32,
    pub heuristic: i32,
}

impl OpenEntry {
    #[inline]
    pub fn f(&self) -> i32 {
        self.distance + self.heuristic
    }
}

type OpenList = PriorityQueue<OpenEntry, i32, fn(&OpenEntry) -> i32>;

/// A* search with the Manhattan heuristic.
///
/// The open list has no decrease-key: a relaxed cell is pushed again and the
/// superseded entry stays behind. Entries for finalized cells are skipped
/// when popped.
pub struct AStar {
    size: GridSize,
    end: Coord,
    open: OpenList,
    record: VisitRecord,
    distance: Vec<i32>,
    heuristic: Vec<i32>,
    finalized: Vec<bool>,
    nbuf: Neighbors,
}

impl AStar {
    pub fn new(size: GridSize, start: Coord, end: Coord) -> Self {
        let len = size.len();
        let mut astar = Self {
            size,
            end,
            open: PriorityQueue::new(OpenEntry::f as fn(&OpenEntry) -> i32),
            record: VisitRecord::new(size),
            distance: vec![UNREACHED; len],
            heuristic: vec![0; len],
            finalized: vec![false; len],
            nbuf: Neighbors::new(),
        };
        astar.record.mark_root(start);
        if let Some(si) = size.index(start) {
            let h = manhattan(start, end);
            astar.distance[si] = 0;
            astar.heuristic[si] = h;
            astar.open.push(OpenEntry {
                coord: start,
                distance: 0,
                heuristic: h,
            });
        }
        astar
    }

    /// Best known distance from the start, [`UNREACHED`] if none.
    pub fn distance(&self, c: Coord) -> i32 {
        self.size.index(c).map_or(UNREACHED, |i| self.distance[i])
    }

    /// Heuristic estimate recorded for `c` when it was last relaxed.
    pub fn heuristic(&self, c: Coord) -> Option<i32> {
        let i = self.size.index(c)?;
        (self.distance[i] != UNREACHED).then_some(self.heuristic[i])
    }

    /// Whether `c` has been popped and expanded.
    pub fn is_finalized(&self, c: Coord) -> bool {
        self.size.index(c).is_some_and(|i| self.finalized[i])
    }

    /// Entries currently on the open list, stale ones included.
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Pop until an entry for a cell that is not finalized comes out.
    fn pop_live(&mut self) -> Option<(Coord, usize)> {
        while let Some(entry) = self.open.pop_min() {
            let Some(ci) = self.size.index(entry.coord) else {
                continue;
            };
            if self.finalized[ci] || entry.distance > self.distance[ci] {
                continue;
            }
            return Some((entry.coord, ci));
        }
        None
    }
}

impl Traversal for AStar {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    /// One relaxation pass: finalize the best open cell and relax its
    /// neighbors. Stale entries popped on the way are discarded.
    fn step(&mut self, grid: &Grid, visited: &mut Vec<Coord>) -> Progress {
        let Some((current, ci)) = self.pop_live() else {
            return Progress::Exhausted;
        };
        self.finalized[ci] = true;
        if current == self.end {
            return Progress::Found(path_from_root(&self.record, current));
        }

        let next_distance = self.distance[ci] + 1;
        for &n in self.nbuf.walkable(grid, current, &FORWARD_ORDER) {
            let Some(ni) = self.size.index(n) else {
                continue;
            };
            if self.finalized[ni] || next_distance >= self.distance[ni] {
                continue;
            }
            let h = manhattan(n, self.end);
            self.distance[ni] = next_distance;
            self.heuristic[ni] = h;
            if self.record.relink(n, current) {
                visited.push(n);
            }
            self.open.push(OpenEntry {
                coord: n,
                distance: next_distance,
                heuristic: h,
            });
        }
        Progress::Searching
    }

    fn visited_count(&self) -> usize {
        self.record.visited_count()
    }
}

impl std::fmt::Debug for AStar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AStar")
            .field("size", &self.size)
            .field("end", &self.end)
            .field("open", &self.open)
            .field("visited", &self.record.visited_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(astar: &mut AStar, grid: &Grid) -> (Vec<Coord>, Progress) {
        let mut visited = Vec::new();
        loop {
            match astar.step(grid, &mut visited) {
                Progress::Searching => continue,
                done => return (visited, done),
            }
        }
    }

    #[test]
    fn open_grid_heads_straight_for_the_end() {
        let g = Grid::new(3, 3).unwrap();
        let mut astar = AStar::new(g.size(), Coord::new(0, 0), Coord::new(2, 2));
        let (_, done) = drive(&mut astar, &g);
        let Progress::Found(path) = done else {
            panic!("expected a path, got {done:?}");
        };
        assert_eq!(path.len(), 5);
        assert_eq!(astar.distance(Coord::new(2, 2)), 4);
        assert_eq!(astar.heuristic(Coord::new(2, 2)), Some(0));
        assert_eq!(astar.heuristic(Coord::new(0, 1)), Some(3));
    }

    #[test]
    fn first_step_relaxes_neighbors() {
        let g = Grid::new(3, 3).unwrap();
        let start = Coord::new(1, 1);
        let mut astar = AStar::new(g.size(), start, Coord::new(2, 2));
        let mut visited = Vec::new();
        assert_eq!(astar.step(&g, &mut visited), Progress::Searching);
        assert_eq!(visited.len(), 4);
        assert!(astar.is_finalized(start));
        for c in &visited {
            assert_eq!(astar.distance(*c), 1);
        }
        assert_eq!(astar.distance(Coord::new(0, 0)), UNREACHED);
        assert_eq!(astar.heuristic(Coord::new(0, 0)), None);
    }

    #[test]
    fn walls_force_a_detour() {
        let g: Grid = "S.#.\n..#.\n....\n.#E.".parse().unwrap();
        let mut astar = AStar::new(g.size(), Coord::new(0, 0), Coord::new(3, 2));
        let (_, done) = drive(&mut astar, &g);
        let Progress::Found(path) = done else {
            panic!("expected a path, got {done:?}");
        };
        assert_eq!(path.len(), 6);
        for w in path.windows(2) {
            assert!(w[0].is_adjacent(w[1]));
            assert!(g.is_walkable(w[1]));
        }
    }

    #[test]
    fn stale_entries_are_skipped() {
        let g = Grid::new(2, 2).unwrap();
        let start = Coord::new(0, 0);
        let mut astar = AStar::new(g.size(), start, Coord::new(1, 1));
        // A leftover entry for the start, which is finalized by the first step.
        astar.open.push(OpenEntry {
            coord: start,
            distance: 5,
            heuristic: 0,
        });
        let mut visited = Vec::new();
        assert_eq!(astar.step(&g, &mut visited), Progress::Searching);
        assert_eq!(astar.distance(start), 0);
        assert_eq!(astar.open_len(), 3);

        let (_, done) = drive(&mut astar, &g);
        assert!(matches!(done, Progress::Found(ref p) if p.len() == 3));
        assert_eq!(astar.distance(start), 0);
        assert_eq!(astar.record.parent(start), None);
    }

    #[test]
    fn enclosed_end_is_exhausted() {
        let g: Grid = "S.#.\n.#E#\n..#.".parse().unwrap();
        let mut astar = AStar::new(g.size(), Coord::new(0, 0), Coord::new(1, 2));
        let (visited, done) = drive(&mut astar, &g);
        assert_eq!(done, Progress::Exhausted);
        assert_eq!(visited.len(), 4);
    }
}
