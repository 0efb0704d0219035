use std::collections::VecDeque;

use pathviz_core::{Coord, Grid, GridSize};

use crate::neighbors::{FORWARD_ORDER, Neighbors};
use crate::path::path_from_root;
use crate::traversal::{Algorithm, Progress, Traversal};
use crate::visit::VisitRecord;

/// Breadth-first search.
///
/// Cells are marked visited when enqueued, so no cell is queued twice. The
/// target is recognised when it is dequeued, which makes the found path a
/// shortest one.
#[derive(Debug)]
pub struct Bfs {
    end: Coord,
    queue: VecDeque<Coord>,
    record: VisitRecord,
    nbuf: Neighbors,
}

impl Bfs {
    pub fn new(size: GridSize, start: Coord, end: Coord) -> Self {
        let mut record = VisitRecord::new(size);
        record.mark_root(start);
        Self {
            end,
            queue: VecDeque::from([start]),
            record,
            nbuf: Neighbors::new(),
        }
    }
}

impl Traversal for Bfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    /// Dequeue one cell and enqueue its unvisited walkable neighbors.
    fn step(&mut self, grid: &Grid, visited: &mut Vec<Coord>) -> Progress {
        let Some(current) = self.queue.pop_front() else {
            return Progress::Exhausted;
        };
        if current == self.end {
            return Progress::Found(path_from_root(&self.record, current));
        }

        for &n in self.nbuf.walkable(grid, current, &FORWARD_ORDER) {
            if self.record.visit(n, current) {
                self.queue.push_back(n);
                visited.push(n);
            }
        }
        Progress::Searching
    }

    fn visited_count(&self) -> usize {
        self.record.visited_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(grid: &Grid, start: Coord, end: Coord) -> (Vec<Coord>, Progress) {
        let mut bfs = Bfs::new(grid.size(), start, end);
        let mut visited = Vec::new();
        loop {
            match bfs.step(grid, &mut visited) {
                Progress::Searching => continue,
                done => return (visited, done),
            }
        }
    }

    #[test]
    fn first_step_discovers_in_fixed_order() {
        let g = Grid::new(3, 3).unwrap();
        let mut bfs = Bfs::new(g.size(), Coord::new(1, 1), Coord::new(2, 2));
        let mut visited = Vec::new();
        assert_eq!(bfs.step(&g, &mut visited), Progress::Searching);
        assert_eq!(
            visited,
            vec![
                Coord::new(0, 1),
                Coord::new(1, 2),
                Coord::new(2, 1),
                Coord::new(1, 0)
            ]
        );
    }

    #[test]
    fn open_three_by_three() {
        let g = Grid::new(3, 3).unwrap();
        let (_, done) = drive(&g, Coord::new(0, 0), Coord::new(2, 2));
        let Progress::Found(path) = done else {
            panic!("expected a path, got {done:?}");
        };
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&Coord::new(0, 0)));
        assert_eq!(path.last(), Some(&Coord::new(2, 2)));
        // Up/Right/Down/Left order reaches (0,1) before (1,0).
        assert_eq!(
            path,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 2),
                Coord::new(2, 2)
            ]
        );
    }

    #[test]
    fn boxed_in_start_is_exhausted() {
        let g: Grid = "S#.\n#..\n..E".parse().unwrap();
        let (visited, done) = drive(&g, Coord::new(0, 0), Coord::new(2, 2));
        assert_eq!(done, Progress::Exhausted);
        assert!(visited.is_empty());
    }

    #[test]
    fn detours_around_walls() {
        let g: Grid = "S#E\n.#.\n...".parse().unwrap();
        let (_, done) = drive(&g, Coord::new(0, 0), Coord::new(0, 2));
        let Progress::Found(path) = done else {
            panic!("expected a path, got {done:?}");
        };
        assert_eq!(path.len(), 7);
    }

    #[test]
    fn end_is_visited_before_found() {
        let g = Grid::new(1, 3).unwrap();
        let (visited, done) = drive(&g, Coord::new(0, 0), Coord::new(0, 2));
        assert_eq!(visited, vec![Coord::new(0, 1), Coord::new(0, 2)]);
        assert!(matches!(done, Progress::Found(_)));
    }
}
