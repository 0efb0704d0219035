use pathviz_core::{Coord, Grid, GridSize};

use crate::neighbors::{FORWARD_ORDER, Neighbors};
use crate::path::path_from_root;
use crate::traversal::{Algorithm, Progress, Traversal};
use crate::visit::VisitRecord;

/// Stack-based depth-first search.
///
/// Neighbors are marked visited and pushed when discovered. The target is
/// only recognised when popped, so it can be reported as visited several
/// steps before the search ends. No optimality is claimed.
#[derive(Debug)]
pub struct Dfs {
    end: Coord,
    stack: Vec<Coord>,
    record: VisitRecord,
    nbuf: Neighbors,
}

impl Dfs {
    pub fn new(size: GridSize, start: Coord, end: Coord) -> Self {
        let mut record = VisitRecord::new(size);
        record.mark_root(start);
        Self {
            end,
            stack: vec![start],
            record,
            nbuf: Neighbors::new(),
        }
    }
}

impl Traversal for Dfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }

    /// Pop one cell and push its unvisited walkable neighbors.
    fn step(&mut self, grid: &Grid, visited: &mut Vec<Coord>) -> Progress {
        let Some(current) = self.stack.pop() else {
            return Progress::Exhausted;
        };
        if current == self.end {
            return Progress::Found(path_from_root(&self.record, current));
        }

        for &n in self.nbuf.walkable(grid, current, &FORWARD_ORDER) {
            if self.record.visit(n, current) {
                self.stack.push(n);
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

    #[test]
    fn last_discovered_is_expanded_next() {
        let g = Grid::new(3, 3).unwrap();
        let mut dfs = Dfs::new(g.size(), Coord::new(1, 1), Coord::new(0, 0));
        let mut visited = Vec::new();
        dfs.step(&g, &mut visited);
        visited.clear();
        // (1,0) was pushed last, so it is expanded second.
        dfs.step(&g, &mut visited);
        assert_eq!(visited, vec![Coord::new(0, 0), Coord::new(2, 0)]);
    }

    #[test]
    fn end_discovered_before_it_is_popped() {
        let g = Grid::new(2, 2).unwrap();
        let start = Coord::new(0, 0);
        let end = Coord::new(0, 1);
        let mut dfs = Dfs::new(g.size(), start, end);
        let mut visited = Vec::new();

        // Expanding the start discovers the end and (1,0); (1,0) is on top.
        assert_eq!(dfs.step(&g, &mut visited), Progress::Searching);
        assert_eq!(visited, vec![end, Coord::new(1, 0)]);

        assert_eq!(dfs.step(&g, &mut visited), Progress::Searching);
        assert_eq!(dfs.step(&g, &mut visited), Progress::Searching);
        assert_eq!(dfs.step(&g, &mut visited), Progress::Found(vec![start, end]));
    }

    #[test]
    fn path_may_be_longer_than_shortest() {
        let g = Grid::new(3, 3).unwrap();
        let start = Coord::new(1, 1);
        let end = Coord::new(0, 1);
        let mut dfs = Dfs::new(g.size(), start, end);
        let mut visited = Vec::new();
        let path = loop {
            match dfs.step(&g, &mut visited) {
                Progress::Searching => continue,
                Progress::Found(p) => break p,
                Progress::Exhausted => panic!("open grid must connect"),
            }
        };
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
        assert!(path.windows(2).all(|w| w[0].is_adjacent(w[1])));
        assert!(path.len() >= 2);
    }

    #[test]
    fn enclosed_end_is_exhausted() {
        let g: Grid = "S...\n..#.\n.#E#\n..#.".parse().unwrap();
        let mut dfs = Dfs::new(g.size(), Coord::new(0, 0), Coord::new(2, 2));
        let mut visited = Vec::new();
        let mut steps = 0;
        let done = loop {
            steps += 1;
            match dfs.step(&g, &mut visited) {
                Progress::Searching => continue,
                other => break other,
            }
        };
        assert_eq!(done, Progress::Exhausted);
        assert!(!visited.contains(&Coord::new(2, 2)));
        assert!(steps <= g.size().len() + 1);
    }
}
