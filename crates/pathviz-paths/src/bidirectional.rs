//! Bidirectional breadth-first search.
//!
//! Two frontiers grow at the same pace: one from the start, expanding
//! Up/Right/Down/Left, and one from the end, expanding Down/Left/Up/Right.
//! Every cell newly discovered by one side is checked against the other
//! side's visited set; the first hit is the meeting node.
//!
//! On a 4-connected grid the first meeting node already lies on a shortest
//! path. Both frontiers hold cells of at most two consecutive depths, which
//! bounds the joined path at one hop over the optimum, and the grid is
//! bipartite, so every start→end walk has the parity of the optimum.

use std::collections::VecDeque;

use pathviz_core::{Coord, Grid, GridSize};

use crate::neighbors::{BACKWARD_ORDER, Direction, FORWARD_ORDER, Neighbors};
use crate::path::join_segments;
use crate::traversal::{Algorithm, Progress, Traversal};
use crate::visit::VisitRecord;

/// One half of the search: a FIFO frontier with its own parent links.
#[derive(Debug)]
struct Frontier {
    queue: VecDeque<Coord>,
    record: VisitRecord,
    order: [Direction; 4],
}

impl Frontier {
    fn new(size: GridSize, root: Coord, order: [Direction; 4]) -> Self {
        let mut record = VisitRecord::new(size);
        record.mark_root(root);
        Self {
            queue: VecDeque::from([root]),
            record,
            order,
        }
    }

    /// Dequeue and expand one cell. Returns the meeting node if a newly
    /// discovered neighbor has already been visited by `other`; expansion
    /// stops there.
    fn expand(
        &mut self,
        other: &VisitRecord,
        grid: &Grid,
        nbuf: &mut Neighbors,
        visited: &mut Vec<Coord>,
    ) -> Option<Coord> {
        let current = self.queue.pop_front()?;
        for &n in nbuf.walkable(grid, current, &self.order) {
            if !self.record.visit(n, current) {
                continue;
            }
            self.queue.push_back(n);
            visited.push(n);
            if other.is_visited(n) {
                return Some(n);
            }
        }
        None
    }
}

/// Breadth-first search from both endpoints at once.
#[derive(Debug)]
pub struct BidirectionalBfs {
    forward: Frontier,
    backward: Frontier,
    meeting: Option<Coord>,
    nbuf: Neighbors,
}

impl BidirectionalBfs {
    pub fn new(size: GridSize, start: Coord, end: Coord) -> Self {
        Self {
            forward: Frontier::new(size, start, FORWARD_ORDER),
            backward: Frontier::new(size, end, BACKWARD_ORDER),
            meeting: None,
            nbuf: Neighbors::new(),
        }
    }

    /// The node where the two searches met, once they have.
    pub fn meeting(&self) -> Option<Coord> {
        self.meeting
    }

    fn found(&mut self, meeting: Coord) -> Progress {
        self.meeting = Some(meeting);
        Progress::Found(join_segments(
            &self.forward.record,
            &self.backward.record,
            meeting,
        ))
    }
}

impl Traversal for BidirectionalBfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bidirectional
    }

    /// Advance the forward frontier by one expansion, then, unless the sides
    /// have met, the backward frontier by one expansion.
    fn step(&mut self, grid: &Grid, visited: &mut Vec<Coord>) -> Progress {
        if self.forward.queue.is_empty() && self.backward.queue.is_empty() {
            return Progress::Exhausted;
        }

        if let Some(m) =
            self.forward
                .expand(&self.backward.record, grid, &mut self.nbuf, visited)
        {
            return self.found(m);
        }
        if let Some(m) =
            self.backward
                .expand(&self.forward.record, grid, &mut self.nbuf, visited)
        {
            return self.found(m);
        }
        Progress::Searching
    }

    fn visited_count(&self) -> usize {
        self.forward.record.visited_count() + self.backward.record.visited_count()
    }
}
