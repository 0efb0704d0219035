//! Path reconstruction from parent links.
//!
//! These are pure functions over [`VisitRecord`]s: they allocate the output
//! path and nothing else, and never look at the grid.

use pathviz_core::Coord;

use crate::visit::VisitRecord;

/// Follow parent links from `from` back to the root of its search tree.
///
/// The result runs `from → root`, both included. The walk stops at the first
/// coordinate without a parent.
pub fn walk_to_root(record: &VisitRecord, from: Coord) -> Vec<Coord> {
    let mut path = vec![from];
    let mut cur = from;
    // Parent links form a tree, so a walk never exceeds the cell count.
    let limit = record.size().len();
    while let Some(p) = record.parent(cur) {
        if path.len() > limit {
            break;
        }
        path.push(p);
        cur = p;
    }
    path
}

/// Path `root → to` through the parent links of a single-source search.
pub fn path_from_root(record: &VisitRecord, to: Coord) -> Vec<Coord> {
    let mut path = walk_to_root(record, to);
    path.reverse();
    path
}

/// Join the two halves of a bidirectional search at `meeting`.
///
/// `forward` is rooted at the start and `backward` at the end. The result
/// runs `start → meeting → end` with `meeting` appearing once.
pub fn join_segments(forward: &VisitRecord, backward: &VisitRecord, meeting: Coord) -> Vec<Coord> {
    let mut path = path_from_root(forward, meeting);
    path.extend(walk_to_root(backward, meeting).into_iter().skip(1));
    path
}
