use pathviz_core::{Coord, GridSize};

/// Per-run visitation state: a visited flag and a parent link per cell.
///
/// Allocated fresh for every run and dropped with it. Storage is flat and
/// row-major so lookups are a bounds check plus an index.
#[derive(Debug, Clone)]
pub struct VisitRecord {
    size: GridSize,
    visited: Vec<bool>,
    parent: Vec<Option<Coord>>,
    count: usize,
}

impl VisitRecord {
    pub fn new(size: GridSize) -> Self {
        let len = size.len();
        Self {
            size,
            visited: vec![false; len],
            parent: vec![None; len],
            count: 0,
        }
    }

    /// Dimensions this record covers.
    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Mark `c` as a search root: visited, no parent.
    pub fn mark_root(&mut self, c: Coord) {
        if let Some(i) = self.size.index(c) {
            if !self.visited[i] {
                self.count += 1;
            }
            self.visited[i] = true;
            self.parent[i] = None;
        }
    }

    /// Mark `c` visited from `parent`. Returns `false`, and changes nothing,
    /// if `c` was already visited or lies outside the record.
    pub fn visit(&mut self, c: Coord, parent: Coord) -> bool {
        let Some(i) = self.size.index(c) else {
            return false;
        };
        if self.visited[i] {
            return false;
        }
        self.visited[i] = true;
        self.parent[i] = Some(parent);
        self.count += 1;
        true
    }

    /// Point `c` at a new parent, marking it visited if it was not.
    /// Returns `true` if this is the first time `c` is reached.
    pub fn relink(&mut self, c: Coord, parent: Coord) -> bool {
        let Some(i) = self.size.index(c) else {
            return false;
        };
        self.parent[i] = Some(parent);
        if self.visited[i] {
            return false;
        }
        self.visited[i] = true;
        self.count += 1;
        true
    }

    #[inline]
    pub fn is_visited(&self, c: Coord) -> bool {
        self.size.index(c).is_some_and(|i| self.visited[i])
    }

    /// Parent link of `c`; `None` for roots, unvisited and out-of-range cells.
    #[inline]
    pub fn parent(&self, c: Coord) -> Option<Coord> {
        self.size.index(c).and_then(|i| self.parent[i])
    }

    /// Number of visited cells, roots included.
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.count
    }
}
