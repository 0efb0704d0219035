use std::fmt;
use std::str::FromStr;

use pathviz_core::{Coord, Grid, GridSize};

use crate::astar::AStar;
use crate::bfs::Bfs;
use crate::bidirectional::BidirectionalBfs;
use crate::dfs::Dfs;
use crate::error::ParseAlgorithmError;

/// Result of one unit of search work.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Progress {
    /// More work remains.
    Searching,
    /// The target was reached. Carries the path `start → end`, both included.
    Found(Vec<Coord>),
    /// Every reachable cell was explored without reaching the target.
    Exhausted,
}

/// A resumable search.
///
/// Each call to [`step`](Traversal::step) performs one discrete unit of work
/// and appends the cells it newly marks visited to `visited`, in discovery
/// order. The grid is passed per step and must not change during a run.
/// `step` must not be called again after it returned `Found` or `Exhausted`.
pub trait Traversal {
    fn algorithm(&self) -> Algorithm;

    fn step(&mut self, grid: &Grid, visited: &mut Vec<Coord>) -> Progress;

    /// Number of cells visited so far, search roots included.
    fn visited_count(&self) -> usize;
}

/// The four selectable searches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
    #[cfg_attr(feature = "serde", serde(rename = "bibfs"))]
    Bidirectional,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Bidirectional,
        Algorithm::AStar,
    ];

    /// Short identifier, also accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Bidirectional => "bibfs",
            Algorithm::AStar => "astar",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Bidirectional => "Bidirectional BFS",
            Algorithm::AStar => "A*",
        }
    }

    /// One-line caption shown next to the algorithm selector.
    pub const fn description(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS guarantees the shortest path",
            Algorithm::Dfs => "DFS does not guarantee the shortest path",
            Algorithm::Bidirectional => "Bidirectional BFS guarantees the shortest path",
            Algorithm::AStar => "A* algorithm ensures the shortest path using heuristics",
        }
    }

    /// Whether a found path is always of minimum length.
    pub const fn guarantees_shortest(self) -> bool {
        !matches!(self, Algorithm::Dfs)
    }

    /// Build a fresh traversal of a `size` grid from `start` to `end`.
    pub fn traversal(self, size: GridSize, start: Coord, end: Coord) -> Box<dyn Traversal + Send> {
        match self {
            Algorithm::Bfs => Box::new(Bfs::new(size, start, end)),
            Algorithm::Dfs => Box::new(Dfs::new(size, start, end)),
            Algorithm::Bidirectional => Box::new(BidirectionalBfs::new(size, start, end)),
            Algorithm::AStar => Box::new(AStar::new(size, start, end)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "bibfs" | "bidirectional" | "bidirectional-bfs" => Ok(Algorithm::Bidirectional),
            "astar" | "a*" | "a-star" => Ok(Algorithm::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
