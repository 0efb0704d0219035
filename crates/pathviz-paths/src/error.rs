use pathviz_core::Coord;
use thiserror::Error;

/// Reasons a run cannot start. Reported before any event is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("no start cell has been placed")]
    MissingStart,

    #[error("no end cell has been placed")]
    MissingEnd,

    #[error("start and end are the same cell {0}")]
    SameEndpoints(Coord),

    #[error("endpoint {0} lies outside the grid")]
    OutOfBounds(Coord),

    #[error("endpoint {0} is a wall")]
    Blocked(Coord),

    #[error("a run is already active")]
    RunActive,
}

/// Unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm {0:?} (expected one of: bfs, dfs, bibfs, astar)")]
pub struct ParseAlgorithmError(pub String);
