//! Step-wise grid searches for animation.
//!
//! Four searches are provided over a 4-connected [`Grid`](pathviz_core::Grid):
//!
//! - **BFS** ([`Bfs`]), shortest path, level order
//! - **DFS** ([`Dfs`]), stack order, no optimality
//! - **Bidirectional BFS** ([`BidirectionalBfs`]), two frontiers meeting in
//!   the middle, shortest path
//! - **A\*** ([`AStar`]) with the Manhattan heuristic, shortest path
//!
//! Each implements [`Traversal`], a resumable `step` function. A [`Run`]
//! wraps one traversal, validates its endpoints, and turns it into a stream
//! of [`TraversalEvent`]s grouped into [`Tick`]s: `Visited` cells while the
//! search runs, then either `NotFound` or `Done` followed by one `PathCell`
//! per cell of the reconstructed path.
//!
//! ```
//! use pathviz_core::{Coord, Grid};
//! use pathviz_paths::{Algorithm, search};
//!
//! let grid = Grid::new(3, 3).unwrap();
//! let out = search(&grid, Coord::new(0, 0), Coord::new(2, 2), Algorithm::AStar).unwrap();
//! assert_eq!(out.path.map(|p| p.len()), Some(5));
//! ```

mod astar;
mod bfs;
mod bidirectional;
mod dfs;
mod distance;
mod error;
mod event;
mod neighbors;
mod path;
mod queue;
mod run;
mod traversal;
mod visit;

pub use astar::{AStar, OpenEntry, UNREACHED};
pub use bfs::Bfs;
pub use bidirectional::BidirectionalBfs;
pub use dfs::Dfs;
pub use distance::manhattan;
pub use error::{InvalidInput, ParseAlgorithmError};
pub use event::{Phase, Tick, TraversalEvent};
pub use neighbors::{BACKWARD_ORDER, Direction, FORWARD_ORDER, Neighbors};
pub use path::{join_segments, path_from_root, walk_to_root};
pub use queue::PriorityQueue;
pub use run::{Events, Outcome, Run, search};
pub use traversal::{Algorithm, Progress, Traversal};
pub use visit::VisitRecord;
