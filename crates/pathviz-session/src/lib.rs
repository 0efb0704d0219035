//! Editing session and paced playback for grid searches.
//!
//! A [`Session`] owns the grid and its two endpoints, and holds at most one
//! active [`Run`](pathviz_paths::Run). While the run is active the session is
//! [`SessionState::Running`] and rejects edits. A [`StepScheduler`] drives
//! the run one tick at a time, handing each tick to a [`Renderer`] and
//! waiting according to [`Pacing`] in between.

mod error;
pub mod mapgen;
mod pacing;
mod scheduler;
mod session;

pub use error::SessionError;
pub use mapgen::{DEFAULT_DENSITY, MapGen, generate_walls};
pub use pacing::Pacing;
pub use scheduler::{Poll, Renderer, Sleeper, StepScheduler, ThreadSleeper};
pub use session::{RunSummary, Session, SessionState};
