use pathviz_core::GridError;
use pathviz_paths::InvalidInput;
use thiserror::Error;

/// Errors reported by [`Session`](crate::Session) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The grid cannot be edited while a run is active.
    #[error("the grid is locked while a run is active")]
    Busy,

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Input(#[from] InvalidInput),
}
