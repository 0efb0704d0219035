//! Terminal front-end for the pathfinding visualiser.
//!
//! Shared by the `pathviz` binary: command-line flags, the TOML
//! configuration, file logging, the interactive [`Visualizer`] and the
//! headless runner.

pub mod app;
pub mod args;
pub mod config;
pub mod headless;
pub mod logging;

pub use app::{Flow, Visualizer};
pub use args::Args;
pub use config::Config;
