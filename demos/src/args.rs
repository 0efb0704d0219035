use std::path::PathBuf;

use clap::Parser;
use pathviz_paths::Algorithm;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "pathviz")]
#[command(about = "Watch BFS, DFS, bidirectional BFS and A* explore a grid")]
pub struct Args {
    /// TOML configuration file; flags given here override its values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Grid rows
    #[arg(long)]
    pub rows: Option<i32>,

    /// Grid columns
    #[arg(long)]
    pub cols: Option<i32>,

    /// Search to run: bfs, dfs, bibfs or astar
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,

    /// Delay between search steps, in milliseconds
    #[arg(short, long, value_name = "MS")]
    pub delay: Option<u64>,

    /// Multiplier applied to the search delay
    #[arg(short, long)]
    pub speed: Option<f64>,

    /// Probability of a cell becoming a wall when generating a maze (0.0-1.0)
    #[arg(long)]
    pub density: Option<f64>,

    /// Seed for maze generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Generate a maze, search it without animation and print the result
    #[arg(long)]
    pub headless: bool,

    /// Disable mouse capture
    #[arg(long)]
    pub no_mouse: bool,

    /// Write the effective configuration to FILE and exit
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Log level filter, e.g. "debug" or "info,pathviz_paths=trace"
    #[arg(long, value_name = "SPEC")]
    pub log_level: Option<String>,
}
