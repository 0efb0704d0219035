//! Non-interactive mode: generate a maze, search it, print the result.

use std::fmt::Write as _;
use std::io::Write;

use pathviz_core::{Cell, Coord, Grid, GridSize};
use pathviz_paths::{Tick, TraversalEvent};
use pathviz_session::{Pacing, Renderer, RunSummary, Session, StepScheduler};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;

/// Renderer that keeps the overlay as glyphs instead of painting it.
#[derive(Debug)]
pub struct AsciiOverlay {
    size: GridSize,
    glyphs: Vec<Option<char>>,
    ticks: usize,
}

impl AsciiOverlay {
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            glyphs: vec![None; size.len()],
            ticks: 0,
        }
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }

    /// The grid with visited cells as `o` and path cells as `*`. Endpoints
    /// and walls keep their own glyphs.
    pub fn picture(&self, grid: &Grid) -> String {
        let mut out = String::with_capacity(self.size.len() + self.size.rows as usize);
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let c = Coord::new(row, col);
                let cell = grid.cell_at(c).unwrap_or_default();
                let overlay = self.size.index(c).and_then(|i| self.glyphs[i]);
                let ch = match (cell, overlay) {
                    (Cell::Empty, Some(g)) => g,
                    (cell, _) => cell.glyph(),
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

impl Renderer for AsciiOverlay {
    fn render(&mut self, _grid: &Grid, tick: &Tick) -> Result<(), Box<dyn std::error::Error>> {
        self.ticks += 1;
        for ev in &tick.events {
            let (c, g) = match *ev {
                TraversalEvent::Visited(c) => (c, 'o'),
                TraversalEvent::PathCell(c) => (c, '*'),
                TraversalEvent::NotFound | TraversalEvent::Done => continue,
            };
            if let Some(i) = self.size.index(c) {
                self.glyphs[i] = Some(g);
            }
        }
        Ok(())
    }
}

/// Generate a maze from the configured seed, run the configured algorithm
/// on it without delays, and write the picture and a summary to `out`.
pub fn run(config: &Config, out: &mut impl Write) -> Result<RunSummary, Box<dyn std::error::Error>> {
    let mut session = Session::with_size(config.size())?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    if session.randomize(&mut rng, config.wall_density)?.is_none() {
        return Err("the maze left no room for a start and an end".into());
    }
    session.start_run(config.algorithm)?;

    let mut overlay = AsciiOverlay::new(session.grid().size());
    StepScheduler::new(Pacing::INSTANT).run_blocking(&mut session, &mut overlay)?;
    let summary = session
        .last_summary()
        .cloned()
        .ok_or("the run did not finish")?;

    let mut text = overlay.picture(session.grid());
    writeln!(text, "algorithm: {}", summary.algorithm.label())?;
    writeln!(text, "visited:   {}", summary.visited)?;
    match summary.path_len {
        Some(len) => writeln!(text, "path:      {len} cells")?,
        None => writeln!(text, "path:      none")?,
    }
    writeln!(text, "steps:     {}", summary.ticks)?;
    out.write_all(text.as_bytes())?;
    Ok(summary)
}
