//! A single animation run: one traversal turned into a paced event stream.
//!
//! [`Run::tick`] is the only suspension point. Each call performs one unit of
//! search work, or reveals one path cell, and returns the events it produced.
//! The caller decides how long to wait between ticks (see [`Phase`]).

use std::collections::VecDeque;
use std::iter::FusedIterator;

use pathviz_core::{Coord, Grid};

use crate::error::InvalidInput;
use crate::event::{Phase, Tick, TraversalEvent};
use crate::traversal::{Algorithm, Progress, Traversal};

enum State {
    Searching(Box<dyn Traversal + Send>),
    Revealing { path: Vec<Coord>, next: usize },
    Finished,
}

/// A resumable run of one algorithm over one grid.
///
/// The run does not own the grid. Every call must pass the same, unmodified
/// grid that was validated by [`Run::new`].
pub struct Run {
    algorithm: Algorithm,
    start: Coord,
    end: Coord,
    state: State,
    path: Option<Vec<Coord>>,
    visited: usize,
    ticks: usize,
}

impl Run {
    /// Validate the endpoints and set up a fresh traversal.
    ///
    /// Fails if an endpoint is missing, outside `grid` or not walkable, or if
    /// both endpoints are the same cell.
    pub fn new(
        grid: &Grid,
        start: Option<Coord>,
        end: Option<Coord>,
        algorithm: Algorithm,
    ) -> Result<Self, InvalidInput> {
        let start = start.ok_or(InvalidInput::MissingStart)?;
        let end = end.ok_or(InvalidInput::MissingEnd)?;
        if !grid.in_bounds(start) {
            return Err(InvalidInput::OutOfBounds(start));
        }
        if !grid.in_bounds(end) {
            return Err(InvalidInput::OutOfBounds(end));
        }
        if start == end {
            return Err(InvalidInput::SameEndpoints(start));
        }
        if let Some(c) = [start, end].into_iter().find(|&c| !grid.is_walkable(c)) {
            return Err(InvalidInput::Blocked(c));
        }

        log::debug!(
            "new {} run on {} grid: {} -> {}",
            algorithm.name(),
            grid.size(),
            start,
            end
        );
        Ok(Self {
            algorithm,
            start,
            end,
            state: State::Searching(algorithm.traversal(grid.size(), start, end)),
            path: None,
            visited: 0,
            ticks: 0,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    /// The phase the next tick belongs to, `None` once the run is over.
    pub fn phase(&self) -> Option<Phase> {
        match self.state {
            State::Searching(_) => Some(Phase::Search),
            State::Revealing { .. } => Some(Phase::Reveal),
            State::Finished => None,
        }
    }

    /// Whether every event has been produced.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::Finished)
    }

    /// The reconstructed path, available from the tick that carried `Done`.
    pub fn path(&self) -> Option<&[Coord]> {
        self.path.as_deref()
    }

    /// Number of `Visited` events produced so far.
    pub fn visited_count(&self) -> usize {
        self.visited
    }

    /// Number of ticks produced so far.
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    /// Advance by one step. Returns `None` once the run is finished.
    ///
    /// A search tick may carry no events at all when the expanded cell had
    /// nothing new around it; it still counts as one paced step.
    pub fn tick(&mut self, grid: &Grid) -> Option<Tick> {
        let tick = match std::mem::replace(&mut self.state, State::Finished) {
            State::Searching(mut traversal) => {
                let mut cells = Vec::new();
                let progress = traversal.step(grid, &mut cells);
                self.visited += cells.len();
                let mut events: Vec<TraversalEvent> =
                    cells.into_iter().map(TraversalEvent::Visited).collect();
                match progress {
                    Progress::Searching => self.state = State::Searching(traversal),
                    Progress::Found(path) => {
                        log::debug!(
                            "{} reached {} after {} visits, path of {} cells",
                            self.algorithm.name(),
                            self.end,
                            self.visited,
                            path.len()
                        );
                        events.push(TraversalEvent::Done);
                        self.path = Some(path.clone());
                        self.state = State::Revealing { path, next: 0 };
                    }
                    Progress::Exhausted => {
                        log::debug!(
                            "{} found no path after {} visits",
                            self.algorithm.name(),
                            self.visited
                        );
                        events.push(TraversalEvent::NotFound);
                    }
                }
                Tick {
                    phase: Phase::Search,
                    events,
                }
            }
            State::Revealing { path, next } => {
                let Some(&c) = path.get(next) else {
                    return None;
                };
                if next + 1 < path.len() {
                    self.state = State::Revealing {
                        path,
                        next: next + 1,
                    };
                }
                Tick {
                    phase: Phase::Reveal,
                    events: vec![TraversalEvent::PathCell(c)],
                }
            }
            State::Finished => return None,
        };
        self.ticks += 1;
        log::trace!(
            "tick {} ({:?}): {} events",
            self.ticks,
            tick.phase,
            tick.events.len()
        );
        Some(tick)
    }

    /// Consume the run as a flat stream of events.
    pub fn events(self, grid: &Grid) -> Events<'_> {
        Events {
            run: self,
            grid,
            pending: VecDeque::new(),
        }
    }
}

impl std::fmt::Debug for Run {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Run")
            .field("algorithm", &self.algorithm)
            .field("start", &self.start)
            .field("end", &self.end)
            .field("phase", &self.phase())
            .field("visited", &self.visited)
            .field("ticks", &self.ticks)
            .finish()
    }
}

/// Iterator over the events of a [`Run`], tick boundaries erased.
pub struct Events<'g> {
    run: Run,
    grid: &'g Grid,
    pending: VecDeque<TraversalEvent>,
}

impl Events<'_> {
    /// The underlying run.
    pub fn run(&self) -> &Run {
        &self.run
    }
}

impl Iterator for Events<'_> {
    type Item = TraversalEvent;

    fn next(&mut self) -> Option<TraversalEvent> {
        loop {
            if let Some(ev) = self.pending.pop_front() {
                return Some(ev);
            }
            let tick = self.run.tick(self.grid)?;
            self.pending.extend(tick.events);
        }
    }
}

impl FusedIterator for Events<'_> {}

/// Summary of a run driven to completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub algorithm: Algorithm,
    /// Cells in the order they were reported visited.
    pub visited: Vec<Coord>,
    /// The path `start → end`, `None` if the target is unreachable.
    pub path: Option<Vec<Coord>>,
    /// The full event stream.
    pub events: Vec<TraversalEvent>,
    /// Number of paced steps the stream spans.
    pub ticks: usize,
}

impl Outcome {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// Run `algorithm` from `start` to `end` without pacing.
pub fn search(
    grid: &Grid,
    start: Coord,
    end: Coord,
    algorithm: Algorithm,
) -> Result<Outcome, InvalidInput> {
    let mut run = Run::new(grid, Some(start), Some(end), algorithm)?;
    let mut events = Vec::new();
    while let Some(tick) = run.tick(grid) {
        events.extend(tick.events);
    }
    let visited = events
        .iter()
        .filter_map(|e| match e {
            TraversalEvent::Visited(c) => Some(*c),
            _ => None,
        })
        .collect();
    Ok(Outcome {
        algorithm,
        visited,
        path: run.path,
        events,
        ticks: run.ticks,
    })
}
