//! The editing session: one grid, its endpoints and at most one active run.

use pathviz_core::{Cell, Coord, Grid, GridSize};
use pathviz_paths::{Algorithm, InvalidInput, Run, Tick};
use rand::Rng;

use crate::error::SessionError;
use crate::mapgen::generate_walls;

/// Whether a run is in progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Edits and new runs are accepted.
    #[default]
    Idle,
    /// A run is active; edits and new runs are rejected.
    Running,
}

/// What the last completed run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub algorithm: Algorithm,
    pub visited: usize,
    /// Cell count of the path, `None` if the target was unreachable.
    pub path_len: Option<usize>,
    pub ticks: usize,
}

/// A grid being edited and searched.
///
/// The session keeps the `start`/`end` fields in sync with the grid: there is
/// at most one [`Cell::Start`] and one [`Cell::End`], and each field names the
/// position holding it.
#[derive(Debug)]
pub struct Session {
    grid: Grid,
    start: Option<Coord>,
    end: Option<Coord>,
    run: Option<Run>,
    last: Option<RunSummary>,
}

impl Session {
    /// An empty `rows × cols` session.
    pub fn new(rows: i32, cols: i32) -> Result<Self, SessionError> {
        Ok(Self::with_grid(Grid::new(rows, cols)?))
    }

    pub fn with_size(size: GridSize) -> Result<Self, SessionError> {
        Self::new(size.rows, size.cols)
    }

    /// Adopt an existing grid. The first `Start` and first `End` in row-major
    /// order become the endpoints; any further ones are cleared to `Empty`.
    pub fn with_grid(mut grid: Grid) -> Self {
        let mut start = None;
        let mut end = None;
        let extras: Vec<Coord> = grid
            .iter()
            .filter_map(|(c, cell)| {
                let slot = match cell {
                    Cell::Start => &mut start,
                    Cell::End => &mut end,
                    _ => return None,
                };
                if slot.is_some() {
                    return Some(c);
                }
                *slot = Some(c);
                None
            })
            .collect();
        for c in extras {
            if grid.set(c, Cell::Empty).is_ok() {
                log::warn!("dropped duplicate endpoint at {c}");
            }
        }
        Self {
            grid,
            start,
            end,
            run: None,
            last: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    pub fn state(&self) -> SessionState {
        if self.run.is_some() {
            SessionState::Running
        } else {
            SessionState::Idle
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// The active run, if any.
    pub fn run(&self) -> Option<&Run> {
        self.run.as_ref()
    }

    /// Summary of the most recent run that finished.
    pub fn last_summary(&self) -> Option<&RunSummary> {
        self.last.as_ref()
    }

    fn ensure_idle(&self, what: &str) -> Result<(), SessionError> {
        if self.is_running() {
            log::warn!("{what} rejected: run in progress");
            return Err(SessionError::Busy);
        }
        Ok(())
    }

    /// Put `kind` at `c` and return what was there.
    ///
    /// Placing a `Start` or `End` clears the previous one. Overwriting an
    /// endpoint forgets it.
    pub fn set_cell(&mut self, c: Coord, kind: Cell) -> Result<Cell, SessionError> {
        self.ensure_idle("edit")?;
        let previous = self.grid.set(c, kind)?;
        match previous {
            Cell::Start if kind != Cell::Start => self.start = None,
            Cell::End if kind != Cell::End => self.end = None,
            _ => {}
        }
        let slot = match kind {
            Cell::Start => Some(&mut self.start),
            Cell::End => Some(&mut self.end),
            _ => None,
        };
        if let Some(slot) = slot {
            if let Some(old) = slot.replace(c).filter(|&old| old != c) {
                self.grid.set(old, Cell::Empty)?;
            }
        }
        Ok(previous)
    }

    /// Click-style edit: an empty cell becomes the start if none is placed,
    /// else the end if none is placed, else a wall. Any other cell is
    /// cleared. Returns the new kind at `c`.
    pub fn toggle(&mut self, c: Coord) -> Result<Cell, SessionError> {
        self.ensure_idle("toggle")?;
        let current = self.grid.cell_at(c).ok_or(pathviz_core::GridError::OutOfBounds {
            coord: c,
            rows: self.grid.rows(),
            cols: self.grid.cols(),
        })?;
        let next = match current {
            Cell::Empty if self.start.is_none() => Cell::Start,
            Cell::Empty if self.end.is_none() => Cell::End,
            Cell::Empty => Cell::Wall,
            Cell::Start | Cell::End | Cell::Wall => Cell::Empty,
        };
        self.set_cell(c, next)?;
        Ok(next)
    }

    /// Reset every cell to `Empty` and forget both endpoints.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.ensure_idle("clear")?;
        self.grid.fill(Cell::Empty);
        self.start = None;
        self.end = None;
        Ok(())
    }

    /// Replace the grid with random walls and random endpoints.
    ///
    /// Returns the new endpoints, or `None` if the walls left fewer than two
    /// open cells; the endpoints are then unset.
    pub fn randomize<R: Rng>(
        &mut self,
        rng: &mut R,
        density: f64,
    ) -> Result<Option<(Coord, Coord)>, SessionError> {
        self.ensure_idle("randomize")?;
        let endpoints = generate_walls(&mut self.grid, rng, density);
        self.start = endpoints.map(|(s, _)| s);
        self.end = endpoints.map(|(_, e)| e);
        Ok(endpoints)
    }

    /// Start `algorithm` between the current endpoints. Idle → Running.
    pub fn start_run(&mut self, algorithm: Algorithm) -> Result<(), SessionError> {
        if self.is_running() {
            log::warn!("run of {algorithm} rejected: another run is active");
            return Err(InvalidInput::RunActive.into());
        }
        let run = Run::new(&self.grid, self.start, self.end, algorithm).inspect_err(|e| {
            log::warn!("run of {algorithm} rejected: {e}");
        })?;
        log::info!(
            "starting {} from {} to {}",
            algorithm,
            run.start(),
            run.end()
        );
        self.run = Some(run);
        Ok(())
    }

    /// Advance the active run by one tick. Returns `None` when idle.
    ///
    /// The session returns to Idle on the tick that completes the run.
    pub fn tick(&mut self) -> Option<Tick> {
        let run = self.run.as_mut()?;
        let tick = run.tick(&self.grid);
        if run.is_finished() {
            let summary = RunSummary {
                algorithm: run.algorithm(),
                visited: run.visited_count(),
                path_len: run.path().map(<[Coord]>::len),
                ticks: run.ticks(),
            };
            match summary.path_len {
                Some(len) => log::info!(
                    "{} finished: {} cells visited, path of {} cells",
                    summary.algorithm,
                    summary.visited,
                    len
                ),
                None => log::info!(
                    "{} finished: {} cells visited, no path",
                    summary.algorithm,
                    summary.visited
                ),
            }
            self.last = Some(summary);
            self.run = None;
        }
        tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::GridError;
    use pathviz_paths::TraversalEvent;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn toggle_cycles_through_kinds() {
        let mut s = Session::new(3, 3).unwrap();
        assert_eq!(s.toggle(c(0, 0)).unwrap(), Cell::Start);
        assert_eq!(s.toggle(c(2, 2)).unwrap(), Cell::End);
        assert_eq!(s.toggle(c(1, 1)).unwrap(), Cell::Wall);
        assert_eq!(s.start(), Some(c(0, 0)));
        assert_eq!(s.end(), Some(c(2, 2)));

        // Clearing the start frees the slot for the next empty click.
        assert_eq!(s.toggle(c(0, 0)).unwrap(), Cell::Empty);
        assert_eq!(s.start(), None);
        assert_eq!(s.toggle(c(0, 1)).unwrap(), Cell::Start);
        assert_eq!(s.toggle(c(1, 1)).unwrap(), Cell::Empty);
    }

    #[test]
    fn set_cell_moves_endpoints() {
        let mut s = Session::new(2, 3).unwrap();
        s.set_cell(c(0, 0), Cell::Start).unwrap();
        s.set_cell(c(1, 2), Cell::Start).unwrap();
        assert_eq!(s.start(), Some(c(1, 2)));
        assert_eq!(s.grid().cell_at(c(0, 0)), Some(Cell::Empty));
        assert_eq!(s.grid().count(Cell::Start), 1);

        s.set_cell(c(0, 1), Cell::End).unwrap();
        assert_eq!(s.set_cell(c(0, 1), Cell::Wall).unwrap(), Cell::End);
        assert_eq!(s.end(), None);

        // Replacing the start with an end moves the end there.
        s.set_cell(c(1, 2), Cell::End).unwrap();
        assert_eq!(s.start(), None);
        assert_eq!(s.end(), Some(c(1, 2)));
    }

    #[test]
    fn edits_out_of_bounds_fail() {
        let mut s = Session::new(2, 2).unwrap();
        assert!(matches!(
            s.set_cell(c(2, 0), Cell::Wall),
            Err(SessionError::Grid(GridError::OutOfBounds { .. }))
        ));
        assert!(matches!(
            s.toggle(c(0, -1)),
            Err(SessionError::Grid(GridError::OutOfBounds { .. }))
        ));
    }

    #[test]
    fn with_grid_keeps_first_endpoints() {
        let g: Grid = "S.S\nE.E".parse().unwrap();
        let s = Session::with_grid(g);
        assert_eq!(s.start(), Some(c(0, 0)));
        assert_eq!(s.end(), Some(c(1, 0)));
        assert_eq!(s.grid().count(Cell::Start), 1);
        assert_eq!(s.grid().count(Cell::End), 1);
        assert_eq!(s.grid().cell_at(c(0, 2)), Some(Cell::Empty));
        assert_eq!(s.grid().cell_at(c(1, 2)), Some(Cell::Empty));
    }

    #[test]
    fn running_locks_the_grid() {
        let mut s = Session::with_grid("S..\n...\n..E".parse().unwrap());
        s.start_run(Algorithm::Bfs).unwrap();
        assert_eq!(s.state(), SessionState::Running);

        assert_eq!(s.set_cell(c(1, 1), Cell::Wall), Err(SessionError::Busy));
        assert_eq!(s.toggle(c(1, 1)), Err(SessionError::Busy));
        assert_eq!(s.clear(), Err(SessionError::Busy));
        assert_eq!(
            s.start_run(Algorithm::Dfs),
            Err(SessionError::Input(InvalidInput::RunActive))
        );

        let mut events = Vec::new();
        while let Some(tick) = s.tick() {
            events.extend(tick.events);
        }
        assert_eq!(s.state(), SessionState::Idle);
        assert!(events.contains(&TraversalEvent::Done));
        let summary = s.last_summary().unwrap();
        assert_eq!(summary.algorithm, Algorithm::Bfs);
        assert_eq!(summary.path_len, Some(5));

        // Editable again.
        assert_eq!(s.toggle(c(1, 1)).unwrap(), Cell::Wall);
    }

    #[test]
    fn start_run_needs_both_endpoints() {
        let mut s = Session::new(3, 3).unwrap();
        assert_eq!(
            s.start_run(Algorithm::AStar),
            Err(SessionError::Input(InvalidInput::MissingStart))
        );
        s.toggle(c(0, 0)).unwrap();
        assert_eq!(
            s.start_run(Algorithm::AStar),
            Err(SessionError::Input(InvalidInput::MissingEnd))
        );
        assert_eq!(s.state(), SessionState::Idle);
        assert_eq!(s.tick(), None);
    }

    #[test]
    fn not_found_returns_to_idle() {
        let mut s = Session::with_grid("S#.\n#..\n..E".parse().unwrap());
        s.start_run(Algorithm::Bidirectional).unwrap();
        let mut last = None;
        while let Some(tick) = s.tick() {
            last = tick.events.last().copied();
        }
        assert_eq!(last, Some(TraversalEvent::NotFound));
        assert!(!s.is_running());
        assert_eq!(s.last_summary().unwrap().path_len, None);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut s = Session::with_grid("S#\n#E".parse().unwrap());
        s.clear().unwrap();
        assert_eq!(s.start(), None);
        assert_eq!(s.end(), None);
        assert_eq!(s.grid().count(Cell::Empty), 4);
    }
}
