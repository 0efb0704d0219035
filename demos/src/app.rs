//! The interactive visualiser model.

use std::io::Write;
use std::time::{Duration, Instant};

use pathviz_core::Coord;
use pathviz_crossterm::{Input, TerminalRenderer};
use pathviz_paths::Algorithm;
use pathviz_session::{Pacing, Poll, Session, SessionError, StepScheduler};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;

pub const HELP: &str =
    "arrows move | space toggle | 1-4 algorithm | enter run | r random | c clear | +/- speed | q quit";

const MIN_SPEED: f64 = 0.125;
const MAX_SPEED: f64 = 8.0;

/// Whether the event loop should keep going.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Session, scheduler and renderer wired to user commands.
pub struct Visualizer<W: Write> {
    session: Session,
    scheduler: StepScheduler,
    renderer: TerminalRenderer<W>,
    algorithm: Algorithm,
    cursor: Coord,
    rng: StdRng,
    density: f64,
    base_pacing: Pacing,
    speed: f64,
}

impl<W: Write> Visualizer<W> {
    pub fn new(config: &Config, out: W) -> Result<Self, SessionError> {
        let session = Session::with_size(config.size())?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let mut renderer = TerminalRenderer::new(out, session.grid().size());
        renderer.set_help(HELP);
        let mut vis = Self {
            session,
            scheduler: StepScheduler::new(config.pacing()),
            renderer,
            algorithm: config.algorithm,
            cursor: Coord::ZERO,
            rng,
            density: config.wall_density,
            base_pacing: config.base_pacing(),
            speed: config.speed,
        };
        vis.update_title();
        vis.status("place a start and an end, then press enter");
        Ok(vis)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn renderer(&self) -> &TerminalRenderer<W> {
        &self.renderer
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    fn update_title(&mut self) {
        let title = format!(
            "pathviz | {} | {} | delay x{}",
            self.algorithm.label(),
            self.algorithm.description(),
            self.speed
        );
        self.renderer.set_title(title);
    }

    fn status(&mut self, msg: impl Into<String>) {
        self.renderer.set_status(msg);
    }

    pub fn redraw(&mut self) -> std::io::Result<()> {
        self.renderer.set_cursor(Some(self.cursor));
        self.renderer.draw(self.session.grid())
    }

    fn edited(&mut self, result: Result<(), SessionError>) {
        match result {
            Ok(()) => {
                self.renderer.reset_overlay(self.session.grid().size());
                self.status("");
            }
            Err(e) => self.status(e.to_string()),
        }
    }

    fn set_speed(&mut self, speed: f64) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        self.scheduler.set_pacing(self.base_pacing.scaled(self.speed));
        self.update_title();
    }

    /// Apply one user command.
    pub fn handle(&mut self, input: Input) -> Result<Flow, Box<dyn std::error::Error>> {
        let size = self.session.grid().size();
        match input {
            Input::Quit => return Ok(Flow::Quit),
            Input::Cursor(m) => self.cursor = m.apply(self.cursor, size),
            Input::Toggle => {
                let r = self.session.toggle(self.cursor).map(|_| ());
                self.edited(r);
            }
            Input::Click(c) => {
                self.cursor = c;
                let r = self.session.toggle(c).map(|_| ());
                self.edited(r);
            }
            Input::Select(alg) => {
                if self.session.is_running() {
                    self.status(SessionError::Busy.to_string());
                } else {
                    self.algorithm = alg;
                    self.update_title();
                }
            }
            Input::Run => {
                self.renderer.reset_overlay(size);
                match self.session.start_run(self.algorithm) {
                    Ok(()) => self.status(format!("running {}", self.algorithm.label())),
                    Err(e) => self.status(e.to_string()),
                }
            }
            Input::Randomize => match self.session.randomize(&mut self.rng, self.density) {
                Ok(Some(_)) => self.edited(Ok(())),
                Ok(None) => {
                    self.renderer.reset_overlay(size);
                    self.status("no room left for the endpoints");
                }
                Err(e) => self.status(e.to_string()),
            },
            Input::Clear => {
                let r = self.session.clear();
                self.edited(r);
            }
            Input::Faster => self.set_speed(self.speed / 2.0),
            Input::Slower => self.set_speed(self.speed * 2.0),
            Input::Resize => {}
        }
        self.redraw()?;
        Ok(Flow::Continue)
    }

    /// Let the scheduler produce a due tick. Returns how long the caller may
    /// wait for input before polling again, `None` when no run is active.
    pub fn poll(&mut self, now: Instant) -> Result<Option<Duration>, Box<dyn std::error::Error>> {
        self.renderer.set_cursor(None);
        let poll = self
            .scheduler
            .poll(now, &mut self.session, &mut self.renderer)?;
        match poll {
            Poll::Idle => Ok(None),
            Poll::Waiting(d) => Ok(Some(d)),
            Poll::Ticked if self.session.is_running() => Ok(Some(Duration::ZERO)),
            Poll::Ticked => {
                if let Some(summary) = self.session.last_summary() {
                    let msg = match summary.path_len {
                        Some(len) => format!(
                            "{}: {} cells visited, path of {} cells",
                            summary.algorithm.label(),
                            summary.visited,
                            len
                        ),
                        None => format!(
                            "{}: {} cells visited, no path found",
                            summary.algorithm.label(),
                            summary.visited
                        ),
                    };
                    self.status(msg);
                }
                self.redraw()?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::Cell;
    use pathviz_crossterm::{Mark, Move};

    fn vis(rows: i32, cols: i32) -> Visualizer<Vec<u8>> {
        let config = Config {
            rows,
            cols,
            seed: Some(1),
            ..Config::default()
        };
        Visualizer::new(&config, Vec::new()).unwrap()
    }

    fn drain(v: &mut Visualizer<Vec<u8>>) {
        let mut now = Instant::now();
        while v.session().is_running() {
            v.poll(now).unwrap();
            now += Duration::from_secs(1);
        }
    }

    #[test]
    fn keyboard_editing_and_run() {
        let mut v = vis(3, 3);
        v.handle(Input::Toggle).unwrap();
        v.handle(Input::Cursor(Move::Right)).unwrap();
        v.handle(Input::Cursor(Move::Right)).unwrap();
        v.handle(Input::Cursor(Move::Down)).unwrap();
        v.handle(Input::Cursor(Move::Down)).unwrap();
        v.handle(Input::Toggle).unwrap();
        assert_eq!(v.cursor(), Coord::new(2, 2));
        assert_eq!(v.session().start(), Some(Coord::new(0, 0)));
        assert_eq!(v.session().end(), Some(Coord::new(2, 2)));

        v.handle(Input::Select(Algorithm::AStar)).unwrap();
        v.handle(Input::Run).unwrap();
        assert!(v.session().is_running());
        drain(&mut v);

        let summary = v.session().last_summary().unwrap();
        assert_eq!(summary.algorithm, Algorithm::AStar);
        assert_eq!(summary.path_len, Some(5));
        assert_eq!(v.renderer().mark(Coord::new(0, 0)), Mark::Path);
    }

    #[test]
    fn edits_during_a_run_are_refused() {
        let mut v = vis(1, 6);
        v.handle(Input::Click(Coord::new(0, 0))).unwrap();
        v.handle(Input::Click(Coord::new(0, 5))).unwrap();
        v.handle(Input::Run).unwrap();
        v.handle(Input::Click(Coord::new(0, 2))).unwrap();
        v.handle(Input::Select(Algorithm::Dfs)).unwrap();
        assert_eq!(v.session().grid().cell_at(Coord::new(0, 2)), Some(Cell::Empty));
        assert_eq!(v.algorithm(), Algorithm::Bfs);
        drain(&mut v);
        v.handle(Input::Click(Coord::new(0, 2))).unwrap();
        assert_eq!(v.session().grid().cell_at(Coord::new(0, 2)), Some(Cell::Wall));
    }

    #[test]
    fn run_without_endpoints_stays_idle() {
        let mut v = vis(2, 2);
        v.handle(Input::Run).unwrap();
        assert!(!v.session().is_running());
        assert_eq!(v.poll(Instant::now()).unwrap(), None);
    }

    #[test]
    fn randomize_places_endpoints() {
        let mut v = vis(10, 10);
        v.handle(Input::Randomize).unwrap();
        assert!(v.session().start().is_some());
        assert!(v.session().end().is_some());
        v.handle(Input::Clear).unwrap();
        assert_eq!(v.session().grid().count(Cell::Empty), 100);
    }

    #[test]
    fn speed_is_clamped() {
        let mut v = vis(2, 2);
        for _ in 0..10 {
            v.handle(Input::Faster).unwrap();
        }
        assert_eq!(v.speed(), MIN_SPEED);
        v.handle(Input::Slower).unwrap();
        assert_eq!(v.speed(), MIN_SPEED * 2.0);
        assert_eq!(v.handle(Input::Quit).unwrap(), Flow::Quit);
    }
}
