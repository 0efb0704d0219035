//! Pacing of a run: the loop that drives ticks to a renderer.

use std::time::{Duration, Instant};

use pathviz_core::Grid;
use pathviz_paths::Tick;

use crate::pacing::Pacing;
use crate::session::Session;

/// Receives every tick of a run, in order.
pub trait Renderer {
    /// Paint the events of `tick`. `grid` is the grid the run searches.
    fn render(&mut self, grid: &Grid, tick: &Tick) -> Result<(), Box<dyn std::error::Error>>;
}

/// Waits between ticks.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Blocks the current thread.
#[derive(Copy, Clone, Debug, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Result of [`StepScheduler::poll`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Poll {
    /// No run is active.
    Idle,
    /// A tick was produced and rendered.
    Ticked,
    /// The next tick is due after this long.
    Waiting(Duration),
}

/// Drives the active run of a [`Session`], one tick per delay.
///
/// Events reach the renderer in the order the run produces them. After a
/// tick the scheduler waits [`Pacing::delay`] for that tick's phase.
#[derive(Debug)]
pub struct StepScheduler<S: Sleeper = ThreadSleeper> {
    pacing: Pacing,
    sleeper: S,
    next_due: Option<Instant>,
}

impl StepScheduler<ThreadSleeper> {
    pub fn new(pacing: Pacing) -> Self {
        Self::with_sleeper(pacing, ThreadSleeper)
    }
}

impl<S: Sleeper> StepScheduler<S> {
    pub fn with_sleeper(pacing: Pacing, sleeper: S) -> Self {
        Self {
            pacing,
            sleeper,
            next_due: None,
        }
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Change the delays. Takes effect from the next tick.
    pub fn set_pacing(&mut self, pacing: Pacing) {
        self.pacing = pacing;
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Drive the active run to completion, sleeping between ticks.
    ///
    /// Returns the number of ticks rendered. A renderer error stops the loop
    /// and leaves the rest of the run unconsumed.
    pub fn run_blocking<R: Renderer + ?Sized>(
        &mut self,
        session: &mut Session,
        renderer: &mut R,
    ) -> Result<usize, Box<dyn std::error::Error>> {
        let mut ticks = 0;
        while let Some(tick) = session.tick() {
            renderer.render(session.grid(), &tick)?;
            ticks += 1;
            if session.is_running() {
                self.sleeper.sleep(self.pacing.delay(tick.phase));
            }
        }
        self.next_due = None;
        Ok(ticks)
    }

    /// Non-blocking variant for event loops: produce at most one tick if it
    /// is due at `now`.
    pub fn poll<R: Renderer + ?Sized>(
        &mut self,
        now: Instant,
        session: &mut Session,
        renderer: &mut R,
    ) -> Result<Poll, Box<dyn std::error::Error>> {
        if !session.is_running() {
            self.next_due = None;
            return Ok(Poll::Idle);
        }
        if let Some(due) = self.next_due {
            if now < due {
                return Ok(Poll::Waiting(due - now));
            }
        }
        let Some(tick) = session.tick() else {
            self.next_due = None;
            return Ok(Poll::Idle);
        };
        renderer.render(session.grid(), &tick)?;
        self.next_due = session
            .is_running()
            .then(|| now + self.pacing.delay(tick.phase));
        Ok(Poll::Ticked)
    }
}
