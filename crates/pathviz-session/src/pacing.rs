use std::time::Duration;

use pathviz_paths::Phase;

/// Delays between successive ticks of a run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pacing {
    /// Wait after each search tick.
    pub traverse: Duration,
    /// Wait after each path-reveal tick.
    pub path: Duration,
}

impl Pacing {
    pub const DEFAULT_TRAVERSE: Duration = Duration::from_millis(200);
    pub const DEFAULT_PATH: Duration = Duration::from_millis(50);

    /// No waiting at all. Used for headless runs and tests.
    pub const INSTANT: Self = Self {
        traverse: Duration::ZERO,
        path: Duration::ZERO,
    };

    pub const fn new(traverse: Duration, path: Duration) -> Self {
        Self { traverse, path }
    }

    /// Multiply the traversal delay by `factor`. The path delay is fixed.
    ///
    /// Negative and non-finite factors are treated as zero.
    pub fn scaled(self, factor: f64) -> Self {
        let factor = if factor.is_finite() { factor.max(0.0) } else { 0.0 };
        Self {
            traverse: self.traverse.mul_f64(factor),
            path: self.path,
        }
    }

    /// The delay that follows a tick of `phase`.
    pub fn delay(&self, phase: Phase) -> Duration {
        match phase {
            Phase::Search => self.traverse,
            Phase::Reveal => self.path,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TRAVERSE, Self::DEFAULT_PATH)
    }
}
