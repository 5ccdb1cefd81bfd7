//! The [`Observer`] seam between long-running grid algorithms and whoever
//! drives them.
//!
//! Algorithms call [`Observer::is_cancelled`] once at the top of every outer
//! iteration and [`Observer::on_step`] after each unit of work. The observer
//! only ever sees a shared borrow of the grid, so it can render progress but
//! cannot edit barriers while a run is in flight.

use crate::grid::Grid;

/// Progress and cancellation hooks for a running algorithm.
pub trait Observer {
    /// Called after each processed step, with the grid as it now stands.
    fn on_step(&mut self, grid: &Grid);

    /// Polled once per iteration; returning `true` stops the run.
    fn is_cancelled(&mut self) -> bool {
        false
    }
}

/// A `(step, cancelled)` pair of closures.
impl<F, C> Observer for (F, C)
where
    F: FnMut(&Grid),
    C: FnMut() -> bool,
{
    #[inline]
    fn on_step(&mut self, grid: &Grid) {
        (self.0)(grid)
    }

    #[inline]
    fn is_cancelled(&mut self) -> bool {
        (self.1)()
    }
}

/// Observer that ignores steps and never cancels.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    #[inline]
    fn on_step(&mut self, _grid: &Grid) {}
}

/// Observer that cancels after a fixed number of steps.
///
/// Handy for bounding work and for exercising cancellation paths.
#[derive(Debug, Clone, Copy)]
pub struct StepLimit {
    remaining: usize,
    steps: usize,
}

impl StepLimit {
    pub fn new(limit: usize) -> Self {
        Self {
            remaining: limit,
            steps: 0,
        }
    }

    /// Steps observed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Observer for StepLimit {
    fn on_step(&mut self, _grid: &Grid) {
        self.steps += 1;
        self.remaining = self.remaining.saturating_sub(1);
    }

    fn is_cancelled(&mut self) -> bool {
        self.remaining == 0
    }
}
