use gridpath_core::{Grid, Observer, Pos};

use crate::error::Result;
use crate::estimate::Zero;
use crate::search::{Outcome, search_with};

/// Uniform-cost (Dijkstra) search from `start` to `end`.
///
/// The frontier is ordered by distance from `start` alone. On success every
/// cell of a shortest path, excluding `start` and including `end`, is marked;
/// `end` keeps its End mark. See [`search_with`] for the full contract and a
/// variant that also returns the path and counters.
pub fn run_uniform_cost<O>(grid: &mut Grid, start: Pos, end: Pos, observer: &mut O) -> Result<Outcome>
where
    O: Observer + ?Sized,
{
    search_with(grid, start, end, &Zero, observer).map(|r| r.outcome)
}
