use gridpath_core::{Grid, Observer, Pos};

use crate::error::Result;
use crate::estimate::Euclidean;
use crate::search::{Outcome, search_with};

/// Heuristic best-first (A*) search from `start` to `end`.
///
/// Cells are ordered by `g + h`, with `h` the Euclidean [`heuristic`] to
/// `end`. The heuristic is admissible, so the marked path is as short as the
/// one [`run_uniform_cost`] finds, usually after fewer expansions.
///
/// [`heuristic`]: crate::heuristic
/// [`run_uniform_cost`]: crate::run_uniform_cost
pub fn run_heuristic_search<O>(
    grid: &mut Grid,
    start: Pos,
    end: Pos,
    observer: &mut O,
) -> Result<Outcome>
where
    O: Observer + ?Sized,
{
    search_with(grid, start, end, &Euclidean, observer).map(|r| r.outcome)
}
