//! The best-first loop shared by uniform-cost search and A*.
//!
//! Per-cell states move from unseen to Open (queued) to Closed (settled).
//! The loop ends when the goal is popped (success), the frontier runs dry
//! (no path), or the observer asks to stop.

use log::{debug, info, trace};

use gridpath_core::{CellState, Grid, Observer, Pos};

use crate::error::{Result, SearchError};
use crate::estimate::Estimate;
use crate::frontier::{Entry, Frontier};
use crate::reconstruct::{ParentMap, reconstruct};

/// Edge weight between orthogonal neighbours.
const STEP_COST: f64 = 1.0;

/// How a search run ended.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The goal was reached and the path marked.
    Found,
    /// The frontier emptied without reaching the goal.
    Exhausted,
    /// The observer requested cancellation. Open/Closed marks are left as
    /// they were.
    Cancelled,
}

/// Counters gathered during one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells popped and expanded (one observer step each).
    pub expanded: usize,
    /// Frontier pushes, including ones that later went stale.
    pub pushed: u64,
    /// Outdated frontier entries discarded on pop.
    pub stale_skipped: usize,
}

/// Result of a search run: the outcome, the marked path, and counters.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub outcome: Outcome,
    /// Path cells from the goal back to (excluding) the start. Empty unless
    /// the outcome is [`Outcome::Found`].
    pub path: Vec<Pos>,
    pub stats: SearchStats,
}

impl SearchReport {
    /// Number of steps on the found path.
    pub fn path_len(&self) -> Option<usize> {
        (self.outcome == Outcome::Found).then_some(self.path.len())
    }
}

/// Per-run bookkeeping. Created fresh for every search and dropped at the
/// end; only the grid's cell states outlive it.
struct SearchState {
    /// Best known cost from the start (`g` / `dist`).
    cost: Vec<f64>,
    /// Frontier priority recorded with the best cost (`f = g + h`).
    priority: Vec<f64>,
    parents: ParentMap,
    frontier: Frontier,
}

impl SearchState {
    fn new(len: usize) -> Self {
        Self {
            cost: vec![f64::INFINITY; len],
            priority: vec![f64::INFINITY; len],
            parents: ParentMap::new(len),
            frontier: Frontier::new(),
        }
    }
}

fn validate(grid: &Grid, start: Pos, end: Pos) -> Result<(usize, usize)> {
    let si = grid.index(start).ok_or(SearchError::OutOfBounds(start))?;
    let ei = grid.index(end).ok_or(SearchError::OutOfBounds(end))?;
    if si == ei {
        return Err(SearchError::SameEndpoints);
    }
    for (i, p) in [(si, start), (ei, end)] {
        if grid.cell_at(i).barrier {
            return Err(SearchError::Barrier(p));
        }
    }
    if !grid.neighbors_fresh() {
        return Err(SearchError::StaleNeighbors);
    }
    Ok((si, ei))
}

/// Run a best-first search from `start` to `end` ordered by `estimate`.
///
/// The grid's neighbour lists must be fresh. Cancellation is polled at the
/// top of each iteration; `on_step` fires after each expanded cell. The
/// start cell keeps its Start mark and the end cell its End mark throughout.
pub fn search_with<E, O>(
    grid: &mut Grid,
    start: Pos,
    end: Pos,
    estimate: &E,
    observer: &mut O,
) -> Result<SearchReport>
where
    E: Estimate + ?Sized,
    O: Observer + ?Sized,
{
    let (si, ei) = validate(grid, start, end)?;

    let mut st = SearchState::new(grid.len());
    st.cost[si] = 0.0;
    st.priority[si] = estimate.estimate(start, end);
    st.frontier.push(st.priority[si], si);

    let mut stats = SearchStats::default();
    let mut path = Vec::new();

    let outcome = 'search: loop {
        if st.frontier.is_empty() {
            break 'search Outcome::Exhausted;
        }
        if observer.is_cancelled() {
            info!("search from {start} to {end} cancelled");
            break 'search Outcome::Cancelled;
        }
        let Some(Entry { priority, idx, .. }) = st.frontier.pop() else {
            break 'search Outcome::Exhausted;
        };

        // A better entry for this cell was pushed after this one.
        if priority > st.priority[idx] {
            stats.stale_skipped += 1;
            continue;
        }

        if idx == ei {
            path = reconstruct(grid, &st.parents, end)?;
            break 'search Outcome::Found;
        }

        let current_cost = st.cost[idx];
        let neighbors = *grid.cell_at(idx).neighbors();
        for ni in neighbors.iter() {
            if ni == si || grid.cell_at(ni).is_closed() {
                continue;
            }
            let tentative = current_cost + STEP_COST;
            if tentative >= st.cost[ni] {
                continue;
            }
            let f = tentative + estimate.estimate(grid.pos(ni), end);
            st.cost[ni] = tentative;
            st.priority[ni] = f;
            st.parents.set(ni, idx);
            st.frontier.push(f, ni);
            if ni != ei {
                grid.mark(ni, CellState::Open);
            }
        }

        if idx != si {
            grid.mark(idx, CellState::Closed);
        }
        stats.expanded += 1;
        trace!(
            "expanded {} (g={current_cost}, f={priority}), frontier {}",
            grid.pos(idx),
            st.frontier.len()
        );
        observer.on_step(grid);
    };

    stats.pushed = st.frontier.pushed();
    debug!(
        "search {start} -> {end}: {outcome:?}, path {} steps, {} expanded, {} pushed, {} stale",
        path.len(),
        stats.expanded,
        stats.pushed,
        stats.stale_skipped
    );
    Ok(SearchReport {
        outcome,
        path,
        stats,
    })
}
