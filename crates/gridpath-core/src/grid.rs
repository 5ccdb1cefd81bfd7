//! The [`Grid`] type: an index-based arena of [`Cell`]s.
//!
//! The grid exclusively owns its cells. Cells refer to their neighbours by
//! arena index, and those lists are recomputed from the barrier flags on
//! demand by [`Grid::refresh_neighbors`] instead of being kept in sync with
//! every edit.

use log::{debug, warn};

use crate::cell::{Cell, CellState};
use crate::error::{GridError, Result};
use crate::geom::{Bounds, Pos};
use crate::neighbors::Neighbors;

/// A square grid of cells with at most one start and one end cell.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Bounds,
    cell_extent: i32,
    start: Option<Pos>,
    end: Option<Pos>,
    neighbors_fresh: bool,
}

impl Grid {
    /// Create a `rows×rows` grid of open cells.
    ///
    /// `extent` is the on-screen size of the whole grid; `extent / rows` is
    /// kept as the per-cell scale for the visualization layer and plays no
    /// part in searching.
    pub fn new(rows: i32, extent: i32) -> Result<Self> {
        if rows <= 0 {
            return Err(GridError::EmptyGrid);
        }
        let bounds = Bounds::square(rows);
        Ok(Self {
            cells: vec![Cell::default(); bounds.len()],
            bounds,
            cell_extent: (extent / rows).max(1),
            start: None,
            end: None,
            neighbors_fresh: false,
        })
    }

    // -----------------------------------------------------------------------
    // Geometry
    // -----------------------------------------------------------------------

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows (equal to the number of columns).
    #[inline]
    pub fn side(&self) -> i32 {
        self.bounds.side()
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// On-screen size of one cell.
    #[inline]
    pub fn cell_extent(&self) -> i32 {
        self.cell_extent
    }

    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.bounds.contains(p)
    }

    /// Arena index of `p`.
    #[inline]
    pub fn index(&self, p: Pos) -> Option<usize> {
        self.bounds.index(p)
    }

    /// Position of an arena index.
    #[inline]
    pub fn pos(&self, idx: usize) -> Pos {
        self.bounds.pos(idx)
    }

    fn checked_index(&self, p: Pos) -> Result<usize> {
        self.index(p).ok_or(GridError::OutOfBounds(p))
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    #[inline]
    pub fn cell(&self, p: Pos) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Cell by arena index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn cell_at(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn state(&self, p: Pos) -> Option<CellState> {
        self.cell(p).map(|c| c.state)
    }

    /// Whether `p` is a barrier. Out-of-bounds positions are not.
    #[inline]
    pub fn is_barrier(&self, p: Pos) -> bool {
        self.cell(p).is_some_and(|c| c.barrier)
    }

    /// Set the logical state of the cell at arena index `idx`.
    ///
    /// This is the hook used by the search algorithms; it does not touch the
    /// tracked start/end positions.
    #[inline]
    pub fn mark(&mut self, idx: usize, state: CellState) {
        self.cells[idx].state = state;
    }

    /// Drop the barrier flag of the cell at arena index `idx`, leaving it
    /// open in the default state. Used by maze carving.
    #[inline]
    pub fn carve(&mut self, idx: usize) {
        let c = &mut self.cells[idx];
        c.barrier = false;
        c.state = CellState::Default;
        self.neighbors_fresh = false;
    }

    /// Row-major iterator over `(Pos, &Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter())
    }

    /// Count cells in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state == state).count()
    }

    pub fn count_barriers(&self) -> usize {
        self.cells.iter().filter(|c| c.barrier).count()
    }

    // -----------------------------------------------------------------------
    // Endpoints and editing
    // -----------------------------------------------------------------------

    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Pos> {
        self.end
    }

    /// Make `p` the start cell, demoting any previous start cell.
    pub fn set_start(&mut self, p: Pos) -> Result<()> {
        let i = self.checked_index(p)?;
        if self.cells[i].barrier {
            return Err(GridError::Barrier(p));
        }
        if self.end == Some(p) {
            return Err(GridError::IsEnd(p));
        }
        if let Some(old) = self.start.take().and_then(|s| self.index(s)) {
            self.cells[old].state = CellState::Default;
        }
        self.cells[i].state = CellState::Start;
        self.start = Some(p);
        Ok(())
    }

    /// Make `p` the end cell, demoting any previous end cell.
    pub fn set_end(&mut self, p: Pos) -> Result<()> {
        let i = self.checked_index(p)?;
        if self.cells[i].barrier {
            return Err(GridError::Barrier(p));
        }
        if self.start == Some(p) {
            return Err(GridError::IsStart(p));
        }
        if let Some(old) = self.end.take().and_then(|e| self.index(e)) {
            self.cells[old].state = CellState::Default;
        }
        self.cells[i].state = CellState::End;
        self.end = Some(p);
        Ok(())
    }

    /// Turn `p` into a barrier. Endpoints cannot be walled over.
    pub fn set_barrier(&mut self, p: Pos) -> Result<()> {
        let i = self.checked_index(p)?;
        if self.start == Some(p) {
            return Err(GridError::IsStart(p));
        }
        if self.end == Some(p) {
            return Err(GridError::IsEnd(p));
        }
        self.cells[i].barrier = true;
        self.cells[i].state = CellState::Default;
        self.neighbors_fresh = false;
        Ok(())
    }

    /// Return `p` to an open default cell, unsetting it as an endpoint.
    pub fn clear(&mut self, p: Pos) -> Result<()> {
        let i = self.checked_index(p)?;
        if self.cells[i].barrier {
            self.neighbors_fresh = false;
        }
        self.cells[i].barrier = false;
        self.cells[i].state = CellState::Default;
        if self.start == Some(p) {
            self.start = None;
        }
        if self.end == Some(p) {
            self.end = None;
        }
        Ok(())
    }

    /// Make every cell a barrier in the default state and unset both
    /// endpoints.
    pub fn fill_barriers(&mut self) {
        for c in &mut self.cells {
            c.reset();
            c.barrier = true;
        }
        self.start = None;
        self.end = None;
        self.neighbors_fresh = false;
    }

    // -----------------------------------------------------------------------
    // Neighbour graph and bulk reset
    // -----------------------------------------------------------------------

    /// Recompute every cell's neighbour list from the current barrier flags.
    ///
    /// Must be called before searching: barrier edits do not update existing
    /// lists.
    pub fn refresh_neighbors(&mut self) {
        let bounds = self.bounds;
        for idx in 0..self.cells.len() {
            let p = bounds.pos(idx);
            let cells = &self.cells;
            let n = Neighbors::compute(bounds, p, |i| cells[i].barrier);
            self.cells[idx].neighbors = n;
        }
        self.neighbors_fresh = true;
    }

    /// Whether neighbour lists reflect the current barriers.
    #[inline]
    pub fn neighbors_fresh(&self) -> bool {
        self.neighbors_fresh
    }

    /// Clear neighbour lists and states.
    ///
    /// Barrier cells keep their flag when `keep_barriers` is set; otherwise
    /// they are turned back into open cells too. Every neighbour list is
    /// emptied either way. Both endpoints are unset, and the
    /// cleared `(start, end)` pair is returned.
    pub fn reset(&mut self, keep_barriers: bool) -> (Option<Pos>, Option<Pos>) {
        for c in &mut self.cells {
            if c.barrier && keep_barriers {
                c.neighbors = Neighbors::EMPTY;
                continue;
            }
            c.reset();
            c.barrier = false;
        }
        self.start = None;
        self.end = None;
        self.neighbors_fresh = false;
        (None, None)
    }

    /// Reset search marks while keeping barriers and both endpoints, then
    /// refresh the neighbour graph.
    ///
    /// Returns the `(start, end)` pair ready to hand to a search.
    pub fn prepare_search(&mut self) -> Result<(Pos, Pos)> {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            warn!("search requested without both endpoints");
            return Err(GridError::MissingEndpoints);
        };
        self.reset(true);
        self.set_start(start)?;
        self.set_end(end)?;
        self.refresh_neighbors();
        debug!(
            "grid {} prepared: start {start}, end {end}, {} barriers",
            self.bounds,
            self.count_barriers()
        );
        Ok((start, end))
    }
}
