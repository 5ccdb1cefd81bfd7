//! The [`Cell`] type and its logical [`CellState`].

use crate::neighbors::Neighbors;

/// Logical state of a cell during editing and search.
///
/// This is purely logical: how a state looks on screen is decided by the
/// visualization layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Default,
    /// Discovered, waiting in the frontier.
    Open,
    /// Settled; its cost is final.
    Closed,
    Start,
    End,
    /// On the reconstructed shortest path.
    Path,
}

/// A single grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub barrier: bool,
    pub state: CellState,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) neighbors: Neighbors,
}

impl Cell {
    /// Set the barrier flag (builder).
    #[inline]
    pub const fn with_barrier(mut self, barrier: bool) -> Self {
        self.barrier = barrier;
        self
    }

    /// Set the state (builder).
    #[inline]
    pub const fn with_state(mut self, state: CellState) -> Self {
        self.state = state;
        self
    }

    /// Neighbour snapshot taken at the last refresh.
    #[inline]
    pub fn neighbors(&self) -> &Neighbors {
        &self.neighbors
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.state == CellState::Closed
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state == CellState::Open
    }

    #[inline]
    pub fn is_path(&self) -> bool {
        self.state == CellState::Path
    }

    /// Clear the neighbour snapshot and return to the default state.
    /// The barrier flag is left untouched.
    #[inline]
    pub(crate) fn reset(&mut self) {
        self.neighbors = Neighbors::EMPTY;
        self.state = CellState::Default;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_open_floor() {
        let c = Cell::default();
        assert!(!c.barrier);
        assert_eq!(c.state, CellState::Default);
        assert!(c.neighbors().is_empty());
    }

    #[test]
    fn builders_and_predicates() {
        let c = Cell::default().with_state(CellState::Closed);
        assert!(c.is_closed());
        assert!(!c.is_open());
        let c = c.with_state(CellState::Path).with_barrier(true);
        assert!(c.is_path());
        assert!(c.barrier);
    }

    #[test]
    fn reset_keeps_barrier_flag() {
        let mut c = Cell::default()
            .with_barrier(true)
            .with_state(CellState::Open);
        c.reset();
        assert!(c.barrier);
        assert_eq!(c.state, CellState::Default);
    }
}
