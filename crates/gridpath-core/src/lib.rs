//! **gridpath-core**: the grid model searched by `gridpath-search` and
//! carved by `gridpath-maze`.
//!
//! A [`Grid`] is a square arena of [`Cell`]s addressed by [`Pos`]. Each cell
//! carries a barrier flag, a logical [`CellState`], and a snapshot of its open
//! orthogonal [`Neighbors`], rebuilt by [`Grid::refresh_neighbors`].
//! Long-running algorithms report progress through an [`Observer`].

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
mod layout;
pub mod neighbors;
pub mod observer;

pub use cell::{Cell, CellState};
pub use error::GridError;
pub use geom::{Bounds, Pos};
pub use grid::Grid;
pub use neighbors::Neighbors;
pub use observer::{NoopObserver, Observer, StepLimit};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pos_round_trip() {
        let p = Pos::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Pos = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn cell_round_trip_drops_neighbors() {
        let mut g = Grid::from_layout("S.\n.E").unwrap();
        g.refresh_neighbors();
        let c = *g.cell(Pos::new(0, 0)).unwrap();
        assert!(!c.neighbors().is_empty());
        let json = serde_json::to_string(&c).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(back.state, CellState::Start);
        assert!(!back.barrier);
        assert!(back.neighbors().is_empty());
    }
}
