use gridpath_core::{CellState, Grid, Pos};

use crate::error::{Result, SearchError};

/// Parent links recorded during a search, indexed by arena index.
///
/// The source cell has no parent.
#[derive(Debug, Clone)]
pub struct ParentMap {
    links: Vec<Option<usize>>,
}

impl ParentMap {
    /// An empty map for a grid of `len` cells.
    pub fn new(len: usize) -> Self {
        Self {
            links: vec![None; len],
        }
    }

    /// Record `parent` as the predecessor of `child` (arena indices).
    #[inline]
    pub fn set(&mut self, child: usize, parent: usize) {
        self.links[child] = Some(parent);
    }

    #[inline]
    pub fn get(&self, child: usize) -> Option<usize> {
        self.links.get(child).copied().flatten()
    }

    /// Record a link by position.
    pub fn link(&mut self, grid: &Grid, child: Pos, parent: Pos) -> Result<()> {
        let c = grid.index(child).ok_or(SearchError::OutOfBounds(child))?;
        let p = grid.index(parent).ok_or(SearchError::OutOfBounds(parent))?;
        self.set(c, p);
        Ok(())
    }
}

/// Mark the recorded path ending at `end`.
///
/// Walks parent links back from `end`, marking every cell that has a parent
/// as [`CellState::Path`], and stops at the first cell without one (the
/// start, which is left untouched). `end` is then re-marked as
/// [`CellState::End`]. Returns the marked cells from `end` backwards; its
/// length is the number of steps on the path.
///
/// A cycle in `parents` is reported as [`SearchError::ParentCycle`]; cells
/// marked before the cycle was detected keep their marks.
pub fn reconstruct(grid: &mut Grid, parents: &ParentMap, end: Pos) -> Result<Vec<Pos>> {
    let end_idx = grid.index(end).ok_or(SearchError::OutOfBounds(end))?;
    let mut path = Vec::new();
    let mut cur = end_idx;
    while let Some(parent) = parents.get(cur) {
        if path.len() >= grid.len() {
            return Err(SearchError::ParentCycle);
        }
        grid.mark(cur, CellState::Path);
        path.push(grid.pos(cur));
        cur = parent;
    }
    grid.mark(end_idx, CellState::End);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_exactly_the_recorded_path() {
        let mut g = Grid::from_layout(
            "
            S...
            ....
            ....
            ...E
            ",
        )
        .unwrap();
        let mut parents = ParentMap::new(g.len());
        // S(0,0) -> (0,1) -> (1,1) -> (2,1) -> (2,2) -> (3,2) -> E(3,3)
        let chain = [
            Pos::new(0, 0),
            Pos::new(0, 1),
            Pos::new(1, 1),
            Pos::new(2, 1),
            Pos::new(2, 2),
            Pos::new(3, 2),
            Pos::new(3, 3),
        ];
        for w in chain.windows(2) {
            parents.link(&g, w[1], w[0]).unwrap();
        }
        // An unrelated link must not be followed.
        parents.link(&g, Pos::new(0, 3), Pos::new(0, 2)).unwrap();

        let path = reconstruct(&mut g, &parents, Pos::new(3, 3)).unwrap();
        assert_eq!(path.len(), 6);
        assert_eq!(path[0], Pos::new(3, 3));
        assert_eq!(*path.last().unwrap(), Pos::new(0, 1));
        assert_eq!(
            g.to_layout(),
            "\
S*..
.*..
.**.
..*E"
        );
        assert_eq!(g.state(Pos::new(0, 0)), Some(CellState::Start));
    }

    #[test]
    fn end_without_parent_only_marks_end() {
        let mut g = Grid::from_layout("S.\n.E").unwrap();
        let parents = ParentMap::new(g.len());
        let path = reconstruct(&mut g, &parents, Pos::new(1, 1)).unwrap();
        assert!(path.is_empty());
        assert_eq!(g.state(Pos::new(1, 1)), Some(CellState::End));
    }

    #[test]
    fn cycle_is_reported() {
        let mut g = Grid::from_layout("S.\n.E").unwrap();
        let mut parents = ParentMap::new(g.len());
        parents.set(3, 1);
        parents.set(1, 3);
        assert_eq!(
            reconstruct(&mut g, &parents, Pos::new(1, 1)),
            Err(SearchError::ParentCycle)
        );
    }

    #[test]
    fn out_of_bounds_end() {
        let mut g = Grid::from_layout("S.\n.E").unwrap();
        let parents = ParentMap::new(g.len());
        assert_eq!(
            reconstruct(&mut g, &parents, Pos::new(2, 0)),
            Err(SearchError::OutOfBounds(Pos::new(2, 0)))
        );
    }
}
