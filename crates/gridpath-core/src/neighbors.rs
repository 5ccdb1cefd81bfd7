use crate::geom::{Bounds, Pos};

/// Fixed-capacity list of up to four orthogonal neighbour indices.
///
/// Indices point into the owning grid's cell arena. The list is a snapshot:
/// it is only meaningful right after [`Grid::refresh_neighbors`] and is not
/// updated when barriers change.
///
/// [`Grid::refresh_neighbors`]: crate::Grid::refresh_neighbors
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Neighbors {
    idx: [usize; 4],
    len: u8,
}

impl Neighbors {
    /// An empty list.
    pub const EMPTY: Self = Self {
        idx: [0; 4],
        len: 0,
    };

    /// Compute the open orthogonal neighbours of `p`.
    ///
    /// Out-of-bounds positions and positions for which `blocked` returns
    /// `true` are skipped. Discovery order follows [`Pos::neighbors_4`].
    pub fn compute(bounds: Bounds, p: Pos, blocked: impl Fn(usize) -> bool) -> Self {
        let mut out = Self::EMPTY;
        for n in p.neighbors_4() {
            let Some(i) = bounds.index(n) else {
                continue;
            };
            if blocked(i) {
                continue;
            }
            out.idx[out.len as usize] = i;
            out.len += 1;
        }
        out
    }

    /// Number of neighbours.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Neighbour indices in discovery order.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.idx[..self.len as usize]
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.as_slice().iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_two() {
        let b = Bounds::square(3);
        let n = Neighbors::compute(b, Pos::new(0, 0), |_| false);
        // down (1,0) then right (0,1)
        assert_eq!(n.as_slice(), &[3, 1]);
    }

    #[test]
    fn center_has_four_in_order() {
        let b = Bounds::square(3);
        let n = Neighbors::compute(b, Pos::new(1, 1), |_| false);
        assert_eq!(n.as_slice(), &[7, 1, 5, 3]);
    }

    #[test]
    fn blocked_are_skipped() {
        let b = Bounds::square(3);
        let n = Neighbors::compute(b, Pos::new(1, 1), |i| i == 7 || i == 3);
        assert_eq!(n.as_slice(), &[1, 5]);
        assert_eq!(n.len(), 2);
    }

    #[test]
    fn single_cell_grid_has_none() {
        let n = Neighbors::compute(Bounds::square(1), Pos::ZERO, |_| false);
        assert!(n.is_empty());
    }
}
