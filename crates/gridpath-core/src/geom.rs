//! Geometry primitives: [`Pos`] and [`Bounds`].
//!
//! Rows grow downward and columns grow to the right. A [`Bounds`] is always a
//! square `N×N` area anchored at the origin, and owns the mapping between
//! positions and flat arena indices (`row * N + col`).

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A cell identity on the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The four orthogonal neighbours in discovery order: down, up, right,
    /// left.
    ///
    /// Neighbour lists are built in this order, so it also fixes the order in
    /// which equal-priority cells enter the frontier.
    #[inline]
    pub const fn neighbors_4(self) -> [Pos; 4] {
        [
            self.shift(1, 0),
            self.shift(-1, 0),
            self.shift(0, 1),
            self.shift(0, -1),
        ]
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Pos {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Pos {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The square area `[0, side) × [0, side)` covered by a grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    side: i32,
}

impl Bounds {
    /// Bounds of an `side×side` grid. Negative sides are clamped to zero.
    #[inline]
    pub const fn square(side: i32) -> Self {
        Self {
            side: if side < 0 { 0 } else { side },
        }
    }

    /// Number of rows (and columns).
    #[inline]
    pub const fn side(self) -> i32 {
        self.side
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        (self.side as usize) * (self.side as usize)
    }

    /// Whether the area has no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.side == 0
    }

    /// Whether `p` lies inside the area.
    #[inline]
    pub const fn contains(self, p: Pos) -> bool {
        p.row >= 0 && p.row < self.side && p.col >= 0 && p.col < self.side
    }

    /// Flat arena index of `p`, or `None` when out of bounds.
    #[inline]
    pub fn index(self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.side as usize + p.col as usize)
    }

    /// Position of a flat arena index.
    #[inline]
    pub fn pos(self, idx: usize) -> Pos {
        let side = self.side.max(1) as usize;
        Pos::new((idx / side) as i32, (idx % side) as i32)
    }

    /// Row-major iterator over every position.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Pos;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.side, self.side)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the positions in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = Pos;

    #[inline]
    fn next(&mut self) -> Option<Pos> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let p = self.bounds.pos(self.next);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bounds.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundsIter {}
