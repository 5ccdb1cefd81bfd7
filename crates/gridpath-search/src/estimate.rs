use gridpath_core::Pos;

/// Remaining-cost estimate that orders the frontier.
///
/// The frontier priority of a cell is `g + estimate(cell, goal)`. To keep
/// paths optimal the estimate must never exceed the true number of steps
/// left (admissible).
pub trait Estimate {
    fn estimate(&self, from: Pos, to: Pos) -> f64;
}

/// No estimate at all: plain uniform-cost (Dijkstra) ordering.
#[derive(Debug, Default, Clone, Copy)]
pub struct Zero;

impl Estimate for Zero {
    #[inline]
    fn estimate(&self, _from: Pos, _to: Pos) -> f64 {
        0.0
    }
}

/// Straight-line distance, see [`heuristic`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Euclidean;

impl Estimate for Euclidean {
    #[inline]
    fn estimate(&self, from: Pos, to: Pos) -> f64 {
        heuristic(from, to)
    }
}

/// Euclidean distance between two cells' grid coordinates.
///
/// Admissible on a 4-connected unit-cost grid: a path needs at least
/// `|dr| + |dc|` steps, which is never less than `sqrt(dr² + dc²)`.
#[inline]
pub fn heuristic(a: Pos, b: Pos) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    (dr * dr + dc * dc).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_four_five() {
        assert_eq!(heuristic(Pos::new(0, 0), Pos::new(3, 4)), 5.0);
    }

    #[test]
    fn symmetric_and_zero_on_self() {
        let a = Pos::new(2, 9);
        let b = Pos::new(7, 1);
        assert_eq!(heuristic(a, b), heuristic(b, a));
        assert_eq!(heuristic(a, a), 0.0);
    }

    #[test]
    fn never_exceeds_manhattan_steps() {
        let origin = Pos::new(5, 5);
        for r in 0..11 {
            for c in 0..11 {
                let p = Pos::new(r, c);
                let steps = f64::from((r - 5).abs() + (c - 5).abs());
                assert!(Euclidean.estimate(p, origin) <= steps);
            }
        }
    }

    #[test]
    fn zero_is_zero() {
        assert_eq!(Zero.estimate(Pos::new(0, 0), Pos::new(9, 9)), 0.0);
    }
}
