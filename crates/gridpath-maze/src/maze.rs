//! Randomized depth-first maze carving.
//!
//! The grid is first walled over completely. Carving starts at `(0, 0)` and
//! walks an explicit stack: each popped cell schedules its unscheduled
//! orthogonal neighbours, is carved open, and pushes them back with one
//! randomly chosen neighbour on top so it is visited next. Neighbours that
//! were not picked keep their discovery order underneath.
//!
//! A popped cell that already touches more than one carved cell is left as a
//! wall, so every carving joins exactly one new cell to the tree and the open
//! cells never form a loop.

use log::{debug, info};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use gridpath_core::{Grid, Neighbors, Observer, Pos};

/// How a maze run ended.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeOutcome {
    /// The stack emptied; the carved cells form a spanning tree.
    Completed,
    /// The observer requested cancellation. The grid holds whatever was
    /// carved so far, which is still a tree.
    Cancelled,
}

/// Maze generator owning its random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl MazeGen<StdRng> {
    /// A generator whose mazes are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeGen<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Wall over `grid` and carve a maze rooted at `(0, 0)`.
    ///
    /// Cancellation is polled before every pop and `on_step` fires after
    /// every pop, carved or not. Start and end are unset; neighbour lists are
    /// left stale.
    pub fn generate<O>(&mut self, grid: &mut Grid, observer: &mut O) -> MazeOutcome
    where
        O: Observer + ?Sized,
    {
        grid.fill_barriers();
        let bounds = grid.bounds();
        let Some(root) = grid.index(Pos::ZERO) else {
            return MazeOutcome::Completed;
        };

        let mut scheduled = vec![false; grid.len()];
        scheduled[root] = true;
        let mut stack = vec![root];
        let mut carved = 0usize;
        let mut popped = 0usize;

        let outcome = loop {
            if observer.is_cancelled() {
                info!("maze generation cancelled after {popped} steps");
                break MazeOutcome::Cancelled;
            }
            let Some(cur) = stack.pop() else {
                break MazeOutcome::Completed;
            };
            popped += 1;
            if self.visit(grid, cur, &mut scheduled, &mut stack) {
                carved += 1;
            }
            observer.on_step(grid);
        };

        debug!(
            "maze {bounds}: {outcome:?}, {carved} carved, {} walls left",
            grid.count_barriers()
        );
        outcome
    }

    /// Process one popped cell. Returns whether it was carved.
    fn visit(
        &mut self,
        grid: &mut Grid,
        cur: usize,
        scheduled: &mut [bool],
        stack: &mut Vec<usize>,
    ) -> bool {
        let bounds = grid.bounds();
        let p = grid.pos(cur);

        let open = Neighbors::compute(bounds, p, |i| grid.cell_at(i).barrier);
        if open.len() > 1 {
            return false;
        }

        let found = Neighbors::compute(bounds, p, |i| scheduled[i]);
        if found.is_empty() {
            return false;
        }
        for i in found.iter() {
            scheduled[i] = true;
        }

        grid.carve(cur);
        let pick = self.rng.random_range(0..found.len());
        let cells = found.as_slice();
        stack.extend(
            cells
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != pick)
                .map(|(_, &i)| i),
        );
        stack.push(cells[pick]);
        true
    }
}

/// Carve a maze into `grid` using the thread-local random source.
pub fn generate_maze<O>(grid: &mut Grid, observer: &mut O) -> MazeOutcome
where
    O: Observer + ?Sized,
{
    MazeGen::with_rng(rand::rng()).generate(grid, observer)
}

#[cfg(test)]
mod tests {
    use gridpath_core::{NoopObserver, StepLimit};

    use super::*;

    #[test]
    fn single_cell_grid_carves_nothing() {
        let mut g = Grid::new(1, 1).unwrap();
        let out = MazeGen::seeded(1).generate(&mut g, &mut NoopObserver);
        assert_eq!(out, MazeOutcome::Completed);
        assert_eq!(g.count_barriers(), 1);
    }

    #[test]
    fn root_is_carved() {
        for seed in 0..8 {
            let mut g = Grid::new(6, 6).unwrap();
            let out = MazeGen::seeded(seed).generate(&mut g, &mut NoopObserver);
            assert_eq!(out, MazeOutcome::Completed);
            assert!(!g.is_barrier(Pos::ZERO));
        }
    }

    #[test]
    fn two_by_two_opens_an_l() {
        // The root finds (1,0) and (0,1); whichever is picked is carved next
        // and the other becomes a dead end.
        let mut g = Grid::new(2, 2).unwrap();
        let out = MazeGen::seeded(7).generate(&mut g, &mut NoopObserver);
        assert_eq!(out, MazeOutcome::Completed);
        assert!(!g.is_barrier(Pos::new(0, 0)));
        assert!(g.is_barrier(Pos::new(1, 1)));
        assert_eq!(g.len() - g.count_barriers(), 2);
    }

    #[test]
    fn same_seed_same_maze() {
        let mut a = Grid::new(12, 12).unwrap();
        let mut b = Grid::new(12, 12).unwrap();
        let _ = MazeGen::seeded(42).generate(&mut a, &mut NoopObserver);
        let _ = MazeGen::seeded(42).generate(&mut b, &mut NoopObserver);
        assert_eq!(a.to_layout(), b.to_layout());
    }

    #[test]
    fn clears_endpoints_and_old_walls() {
        let mut g = Grid::from_layout("S.#\n.#.\n..E").unwrap();
        g.refresh_neighbors();
        let _ = MazeGen::seeded(3).generate(&mut g, &mut NoopObserver);
        assert_eq!(g.start(), None);
        assert_eq!(g.end(), None);
        assert!(!g.neighbors_fresh());
    }

    #[test]
    fn cancellation_stops_early() {
        let mut g = Grid::new(10, 10).unwrap();
        let mut limit = StepLimit::new(4);
        let out = MazeGen::seeded(9).generate(&mut g, &mut limit);
        assert_eq!(out, MazeOutcome::Cancelled);
        assert_eq!(limit.steps(), 4);
        assert!(g.len() - g.count_barriers() <= 4);
    }

    #[test]
    fn steps_once_per_pop() {
        let mut g = Grid::new(5, 5).unwrap();
        let mut steps = 0;
        let out = MazeGen::seeded(11).generate(&mut g, &mut (|_: &Grid| steps += 1, || false));
        assert_eq!(out, MazeOutcome::Completed);
        // A cell is pushed at most once, and the last cell popped from each
        // branch is a dead end that stays a wall.
        let carved = g.len() - g.count_barriers();
        assert!(steps <= g.len());
        assert!(steps > carved);
    }
}
