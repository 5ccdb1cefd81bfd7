use std::collections::VecDeque;

use gridpath_core::{Grid, Neighbors, Pos};

/// Breadth-first step counts from `source` to every cell.
///
/// Works from barrier flags directly, so it neither needs fresh neighbour
/// lists nor touches cell states. Barrier cells and cells cut off from
/// `source` are `None`. A barrier or out-of-range source reaches nothing.
pub fn bfs_distances(grid: &Grid, source: Pos) -> Vec<Option<u32>> {
    let mut dist = vec![None; grid.len()];
    let Some(si) = grid.index(source) else {
        return dist;
    };
    if grid.cell_at(si).barrier {
        return dist;
    }

    let bounds = grid.bounds();
    let blocked = |i: usize| grid.cell_at(i).barrier;
    let mut queue = VecDeque::new();
    dist[si] = Some(0);
    queue.push_back(si);

    while let Some(ci) = queue.pop_front() {
        let Some(d) = dist[ci] else {
            continue;
        };
        for ni in Neighbors::compute(bounds, grid.pos(ci), blocked).iter() {
            if dist[ni].is_none() {
                dist[ni] = Some(d + 1);
                queue.push_back(ni);
            }
        }
    }
    dist
}

/// Fewest steps between two cells, or `None` when `to` is unreachable.
pub fn bfs_distance(grid: &Grid, from: Pos, to: Pos) -> Option<u32> {
    let ti = grid.index(to)?;
    bfs_distances(grid, from)[ti]
}
