//! Shortest-path search over a [`gridpath_core::Grid`].
//!
//! Both searches run the same lazy-deletion best-first loop over the grid's
//! precomputed neighbour lists, marking cells Open and Closed as they go and
//! the final path once the goal is reached:
//!
//! - **Dijkstra** uniform-cost search ([`run_uniform_cost`])
//! - **A\*** with a Euclidean estimate ([`run_heuristic_search`])
//! - **BFS** step counts from barrier flags ([`bfs_distances`]), for checks
//!   that must not disturb cell states
//!
//! Every run reports through an [`Observer`](gridpath_core::Observer), which
//! sees each expansion and may cancel between iterations.
//!
//! # Building blocks
//!
//! | Item | Role |
//! |---|---|
//! | [`Frontier`] | min-priority queue with FIFO tie-break |
//! | [`Estimate`] | remaining-cost estimate ordering the frontier |
//! | [`ParentMap`] / [`reconstruct`] | parent links and path marking |
//! | [`search_with`] | the shared loop, returning a [`SearchReport`] |

mod astar;
mod bfs;
mod dijkstra;
mod error;
mod estimate;
mod frontier;
mod reconstruct;
mod search;

pub use astar::run_heuristic_search;
pub use bfs::{bfs_distance, bfs_distances};
pub use dijkstra::run_uniform_cost;
pub use error::{Result, SearchError};
pub use estimate::{Estimate, Euclidean, Zero, heuristic};
pub use frontier::{Entry, Frontier};
pub use reconstruct::{ParentMap, reconstruct};
pub use search::{Outcome, SearchReport, SearchStats, search_with};
