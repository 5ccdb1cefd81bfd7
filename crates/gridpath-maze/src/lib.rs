//! Perfect-maze generation for [`gridpath_core::Grid`].
//!
//! [`MazeGen`] owns its random source so mazes can be reproduced from a
//! seed; [`generate_maze`] is the one-shot form on the thread RNG.

mod maze;

pub use maze::{MazeGen, MazeOutcome, generate_maze};
