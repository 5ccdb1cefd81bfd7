//! gridpath: draw walls on a grid, then watch Dijkstra or A* find the
//! shortest way from start to end, or carve a maze and search that.

pub mod config;
pub mod model;
pub mod render;

pub use config::{Algorithm, Cli, Config};
pub use model::{Status, Visualizer};
pub use render::Layout;
