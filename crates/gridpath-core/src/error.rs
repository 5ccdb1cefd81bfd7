use thiserror::Error;

use crate::geom::Pos;

/// Rejected grid construction or edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least one row")]
    EmptyGrid,
    #[error("position {0} is outside the grid")]
    OutOfBounds(Pos),
    #[error("cell {0} is a barrier")]
    Barrier(Pos),
    #[error("cell {0} is already the start cell")]
    IsStart(Pos),
    #[error("cell {0} is already the end cell")]
    IsEnd(Pos),
    #[error("both a start and an end cell are required")]
    MissingEndpoints,
    #[error("layout must be square, got {rows} rows of width {cols}")]
    NotSquare { rows: i32, cols: i32 },
    #[error("invalid layout character {ch:?} at {pos}")]
    InvalidChar { ch: char, pos: Pos },
}

pub type Result<T> = std::result::Result<T, GridError>;
