use thiserror::Error;

use gridpath_core::Pos;

/// A search was started in violation of its preconditions.
///
/// These are contract violations by the caller, not search results: running
/// out of frontier or being cancelled are reported through
/// [`Outcome`](crate::Outcome) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("start and end must be different cells")]
    SameEndpoints,
    #[error("position {0} is outside the grid")]
    OutOfBounds(Pos),
    #[error("cell {0} is a barrier")]
    Barrier(Pos),
    #[error("neighbor lists are stale; refresh them before searching")]
    StaleNeighbors,
    #[error("parent links form a cycle")]
    ParentCycle,
}

pub type Result<T> = std::result::Result<T, SearchError>;
