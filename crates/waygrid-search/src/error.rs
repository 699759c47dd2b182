use thiserror::Error;
use waygrid_core::{CellState, GridError, Node};

/// Errors that prevent a search from running at all.
///
/// Running out of frontier or being cancelled are not errors; they are
/// reported through [`SearchStatus`](crate::SearchStatus).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// Grid access failed, e.g. an endpoint outside the grid.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// The start or the target sits on an obstacle.
    #[error("endpoint {node} is blocked by {state:?}")]
    BlockedEndpoint { node: Node, state: CellState },

    /// A configuration value is unusable.
    #[error("invalid configuration for {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}
