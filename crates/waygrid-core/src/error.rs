use thiserror::Error;

use crate::cell::CellState;
use crate::geom::{Bounds, Node};

/// Errors raised by grid access and layout parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Access outside the configured dimensions.
    #[error("node {node} is out of bounds for a {bounds} grid")]
    OutOfBounds { node: Node, bounds: Bounds },

    /// Layout lines have different widths.
    #[error("layout line {line} has width {found}, expected {expected}")]
    InconsistentSize {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A character that does not name any cell state.
    #[error("layout contains invalid glyph \u{201c}{ch}\u{201d} at {node}")]
    InvalidGlyph { ch: char, node: Node },

    /// The layout lacks a start or a target cell.
    #[error("layout has no {0:?} cell")]
    MissingEndpoint(CellState),

    /// The layout holds more than one start or target cell.
    #[error("layout has a second {state:?} cell at {second} (first at {first})")]
    DuplicateEndpoint {
        state: CellState,
        first: Node,
        second: Node,
    },

    /// The layout has no cells at all.
    #[error("layout is empty")]
    Empty,
}
