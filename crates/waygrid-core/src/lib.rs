//! **waygrid-core**: grid model shared by the waygrid search crates.
//!
//! This crate provides the foundational types used across the *waygrid*
//! workspace: geometry primitives, typed cell states, a bounds-checked
//! value-semantics grid, and ASCII layouts with a start and a target.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;

pub use cell::CellState;
pub use error::GridError;
pub use geom::{Bounds, DIRECTIONS, Node};
pub use grid::{DEFAULT_SIZE, Grid};
pub use layout::Layout;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn layout_round_trip() {
        let layout = Layout::parse("S.#\n.XT").unwrap();
        let json = serde_json::to_string(&layout).unwrap();
        let back: Layout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, layout);
    }
}
