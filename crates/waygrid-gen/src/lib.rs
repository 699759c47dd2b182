//! Random grid generation for *waygrid*.
//!
//! [`GridGen`] scatters walls over an empty grid and picks a start and a
//! target on cells that stayed empty, producing a [`Layout`] that satisfies
//! the usual invariants (one start, one target, neither on a wall).
//!
//! [`Layout`]: waygrid_core::Layout

pub mod mapgen;

pub use mapgen::{DEFAULT_WALL_RATIO, GenError, GridGen};
