//! **waygrid-search**: uninformed route search on 8-connected grids.
//!
//! A [`SearchEngine`] runs one of six strategies ([`Algorithm`]) from a
//! start node to a target node on a private copy of a
//! [`Grid`](waygrid_core::Grid). While it searches, an
//! [`ObstacleInjector`] may turn empty cells into dynamic walls, and a
//! [`ProgressSink`] receives periodic snapshots. A [`CancelToken`] stops a
//! run cooperatively between iterations.
//!
//! ```
//! use waygrid_core::Layout;
//! use waygrid_search::{Algorithm, NoopSink, SearchConfig, SearchEngine};
//!
//! let layout: Layout = "S..\n.#.\n..T".parse().unwrap();
//! let mut engine = SearchEngine::new(SearchConfig::headless(), NoopSink).unwrap();
//! let outcome = engine
//!     .run(Algorithm::Bfs, &layout.grid, layout.start, layout.target)
//!     .unwrap();
//! assert!(outcome.is_found());
//! assert_eq!(outcome.path.first(), Some(&layout.start));
//! assert_eq!(outcome.path.last(), Some(&layout.target));
//! ```

mod bfs;
mod bidir;
pub mod cancel;
pub mod config;
mod dfs;
mod dls;
pub mod engine;
pub mod error;
mod iddfs;
pub mod injector;
pub mod neighbors;
pub mod outcome;
pub mod reconstruct;
pub mod sink;
mod ucs;

pub use cancel::CancelToken;
pub use config::SearchConfig;
pub use engine::SearchEngine;
pub use error::SearchError;
pub use injector::ObstacleInjector;
pub use neighbors::{DIAGONAL_COST, Neighbors, STRAIGHT_COST, neighbors, path_cost, step_cost};
pub use outcome::{Algorithm, SearchOutcome, SearchStats, SearchStatus, UnknownAlgorithm};
pub use reconstruct::{Predecessors, reconstruct};
pub use sink::{LogSink, NoopSink, Paced, ProgressSink, RecordingSink, Report};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use std::time::Duration;
    use waygrid_core::Layout;

    #[test]
    fn config_round_trip() {
        let config = SearchConfig::default()
            .with_seed(7)
            .with_step_delay(Duration::from_millis(15));
        let json = serde_json::to_string(&config).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn outcome_serializes() {
        let layout = Layout::parse("S.T").unwrap();
        let mut engine = SearchEngine::new(SearchConfig::headless(), NoopSink).unwrap();
        let outcome = engine
            .run(Algorithm::Ucs, &layout.grid, layout.start, layout.target)
            .unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "Found");
        assert_eq!(json["stats"]["path_len"], 3);
    }
}
