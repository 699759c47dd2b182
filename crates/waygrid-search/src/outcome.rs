use std::fmt;
use std::str::FromStr;

use waygrid_core::{Grid, Node};

/// The six search strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Ucs,
    Dls,
    Iddfs,
    Bidirectional,
}

impl Algorithm {
    /// Every algorithm, in presentation order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Ucs,
        Algorithm::Dls,
        Algorithm::Iddfs,
        Algorithm::Bidirectional,
    ];

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Ucs => "UCS",
            Algorithm::Dls => "DLS",
            Algorithm::Iddfs => "IDDFS",
            Algorithm::Bidirectional => "Bidirectional",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an algorithm name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm \u{201c}{0}\u{201d} (expected bfs, dfs, ucs, dls, iddfs or bidir)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "ucs" => Ok(Algorithm::Ucs),
            "dls" => Ok(Algorithm::Dls),
            "iddfs" => Ok(Algorithm::Iddfs),
            "bidir" | "bidirectional" => Ok(Algorithm::Bidirectional),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// How a run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// A route from start to target was found.
    Found,
    /// The frontier or iteration bound ran out first.
    NotFound,
    /// The cancellation token was tripped.
    Cancelled,
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchStatus::Found => "path found",
            SearchStatus::NotFound => "no path",
            SearchStatus::Cancelled => "cancelled",
        })
    }
}

/// Counters collected during a run.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Main-loop iterations that expanded (or tested) a node.
    pub steps: usize,
    /// Nodes marked explored.
    pub explored: usize,
    /// Nodes on the returned path.
    pub path_len: usize,
    /// Total path cost (uniform-cost search only).
    pub cost: Option<f64>,
    /// Depth bound in effect (DLS) or reached (IDDFS).
    pub depth: Option<usize>,
    /// Dynamic walls spawned during the run.
    pub dynamic_walls: usize,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "steps {} | explored {} | path {}",
            self.steps, self.explored, self.path_len
        )?;
        if let Some(cost) = self.cost {
            write!(f, " | cost {cost:.3}")?;
        }
        if let Some(depth) = self.depth {
            write!(f, " | depth {depth}")?;
        }
        write!(f, " | dynamic walls {}", self.dynamic_walls)
    }
}

/// Everything a run produces.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    pub algorithm: Algorithm,
    pub status: SearchStatus,
    /// Start → target inclusive; empty unless `status` is `Found`.
    pub path: Vec<Node>,
    pub stats: SearchStats,
    /// The run's private grid, with search annotations and the path painted.
    pub grid: Grid,
}

impl SearchOutcome {
    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }
}
