use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use rand::Rng;
use waygrid_core::{Grid, Node};

use crate::engine::{SearchEngine, mark_explored, mark_frontier};
use crate::error::SearchError;
use crate::neighbors::{Neighbors, STRAIGHT_COST, step_cost};
use crate::outcome::{Algorithm, SearchOutcome, SearchStats, SearchStatus};
use crate::reconstruct::{Predecessors, reconstruct};
use crate::sink::ProgressSink;

/// Priority-queue entry, ordered so that `BinaryHeap` (a max-heap) pops the
/// cheapest entry first, oldest first among equal costs.
#[derive(Clone, Copy, Debug)]
struct Entry {
    cost: f64,
    seq: u64,
    node: Node,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Cost of the cheapest queued entry other than `skip`, ignoring closed
/// nodes. Infinite when nothing else is queued.
fn cheapest_open(open: &BinaryHeap<Entry>, closed: &HashSet<Node>, skip: Node) -> f64 {
    open.iter()
        .filter(|e| e.node != skip && !closed.contains(&e.node))
        .map(|e| e.cost)
        .fold(f64::INFINITY, f64::min)
}

impl<S: ProgressSink, R: Rng> SearchEngine<S, R> {
    /// Uniform-cost search.
    ///
    /// Straight moves cost 1, diagonal moves √2. A cheaper route to a
    /// queued node pushes a fresh entry; outdated entries are dropped when
    /// popped. The reported cost is the least cost to the target.
    ///
    /// Once the target has a tentative cost `c`, the run also ends after an
    /// expansion if `c <= m + 1`, where `m` is the cheapest other open
    /// entry: any other route leaves through an open node and takes at
    /// least one more straight step.
    pub fn ucs(
        &mut self,
        grid: &Grid,
        start: Node,
        target: Node,
    ) -> Result<SearchOutcome, SearchError> {
        let mut grid = self.prepare(grid, start, target)?;
        let mut stats = SearchStats::default();
        let mut open = BinaryHeap::from([Entry {
            cost: 0.0,
            seq: 0,
            node: start,
        }]);
        let mut seq = 0u64;
        let mut best: HashMap<Node, f64> = HashMap::from([(start, 0.0)]);
        let mut closed = HashSet::new();
        let mut preds = Predecessors::from([(start, None)]);
        let mut nbuf = Neighbors::new();

        let status = loop {
            if self.is_cancelled() {
                break SearchStatus::Cancelled;
            }
            let Some(Entry { cost, node, .. }) = open.pop() else {
                break SearchStatus::NotFound;
            };
            // Skip stale entries.
            if closed.contains(&node) || best.get(&node).is_some_and(|&b| cost > b) {
                continue;
            }
            closed.insert(node);
            stats.steps += 1;
            self.spawn(&mut grid, start, target, &mut stats);
            if node == target {
                stats.cost = Some(cost);
                break SearchStatus::Found;
            }

            mark_explored(&mut grid, node);
            stats.explored += 1;

            for &next in nbuf.passable(&grid, node) {
                if closed.contains(&next) {
                    continue;
                }
                let tentative = cost + step_cost(node, next);
                if best.get(&next).is_some_and(|&b| tentative >= b) {
                    continue;
                }
                best.insert(next, tentative);
                preds.insert(next, Some(node));
                mark_frontier(&mut grid, next);
                seq += 1;
                open.push(Entry {
                    cost: tentative,
                    seq,
                    node: next,
                });
            }

            if let Some(&found) = best.get(&target) {
                if found <= cheapest_open(&open, &closed, target) + STRAIGHT_COST {
                    stats.cost = Some(found);
                    break SearchStatus::Found;
                }
            }

            self.progress(Algorithm::Ucs, &grid, &stats, open.len());
        };

        let path = match status {
            SearchStatus::Found => reconstruct(&preds, start, target),
            _ => Vec::new(),
        };
        Ok(self.conclude(Algorithm::Ucs, grid, status, path, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SearchConfig, neighbors::path_cost, sink::NoopSink};
    use std::f64::consts::SQRT_2;
    use waygrid_core::Layout;

    fn engine() -> SearchEngine<NoopSink> {
        SearchEngine::new(SearchConfig::headless(), NoopSink).unwrap()
    }

    #[test]
    fn entries_pop_cheapest_then_oldest() {
        let n = Node::ZERO;
        let mut heap = BinaryHeap::new();
        heap.push(Entry { cost: 2.0, seq: 1, node: n });
        heap.push(Entry { cost: 1.0, seq: 3, node: n });
        heap.push(Entry { cost: 1.0, seq: 2, node: n });
        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|e| e.seq).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn diagonal_route_costs_four_root_two() {
        let l = Layout::parse(
            "
            S....
            .....
            .....
            .....
            ....T",
        )
        .unwrap();
        let out = engine().ucs(&l.grid, l.start, l.target).unwrap();
        let diag: Vec<_> = (0..5).map(|i| Node::new(i, i)).collect();
        assert_eq!(out.path, diag);
        let cost = out.stats.cost.unwrap();
        assert!((cost - 4.0 * SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn prefers_cheaper_over_fewer_moves() {
        // Two moves via the diagonal cost 2√2 ≈ 2.83; going straight along
        // the open row costs 2. Both reach (0, 2).
        let l = Layout::parse(
            "
            S.T
            ...",
        )
        .unwrap();
        let out = engine().ucs(&l.grid, l.start, l.target).unwrap();
        assert_eq!(out.path, vec![l.start, Node::new(0, 1), l.target]);
        assert_eq!(out.stats.cost, Some(2.0));
    }

    #[test]
    fn adjacent_diagonal_target_ends_first_expansion() {
        let l = Layout::parse("S..\n.T.\n...").unwrap();
        let out = engine().ucs(&l.grid, l.start, l.target).unwrap();
        assert_eq!(out.path, vec![l.start, l.target]);
        assert_eq!(out.stats.steps, 1);
        assert_eq!(out.stats.cost, Some(SQRT_2));
    }

    #[test]
    fn dearer_first_sighting_is_not_accepted() {
        // The target is first reached at 1 + 4√2 ≈ 6.66 while an open node
        // could still lead to it for 5 + √2 ≈ 6.41.
        let l = Layout::parse(
            "
            S#...
            ..#.#
            .##.#
            ....T",
        )
        .unwrap();
        let out = engine().ucs(&l.grid, l.start, l.target).unwrap();
        let cost = out.stats.cost.unwrap();
        assert!((cost - (5.0 + SQRT_2)).abs() < 1e-9, "{cost}");
        assert!((path_cost(&out.path) - cost).abs() < 1e-9);
    }

    #[test]
    fn cheapest_open_skips_target_and_closed() {
        let (a, b, t) = (Node::new(0, 0), Node::new(0, 1), Node::new(0, 2));
        let open = BinaryHeap::from([
            Entry { cost: 0.5, seq: 1, node: t },
            Entry { cost: 1.0, seq: 2, node: a },
            Entry { cost: 2.0, seq: 3, node: b },
        ]);
        let mut closed = HashSet::new();
        assert_eq!(cheapest_open(&open, &closed, t), 1.0);
        closed.insert(a);
        assert_eq!(cheapest_open(&open, &closed, t), 2.0);
        closed.insert(b);
        assert_eq!(cheapest_open(&open, &closed, t), f64::INFINITY);
    }

    #[test]
    fn reported_cost_matches_path() {
        let l = Layout::parse(
            "
            S..#....
            .#.#.##.
            .#...#..
            .####.#.
            ......#T",
        )
        .unwrap();
        let out = engine().ucs(&l.grid, l.start, l.target).unwrap();
        assert!(out.is_found());
        let cost = out.stats.cost.unwrap();
        assert!((cost - path_cost(&out.path)).abs() < 1e-9);
    }
}
