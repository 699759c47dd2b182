use std::collections::HashMap;

use waygrid_core::Node;

/// Maps each visited node to the node it was reached from. Roots map to
/// `None`.
pub type Predecessors = HashMap<Node, Option<Node>>;

/// Walk `predecessors` from `target` back to `start`.
///
/// Returns the route ordered start → target, or an empty vector when the
/// chain breaks (or loops) before reaching `start`.
pub fn reconstruct(predecessors: &Predecessors, start: Node, target: Node) -> Vec<Node> {
    let mut path = vec![target];
    let mut node = target;
    while node != start {
        // A chain longer than the map has a cycle.
        if path.len() > predecessors.len() {
            return Vec::new();
        }
        match predecessors.get(&node) {
            Some(&Some(prev)) => {
                path.push(prev);
                node = prev;
            }
            _ => return Vec::new(),
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(pairs: &[((i32, i32), Option<(i32, i32)>)]) -> Predecessors {
        pairs
            .iter()
            .map(|&(n, p)| (Node::from(n), p.map(Node::from)))
            .collect()
    }

    #[test]
    fn walks_back_and_reverses() {
        let preds = chain(&[
            ((0, 0), None),
            ((1, 1), Some((0, 0))),
            ((2, 1), Some((1, 1))),
            ((3, 2), Some((2, 1))),
        ]);
        let path = reconstruct(&preds, Node::new(0, 0), Node::new(3, 2));
        assert_eq!(
            path,
            vec![
                Node::new(0, 0),
                Node::new(1, 1),
                Node::new(2, 1),
                Node::new(3, 2)
            ]
        );
    }

    #[test]
    fn start_equals_target() {
        let preds = chain(&[((4, 4), None)]);
        assert_eq!(
            reconstruct(&preds, Node::new(4, 4), Node::new(4, 4)),
            vec![Node::new(4, 4)]
        );
    }

    #[test]
    fn broken_chain_yields_empty() {
        let preds = chain(&[((0, 0), None), ((2, 2), Some((1, 1)))]);
        assert!(reconstruct(&preds, Node::new(0, 0), Node::new(2, 2)).is_empty());
        // Target never linked.
        assert!(reconstruct(&preds, Node::new(0, 0), Node::new(5, 5)).is_empty());
    }

    #[test]
    fn cycle_yields_empty() {
        let preds = chain(&[((1, 1), Some((2, 2))), ((2, 2), Some((1, 1)))]);
        assert!(reconstruct(&preds, Node::new(0, 0), Node::new(2, 2)).is_empty());
    }
}
