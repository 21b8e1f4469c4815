//! A generic A* over any node type with an ordering. Successors are generated lazily through a
//! closure, parents and best costs live in a single insertion-ordered map and the frontier is a
//! binary heap that may hold stale entries; those are skipped when popped instead of being
//! removed when a cheaper route is found.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::debug;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

struct SmallestCostHolder<N, K> {
    estimated_cost: K,
    cost: K,
    node: N,
    index: usize,
}

impl<N: Ord, K: Ord> Eq for SmallestCostHolder<N, K> {}

impl<N: Ord, K: Ord> PartialEq for SmallestCostHolder<N, K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Ord, K: Ord> PartialOrd for SmallestCostHolder<N, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord, K: Ord> Ord for SmallestCostHolder<N, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest estimate first, then the smallest node.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.node.cmp(&self.node),
            s => s,
        }
    }
}

fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut i = start;
    let mut path: Vec<N> = std::iter::from_fn(|| {
        parents.get_index(i).map(|(node, value)| {
            i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Searches from `start` until `success` holds for a popped node. Returns the path including
/// both ends and its cost, or [None] once the frontier is exhausted.
///
/// Among frontier entries with equal estimated cost the smallest node is expanded first, so the
/// result is fully determined by the inputs.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone + Ord,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        node: start.clone(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    let mut expanded = 0usize;
    let mut pushed = 1usize;
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let (node, &(_, c)) = parents.get_index(index)?;
            if success(node) {
                let path = reverse_path(&parents, |&(p, _)| p, index);
                debug!(
                    "Reached goal after expanding {} nodes ({} frontier pushes)",
                    expanded, pushed
                );
                return Some((path, c));
            }
            // A node is pushed again every time a cheaper route to it is found; only the entry
            // carrying the best known cost gets expanded.
            if cost > c {
                continue;
            }
            expanded += 1;
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h;
            let n;
            let node;
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    node = e.key().clone();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        node = e.key().clone();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            pushed += 1;
            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                node,
                index: n,
            });
        }
    }
    debug!(
        "Frontier exhausted after expanding {} nodes ({} frontier pushes)",
        expanded, pushed
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A line graph 0..=10 where every node links to its successor and to the one after that,
    /// the longer hop costing 3.
    #[test]
    fn prefers_cheaper_edges() {
        let (path, cost) = astar(
            &0u32,
            |&n| {
                let mut v = vec![];
                if n < 10 {
                    v.push((n + 1, 1u32));
                }
                if n < 9 {
                    v.push((n + 2, 3u32));
                }
                v
            },
            |&n| 10 - n,
            |&n| n == 10,
        )
        .unwrap();
        assert_eq!(cost, 10);
        assert_eq!(path, (0..=10).collect::<Vec<_>>());
    }

    #[test]
    fn start_is_goal() {
        let (path, cost) = astar(&7u32, |_| Vec::<(u32, u32)>::new(), |_| 0, |&n| n == 7).unwrap();
        assert_eq!(path, vec![7]);
        assert_eq!(cost, 0);
    }

    #[test]
    fn exhausts_without_goal() {
        let result = astar(
            &0u32,
            |&n| if n < 3 { vec![(n + 1, 1u32)] } else { vec![] },
            |_| 0,
            |&n| n == 5,
        );
        assert!(result.is_none());
    }

    #[test]
    fn stale_entries_do_not_regress_cost() {
        // 0 -> 2 directly costs 5, via 1 costs 2; the heuristic is zero so the direct entry for
        // 2 is pushed first and later superseded.
        let (path, cost) = astar(
            &0u32,
            |&n| match n {
                0 => vec![(2u32, 5u32), (1, 1)],
                1 => vec![(2, 1)],
                2 => vec![(3, 1)],
                _ => vec![],
            },
            |_| 0,
            |&n| n == 3,
        )
        .unwrap();
        assert_eq!(path, vec![0, 1, 2, 3]);
        assert_eq!(cost, 3);
    }
}
