//! This module implements a variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! which keeps an explicit closed set and records the heuristic value of every discovered node.
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use std::hash::Hash;

/// Bookkeeping for a discovered node. The node itself is the key in the parents map, and
/// `came_from` is the map index of its predecessor ([usize::MAX] for the start).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SearchNode<C> {
    pub came_from: usize,
    pub g_cost: C,
    pub h_cost: C,
}

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
            && self.cost.eq(&other.cost)
            && self.index == other.index
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then favours the node with the largest cost (the one
        // closest to the goal), and finally the node that was discovered first
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => match self.cost.cmp(&other.cost) {
                Ordering::Equal => other.index.cmp(&self.index),
                s => s,
            },
            s => s,
        }
    }
}

fn reverse_path<N, C>(parents: &FxIndexMap<N, SearchNode<C>>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, value)| {
            *i = value.came_from;
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Searches from `start` until `success` holds. Returns the path including the start and its
/// total cost, or [None] once every reachable node has been closed.
pub(crate) fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    let start_h = heuristic(start);
    to_see.push(SmallestCostHolder {
        estimated_cost: start_h,
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, SearchNode<C>> = FxIndexMap::default();
    parents.insert(
        start.clone(),
        SearchNode {
            came_from: usize::MAX,
            g_cost: Zero::zero(),
            h_cost: start_h,
        },
    );
    let mut closed: FxHashSet<usize> = FxHashSet::default();
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let Some((node, search_node)) = parents.get_index(index) else {
                continue;
            };
            // A node may sit in the heap several times if a cheaper way to it was found later,
            // only the cheapest entry is expanded.
            if closed.contains(&index) || cost > search_node.g_cost {
                continue;
            }
            if success(node) {
                debug!("Goal reached after closing {} nodes", closed.len());
                let path = reverse_path(&parents, index);
                return Some((path, cost));
            }
            closed.insert(index);
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h;
            let n;
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert(SearchNode {
                        came_from: index,
                        g_cost: new_cost,
                        h_cost: h,
                    });
                }
                Occupied(mut e) => {
                    if closed.contains(&e.index()) || e.get().g_cost <= new_cost {
                        continue;
                    }
                    h = e.get().h_cost;
                    n = e.index();
                    e.insert(SearchNode {
                        came_from: index,
                        g_cost: new_cost,
                        h_cost: h,
                    });
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    debug!(
        "Open set exhausted after closing {} of {} discovered nodes",
        closed.len(),
        parents.len()
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Line graph 0 - 1 - 2 - 3 with a costly shortcut 0 - 3.
    fn line_successors(n: &i32) -> Vec<(i32, i32)> {
        let mut succ = vec![];
        if *n > 0 {
            succ.push((n - 1, 1));
        }
        if *n < 3 {
            succ.push((n + 1, 1));
        }
        if *n == 0 {
            succ.push((3, 5));
        }
        succ
    }

    #[test]
    fn relaxation_keeps_cheaper_cost() {
        let (path, cost) = astar(&0, line_successors, |_| 0, |n| *n == 3).unwrap();
        assert_eq!(path, vec![0, 1, 2, 3]);
        assert_eq!(cost, 3);
    }

    #[test]
    fn start_is_goal() {
        let (path, cost) = astar(&2, line_successors, |n| (3 - n).abs(), |n| *n == 2).unwrap();
        assert_eq!(path, vec![2]);
        assert_eq!(cost, 0);
    }

    #[test]
    fn exhausted() {
        assert!(astar(&0, line_successors, |_| 0, |n| *n == 7).is_none());
    }

    #[test]
    fn holder_ordering() {
        let mut heap = BinaryHeap::new();
        for (estimated_cost, cost, index) in [(5, 1, 0), (4, 1, 1), (4, 3, 2), (4, 3, 3)] {
            heap.push(SmallestCostHolder {
                estimated_cost,
                cost,
                index,
            });
        }
        let order = std::iter::from_fn(|| heap.pop().map(|h| h.index)).collect::<Vec<_>>();
        assert_eq!(order, vec![2, 3, 1, 0]);
    }
}
