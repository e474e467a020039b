//! Generic best-first search over hashable nodes: the frontier, cost map and
//! parent map shared by both solvers. Nodes and their best-known costs live in
//! an insertion-ordered map so frontier entries can refer to them by index, and
//! the frontier itself uses lazy deletion: superseded entries stay queued and
//! are discarded when popped.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::warn;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Outcome of a single search: the node chain from start to goal with its total
/// cost if the goal was reached, plus the number of nodes expanded on the way.
#[derive(Clone, Debug)]
pub struct SearchOutcome<N, C> {
    pub path: Option<(Vec<N>, C)>,
    pub expanded: usize,
}

struct FrontierEntry<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> PartialEq for FrontierEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.cost.eq(&other.cost)
    }
}

impl<K: PartialEq> Eq for FrontierEntry<K> {}

impl<K: Ord> PartialOrd for FrontierEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for FrontierEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-order on the estimate (the heap is a max-heap), then prefer the
        // entry with the larger accumulated cost. The fixed rule keeps pop
        // order, and therefore returned paths, reproducible.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            ordering => ordering,
        }
    }
}

fn reverse_path<N, C>(parents: &FxIndexMap<N, (usize, C)>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, &(parent, _))| {
            *i = parent;
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Runs best-first search from `start` until `success` holds for a popped node
/// or the frontier runs dry. `successors` yields `(node, step cost)` pairs and
/// `heuristic` must never overestimate the remaining cost, otherwise the first
/// accepted goal is not guaranteed to be cheapest.
pub(crate) fn best_first_search<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> SearchOutcome<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        estimated_cost: Zero::zero(),
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    let mut expanded = 0;

    while let Some(FrontierEntry { cost, index, .. }) = frontier.pop() {
        let successors = {
            let (node, &(_, best_cost)) = parents.get_index(index).unwrap();
            if success(node) {
                let path = reverse_path(&parents, index);
                return SearchOutcome {
                    path: Some((path, cost)),
                    expanded,
                };
            }
            // A node requeued after a cheaper route was found leaves its old
            // entry behind; drop such stale entries instead of expanding twice.
            if cost > best_cost {
                continue;
            }
            expanded += 1;
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h;
            let successor_index;
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    successor_index = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        successor_index = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }
            frontier.push(FrontierEntry {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: successor_index,
            });
        }
    }
    warn!("frontier exhausted without reaching the goal; was the reachability check stale?");
    SearchOutcome {
        path: None,
        expanded,
    }
}
