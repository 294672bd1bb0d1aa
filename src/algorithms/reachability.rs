//! Breadth-first queries over a [`MazeGraph`].
//!
//! These are the questions a player-move search asks of a maze at a point in
//! time: where can I get to, and how.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;

use crate::location::Location;
use crate::maze_graph::MazeGraph;

/// Every location connected to `source`, `source` included, in BFS order.
///
/// A `source` outside the graph reaches only itself.
pub fn reachable_locations(graph: &MazeGraph, source: Location) -> Vec<Location> {
    let mut reached = FxHashSet::<Location>::default();
    let mut order = vec![source];
    let mut open = VecDeque::from([source]);
    reached.insert(source);

    while let Some(location) = open.pop_front() {
        for neighbor in graph.neighbors(&location) {
            if reached.insert(*neighbor) {
                order.push(*neighbor);
                open.push_back(*neighbor);
            }
        }
    }

    log::trace!("{} locations reachable from {source}", order.len());
    order
}

pub fn is_reachable(graph: &MazeGraph, source: Location, target: Location) -> bool {
    shortest_path(graph, source, target).is_some()
}

/// A shortest path from `source` to `target`, both ends included.
pub fn shortest_path(graph: &MazeGraph, source: Location, target: Location) -> Option<Vec<Location>> {
    // Maps each reached location to the one it was reached from.
    let mut parents = FxHashMap::<Location, Location>::default();
    let mut open = VecDeque::from([source]);
    parents.insert(source, source);

    while let Some(location) = open.pop_front() {
        if location == target {
            let mut path = vec![target];
            let mut current = target;
            while current != source {
                current = parents[&current];
                path.push(current);
            }
            path.reverse();
            return Some(path);
        }

        for neighbor in graph.neighbors(&location) {
            if !parents.contains_key(neighbor) {
                parents.insert(*neighbor, location);
                open.push_back(*neighbor);
            }
        }
    }

    None
}
