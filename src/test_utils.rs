//! Helpers shared by the unit tests.

use std::collections::BTreeSet;

use crate::location::Location;
use crate::maze_graph::MazeGraph;

/// Whether the neighbours of `location` are exactly `expected`.
pub(crate) fn has_neighbors(graph: &MazeGraph, location: Location, expected: &[Location]) -> bool {
    let expected: BTreeSet<Location> = expected.iter().copied().collect();
    let actual = graph.neighbors(&location);
    if *actual != expected {
        eprintln!("Neighbours of {location}: got {actual:?}, expected {expected:?}");
        return false;
    }
    true
}
