//! Adjacency representation of a maze.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::location::Location;

const MAX_ELEMENTS_DISPLAYED: usize = 20;

static NO_NEIGHBORS: BTreeSet<Location> = BTreeSet::new();

/// An undirected graph of maze cells.
///
/// Nodes are identified by their [`Location`] and edges are open passages
/// between cells. Graphs are populated by a
/// [`GraphBuilder`](crate::builders::GraphBuilder) and are read-only
/// afterwards.
///
/// Invariants:
/// - Adjacency is symmetric.
/// - No node is its own neighbour.
/// - Isolated nodes are kept with an empty neighbour set.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MazeGraph {
    adjacency: BTreeMap<Location, BTreeSet<Location>>,
}

impl MazeGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of distinct nodes, isolated ones included.
    #[inline(always)]
    pub fn number_of_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn number_of_edges(&self) -> usize {
        let degrees: usize = self.adjacency.values().map(BTreeSet::len).sum();
        debug_assert!(degrees % 2 == 0);
        degrees / 2
    }

    /// Gets the neighbours of a given location.
    ///
    /// Locations that are not part of the graph have no neighbours.
    #[inline(always)]
    pub fn neighbors(&self, location: &Location) -> &BTreeSet<Location> {
        self.adjacency.get(location).unwrap_or(&NO_NEIGHBORS)
    }

    pub fn contains(&self, location: &Location) -> bool {
        self.adjacency.contains_key(location)
    }

    /// All nodes in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> + '_ {
        self.adjacency.keys()
    }

    /// Registers `location` as a node. Existing nodes are left untouched.
    pub(crate) fn add_node(&mut self, location: Location) {
        self.adjacency.entry(location).or_default();
    }

    /// Connects `a` and `b`, registering them as nodes if needed.
    ///
    /// Self-loops are not representable and get dropped.
    pub(crate) fn add_edge(&mut self, a: Location, b: Location) {
        debug_assert!(a != b, "Self-loop requested at {a}");
        if a == b {
            self.add_node(a);
            return;
        }
        log::trace!("Edge {a} <-> {b}");
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
    }

    /// Checks the graph invariants (symmetry, no self-loops).
    ///
    /// This is slow, walking every edge twice.
    pub fn is_consistent(&self) -> bool {
        self.adjacency.iter().all(|(location, neighbors)| {
            neighbors.iter().all(|neighbor| {
                neighbor != location && self.neighbors(neighbor).contains(location)
            })
        })
    }

    /// Checks invariants when running with the `verify` feature.
    #[inline(always)]
    pub(crate) fn verify(&self) {
        #[cfg(feature = "verify")]
        assert!(self.is_consistent(), "Inconsistent graph {self:?}");
    }
}

impl std::fmt::Display for MazeGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "MazeGraph({} nodes, {} edges):",
            self.number_of_nodes(),
            self.number_of_edges()
        )?;
        for (location, neighbors) in self.adjacency.iter().take(MAX_ELEMENTS_DISPLAYED) {
            write!(f, "{location}:")?;
            for neighbor in neighbors {
                write!(f, " {neighbor}")?;
            }
            writeln!(f)?;
        }
        if self.number_of_nodes() > MAX_ELEMENTS_DISPLAYED {
            writeln!(f, "...")?;
        }

        Ok(())
    }
}

impl std::fmt::Debug for MazeGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "MazeGraph(n:{}, e:{})",
            self.number_of_nodes(),
            self.number_of_edges()
        )
    }
}
