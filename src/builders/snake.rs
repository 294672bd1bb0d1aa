//! Mazes generated as a single snake-shaped corridor.
//!
//! The path visits every cell of a square grid exactly once, which makes it
//! the longest possible maze for a given extent.

use thiserror::Error;

use crate::builders::GraphBuilder;
use crate::location::Index;
use crate::location::Location;
use crate::location::Offset;
use crate::maze_graph::MazeGraph;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnakeGraphError {
    #[error("A snake needs an extent of at least 1")]
    ZeroExtent,
    #[error("Extent {extent} does not fit in the coordinate space")]
    ExtentTooLarge { extent: usize },
}

/// Builds a square maze that is a single boustrophedon path.
///
/// Even rows run left to right and odd rows right to left, with the end of
/// each row linked to the start of the next one:
///
/// ```text
/// ──────┐
/// ┌─────┘
/// └──────
/// ```
///
/// ```
/// use mazegraph::builders::GraphBuilder;
/// use mazegraph::builders::SnakeGraphBuilder;
/// use mazegraph::location::Location;
///
/// let graph = SnakeGraphBuilder::new(2).build_graph().unwrap();
/// assert_eq!(graph.number_of_nodes(), 4);
/// assert_eq!(graph.neighbors(&Location::new(0, 0)).len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeGraphBuilder {
    extent: usize,
}

impl SnakeGraphBuilder {
    pub fn new(extent: usize) -> Self {
        Self { extent }
    }

    pub fn set_extent(&mut self, extent: usize) {
        self.extent = extent;
    }

    pub fn extent(&self) -> usize {
        self.extent
    }
}

impl GraphBuilder for SnakeGraphBuilder {
    type Error = SnakeGraphError;

    fn build_graph(&self) -> Result<MazeGraph, Self::Error> {
        if self.extent == 0 {
            return Err(SnakeGraphError::ZeroExtent);
        }
        let extent = Index::try_from(self.extent).map_err(|_| SnakeGraphError::ExtentTooLarge {
            extent: self.extent,
        })?;

        let mut graph = MazeGraph::new();
        let mut current = Location::new(0, 0);
        graph.add_node(current);

        for row in 0..extent {
            // +1 on even rows, -1 on odd ones.
            let step = Offset::EAST.scale(1 - 2 * (row % 2));
            for _ in 1..extent {
                let next = current.translate(step);
                graph.add_edge(current, next);
                current = next;
            }
            if row + 1 < extent {
                let next = current.translate(Offset::SOUTH);
                graph.add_edge(current, next);
                current = next;
            }
        }

        log::debug!(
            "Built {}x{} snake ending at {current}: {graph:?}",
            extent,
            extent
        );
        graph.verify();
        Ok(graph)
    }
}
