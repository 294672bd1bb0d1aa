//! Construction of maze graphs.
//!
//! Builders hold just the configuration for one way of deriving adjacency
//! and hand out an independent [`MazeGraph`] on every call, so the search
//! engine can consume any of them the same way.

pub mod out_paths;
pub mod snake;
pub mod text;

use crate::maze_graph::MazeGraph;

pub use out_paths::OutPathsGraphBuilder;
pub use snake::SnakeGraphBuilder;
pub use text::TextGraphBuilder;

pub trait GraphBuilder: std::fmt::Debug {
    type Error: std::error::Error;

    /// Builds a fresh graph from the current configuration.
    fn build_graph(&self) -> Result<MazeGraph, Self::Error>;
}
