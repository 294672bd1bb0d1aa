//! Graph algorithms over maze graphs.
//!
//! These only read a built [`MazeGraph`](crate::maze_graph::MazeGraph).

pub mod reachability;
