use shadow_rs::shadow;

shadow!(build);

// Graph model
// -----------
pub mod location;
pub mod maze_graph;

// Builders
// --------
pub mod builders;

// Algorithms
// ----------
pub mod algorithms;

#[cfg(test)]
pub(crate) mod test_utils;
