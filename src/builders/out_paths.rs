//! Mazes described by the open sides of each cell.
//!
//! This is the format maze cards are handed to the search in: every cell
//! carries an out-path bitmask for its card in the unrotated position plus
//! the number of clockwise quarter turns the card was placed with. Two
//! neighbouring cells are connected when each one opens towards the other.

use bitflags::bitflags;
use thiserror::Error;

use crate::builders::GraphBuilder;
use crate::location::Index;
use crate::location::Location;
use crate::location::Offset;
use crate::maze_graph::MazeGraph;

const QUARTER_TURNS: u8 = 4;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Open sides of a maze cell.
    pub struct OutPaths: u8 {
        const NORTH = 1;
        const EAST = 2;
        const SOUTH = 4;
        const WEST = 8;
    }
}

impl OutPaths {
    /// Each side with the offset leading out of it and the side it meets.
    const SIDES: [(OutPaths, Offset, OutPaths); 4] = [
        (OutPaths::NORTH, Offset::NORTH, OutPaths::SOUTH),
        (OutPaths::EAST, Offset::EAST, OutPaths::WEST),
        (OutPaths::SOUTH, Offset::SOUTH, OutPaths::NORTH),
        (OutPaths::WEST, Offset::WEST, OutPaths::EAST),
    ];

    /// The open sides after turning the cell clockwise `quarter_turns` times.
    #[must_use]
    pub fn rotated(self, quarter_turns: u8) -> Self {
        let turns = quarter_turns % QUARTER_TURNS;
        let bits = self.bits();
        let rotated = (bits << turns) | (bits >> (QUARTER_TURNS - turns));
        Self::from_bits_truncate(rotated)
    }
}

/// A cell as received from the game: raw out-path bits and a rotation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CellDescriptor {
    pub out_paths: u8,
    /// Clockwise quarter turns, `0..4`.
    pub rotation: u8,
}

impl CellDescriptor {
    pub fn new(out_paths: u8, rotation: u8) -> Self {
        Self {
            out_paths,
            rotation,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutPathsGraphError {
    #[error("A maze needs an extent of at least 1")]
    ZeroExtent,
    #[error("Extent {extent} does not fit in the coordinate space")]
    ExtentTooLarge { extent: usize },
    #[error("Expected {expected} cells, found {found}")]
    WrongCellCount { expected: usize, found: usize },
    #[error("Invalid out paths {bits:#06b} for cell {index}")]
    InvalidOutPaths { index: usize, bits: u8 },
    #[error("Invalid rotation {rotation} for cell {index}")]
    InvalidRotation { index: usize, rotation: u8 },
}

/// Builds a square [`MazeGraph`] from row-major cell descriptors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutPathsGraphBuilder {
    extent: usize,
    cells: Vec<CellDescriptor>,
}

impl OutPathsGraphBuilder {
    pub fn new(extent: usize, cells: Vec<CellDescriptor>) -> Self {
        Self { extent, cells }
    }

    pub fn set_cells(&mut self, extent: usize, cells: Vec<CellDescriptor>) {
        self.extent = extent;
        self.cells = cells;
    }

    pub fn extent(&self) -> usize {
        self.extent
    }

    /// Validates the descriptors, returning the rotated out paths of each cell.
    fn decode(&self) -> Result<Vec<OutPaths>, OutPathsGraphError> {
        if self.extent == 0 {
            return Err(OutPathsGraphError::ZeroExtent);
        }
        let too_large = || OutPathsGraphError::ExtentTooLarge {
            extent: self.extent,
        };
        Index::try_from(self.extent).map_err(|_| too_large())?;
        let expected = self.extent.checked_mul(self.extent).ok_or_else(too_large)?;
        if self.cells.len() != expected {
            return Err(OutPathsGraphError::WrongCellCount {
                expected,
                found: self.cells.len(),
            });
        }

        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                let out_paths = OutPaths::from_bits(cell.out_paths).ok_or(
                    OutPathsGraphError::InvalidOutPaths {
                        index,
                        bits: cell.out_paths,
                    },
                )?;
                if cell.rotation >= QUARTER_TURNS {
                    return Err(OutPathsGraphError::InvalidRotation {
                        index,
                        rotation: cell.rotation,
                    });
                }
                Ok(out_paths.rotated(cell.rotation))
            })
            .collect()
    }
}

impl GraphBuilder for OutPathsGraphBuilder {
    type Error = OutPathsGraphError;

    fn build_graph(&self) -> Result<MazeGraph, Self::Error> {
        let cells = self.decode()?;
        let extent = self.extent as Index;
        let out_paths_at = |location: &Location| -> Option<OutPaths> {
            let inside = (0..extent).contains(&location.row())
                && (0..extent).contains(&location.column());
            inside.then(|| cells[(location.row() * extent + location.column()) as usize])
        };

        let mut graph = MazeGraph::new();
        for row in 0..extent {
            for column in 0..extent {
                let location = Location::new(row, column);
                graph.add_node(location);

                let out_paths = cells[(row * extent + column) as usize];
                for (side, offset, mirrored) in OutPaths::SIDES {
                    if !out_paths.contains(side) {
                        continue;
                    }
                    if let Some(neighbor) = location.checked_translate(offset)
                        && out_paths_at(&neighbor).is_some_and(|n| n.contains(mirrored))
                    {
                        graph.add_edge(location, neighbor);
                    }
                }
            }
        }

        log::debug!("Built {extent}x{extent} out-path maze: {graph:?}");
        graph.verify();
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::has_neighbors;

    const N: u8 = OutPaths::NORTH.bits();
    const E: u8 = OutPaths::EAST.bits();
    const S: u8 = OutPaths::SOUTH.bits();
    const W: u8 = OutPaths::WEST.bits();

    fn cell(out_paths: u8) -> CellDescriptor {
        CellDescriptor::new(out_paths, 0)
    }

    #[test]
    fn rotation() {
        let corner = OutPaths::NORTH | OutPaths::EAST;
        assert_eq!(corner.rotated(0), corner);
        assert_eq!(corner.rotated(1), OutPaths::EAST | OutPaths::SOUTH);
        assert_eq!(corner.rotated(2), OutPaths::SOUTH | OutPaths::WEST);
        assert_eq!(corner.rotated(3), OutPaths::WEST | OutPaths::NORTH);
        assert_eq!(OutPaths::all().rotated(1), OutPaths::all());
        assert_eq!(OutPaths::empty().rotated(3), OutPaths::empty());
    }

    #[test]
    fn edges_need_both_sides_open() {
        // (0,0) ─ (0,1)   (0,1) opens south into a wall.
        //  │
        // (1,0)   (1,1)   isolated.
        let builder = OutPathsGraphBuilder::new(
            2,
            vec![cell(E | S), cell(W | S), cell(N), cell(E | W)],
        );
        let g = builder.build_graph().unwrap();
        let l = Location::new;

        assert_eq!(g.number_of_nodes(), 4);
        assert_eq!(g.number_of_edges(), 2);
        assert!(has_neighbors(&g, l(0, 0), &[l(0, 1), l(1, 0)]));
        assert!(has_neighbors(&g, l(0, 1), &[l(0, 0)]));
        assert!(has_neighbors(&g, l(1, 0), &[l(0, 0)]));
        assert!(g.neighbors(&l(1, 1)).is_empty());
        assert!(g.is_consistent());
    }

    #[test]
    fn rotated_cell_connects() {
        // A north-south straight turned once runs east-west.
        let mut cells = vec![cell(E), CellDescriptor::new(N | S, 1), cell(W)];
        cells.extend([cell(0); 6]);
        let g = OutPathsGraphBuilder::new(3, cells.clone())
            .build_graph()
            .unwrap();
        let l = Location::new;

        assert!(has_neighbors(&g, l(0, 1), &[l(0, 0), l(0, 2)]));

        // Unrotated, it only meets walls.
        cells[1].rotation = 0;
        let g = OutPathsGraphBuilder::new(3, cells).build_graph().unwrap();
        assert_eq!(g.number_of_edges(), 0);
        assert_eq!(g.number_of_nodes(), 9);
    }

    #[test]
    fn openings_off_the_grid_are_ignored() {
        let g = OutPathsGraphBuilder::new(1, vec![CellDescriptor::new(N | E | S | W, 2)])
            .build_graph()
            .unwrap();
        assert_eq!(g.number_of_nodes(), 1);
        assert!(g.neighbors(&Location::new(0, 0)).is_empty());
    }

    #[test]
    fn invalid_descriptors() {
        assert_eq!(
            OutPathsGraphBuilder::new(0, vec![]).build_graph(),
            Err(OutPathsGraphError::ZeroExtent)
        );
        assert_eq!(
            OutPathsGraphBuilder::new(2, vec![cell(N); 3]).build_graph(),
            Err(OutPathsGraphError::WrongCellCount {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            OutPathsGraphBuilder::new(1, vec![cell(16)]).build_graph(),
            Err(OutPathsGraphError::InvalidOutPaths {
                index: 0,
                bits: 16
            })
        );
        assert_eq!(
            OutPathsGraphBuilder::new(2, vec![cell(N), cell(S), CellDescriptor::new(E, 4), cell(W)])
                .build_graph(),
            Err(OutPathsGraphError::InvalidRotation {
                index: 2,
                rotation: 4
            })
        );
        let extent = Index::MAX as usize + 1;
        assert_eq!(
            OutPathsGraphBuilder::new(extent, vec![]).build_graph(),
            Err(OutPathsGraphError::ExtentTooLarge { extent })
        );
    }

    #[test]
    fn rebuilding_yields_equal_graphs() {
        let mut builder = OutPathsGraphBuilder::default();
        builder.set_cells(2, vec![cell(E), cell(W), cell(0), cell(0)]);
        assert_eq!(builder.extent(), 2);
        assert_eq!(builder.build_graph(), builder.build_graph());
    }
}
