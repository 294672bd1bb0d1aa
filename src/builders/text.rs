//! Mazes described as text.
//!
//! Each maze cell is drawn as a 3x3 segment of `#` (wall) and `.` (open)
//! characters. Segments in a row are separated by `|`, and each row of
//! segments is closed by a divider line made of `-`:
//!
//! ```text
//! ###|#.#|
//! #..|..#|
//! #.#|###|
//! --------
//! ```
//!
//! Only the middle character of each side matters. Two neighbouring cells
//! are connected when both sides of their shared border are open.

use thiserror::Error;

use crate::builders::GraphBuilder;
use crate::location::Index;
use crate::location::Location;
use crate::location::Offset;
use crate::maze_graph::MazeGraph;

const SEGMENT_SIZE: usize = 3;
const SEGMENT_SEPARATOR: char = '|';
const DIVIDER: char = '-';

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Border {
    Open,
    Wall,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BorderParseError {
    #[error("Invalid character '{0}' found.")]
    InvalidCharacter(char),
}

impl std::convert::TryFrom<char> for Border {
    type Error = BorderParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '.' => Ok(Border::Open),
            '#' => Ok(Border::Wall),
            ch => Err(BorderParseError::InvalidCharacter(ch)),
        }
    }
}

/// The open sides of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct Cell {
    north: bool,
    east: bool,
    south: bool,
    west: bool,
}

impl Cell {
    fn from_segment(segment: &[[Border; SEGMENT_SIZE]; SEGMENT_SIZE]) -> Self {
        Self {
            north: segment[0][1] == Border::Open,
            east: segment[1][2] == Border::Open,
            south: segment[2][1] == Border::Open,
            west: segment[1][0] == Border::Open,
        }
    }
}

/// Reasons for rejecting a maze text. Lines are 0-based.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeTextParseError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Row of segments starting at line {line} is shorter than 3 lines")]
    IncompleteRow { line: usize },
    #[error("Expected a divider at line {line}")]
    MissingDivider { line: usize },
    #[error("No segments found at line {line}")]
    EmptyRow { line: usize },
    #[error("Segment {segment} at line {line} is {width} characters wide")]
    InvalidSegmentWidth {
        line: usize,
        segment: usize,
        width: usize,
    },
    #[error("Line {line} has {found} segments, expected {expected}")]
    InconsistentColumns {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("{e} at line {line}, column {column}")]
    InvalidCharacter {
        e: BorderParseError,
        line: usize,
        column: usize,
    },
    #[error("Maze of {rows}x{columns} cells does not fit in the coordinate space")]
    TooLarge { rows: usize, columns: usize },
}

fn is_divider(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|ch| ch == DIVIDER)
}

/// Splits a text line into 3-character segments of borders.
fn parse_segment_line(
    line: &str,
    line_number: usize,
) -> Result<Vec<[Border; SEGMENT_SIZE]>, MazeTextParseError> {
    let line = line.strip_suffix(SEGMENT_SEPARATOR).unwrap_or(line);
    if line.is_empty() {
        return Err(MazeTextParseError::EmptyRow { line: line_number });
    }

    let mut segments = vec![];
    let mut column = 0usize;
    for (segment, text) in line.split(SEGMENT_SEPARATOR).enumerate() {
        let width = text.chars().count();
        if width != SEGMENT_SIZE {
            return Err(MazeTextParseError::InvalidSegmentWidth {
                line: line_number,
                segment,
                width,
            });
        }

        let mut borders = [Border::Wall; SEGMENT_SIZE];
        for (border, ch) in borders.iter_mut().zip(text.chars()) {
            *border = Border::try_from(ch).map_err(|e| MazeTextParseError::InvalidCharacter {
                e,
                line: line_number,
                column,
            })?;
            column += 1;
        }
        segments.push(borders);
        // Skip the separator.
        column += 1;
    }

    Ok(segments)
}

/// Builds a [`MazeGraph`] out of a maze drawn as text.
///
/// ```
/// use mazegraph::builders::GraphBuilder;
/// use mazegraph::builders::TextGraphBuilder;
/// use mazegraph::location::Location;
///
/// let builder = TextGraphBuilder::new(vec![
///     "###|###|".to_string(),
///     "#..|..#|".to_string(),
///     "###|###|".to_string(),
///     "--------".to_string(),
/// ]);
/// let graph = builder.build_graph().unwrap();
/// assert!(graph.neighbors(&Location::new(0, 0)).contains(&Location::new(0, 1)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextGraphBuilder {
    maze: Vec<String>,
}

impl TextGraphBuilder {
    pub fn new(maze: Vec<String>) -> Self {
        Self { maze }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines().map(str::to_string).collect())
    }

    pub fn set_maze(&mut self, maze: Vec<String>) {
        self.maze = maze;
    }

    pub fn maze(&self) -> &[String] {
        &self.maze
    }

    /// Decodes the text into rows of cells.
    fn parse_cells(&self) -> Result<Vec<Vec<Cell>>, MazeTextParseError> {
        if self.maze.is_empty() {
            return Err(MazeTextParseError::EmptyInput);
        }

        let mut rows: Vec<Vec<Cell>> = vec![];
        let mut line_number = 0usize;
        while line_number < self.maze.len() {
            let block_start = line_number;
            let block_end = block_start + SEGMENT_SIZE;
            if block_end > self.maze.len() {
                return Err(MazeTextParseError::IncompleteRow { line: block_start });
            }

            let mut segment_lines = Vec::with_capacity(SEGMENT_SIZE);
            for (i, line) in self.maze[block_start..block_end].iter().enumerate() {
                if is_divider(line) {
                    return Err(MazeTextParseError::IncompleteRow { line: block_start });
                }
                segment_lines.push(parse_segment_line(line, block_start + i)?);
            }

            let expected = rows.first().map_or(segment_lines[0].len(), Vec::len);
            for (i, segments) in segment_lines.iter().enumerate() {
                if segments.len() != expected {
                    return Err(MazeTextParseError::InconsistentColumns {
                        line: block_start + i,
                        expected,
                        found: segments.len(),
                    });
                }
            }

            let row = (0..expected)
                .map(|column| {
                    let segment = [
                        segment_lines[0][column],
                        segment_lines[1][column],
                        segment_lines[2][column],
                    ];
                    Cell::from_segment(&segment)
                })
                .collect();
            rows.push(row);

            line_number = block_end;
            match self.maze.get(line_number) {
                Some(line) if is_divider(line) => line_number += 1,
                Some(_) => return Err(MazeTextParseError::MissingDivider { line: line_number }),
                // The last divider can be left out.
                None => {}
            }
        }

        Ok(rows)
    }
}

impl GraphBuilder for TextGraphBuilder {
    type Error = MazeTextParseError;

    fn build_graph(&self) -> Result<MazeGraph, Self::Error> {
        let cells = self.parse_cells()?;
        let num_rows = cells.len();
        let num_columns = cells.first().map_or(0, Vec::len);
        if Index::try_from(num_rows).is_err() || Index::try_from(num_columns).is_err() {
            return Err(MazeTextParseError::TooLarge {
                rows: num_rows,
                columns: num_columns,
            });
        }

        let mut graph = MazeGraph::new();
        for (row, line) in cells.iter().enumerate() {
            for (column, cell) in line.iter().enumerate() {
                let location = Location::new(row as Index, column as Index);
                graph.add_node(location);

                if let Some(right) = line.get(column + 1)
                    && cell.east
                    && right.west
                {
                    graph.add_edge(location, location.translate(Offset::EAST));
                }
                if let Some(below) = cells.get(row + 1).map(|next| next[column])
                    && cell.south
                    && below.north
                {
                    graph.add_edge(location, location.translate(Offset::SOUTH));
                }
            }
        }

        log::debug!("Built {num_rows}x{num_columns} text maze: {graph:?}");
        graph.verify();
        Ok(graph)
    }
}
