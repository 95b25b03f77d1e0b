//! Maze cells and entrance normalization

use std::fmt;

use serde::Deserialize;

use crate::error::ConfigError;

/// Location in the maze, `(row, col)`
///
/// Coordinates are signed: candidate cells read from the command line or a
/// configuration file may lie outside the maze until they are normalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "(i64, i64)")]
pub struct Cell {
    pub row: i64,
    pub col: i64,
}

/// Extent of the maze grid, at least one row and one column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "(i64, i64)")]
pub struct Dimension {
    rows: i64,
    cols: i64,
}

impl Cell {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Whether the cell lies on the outer wall of a maze of `dimension`
    pub fn is_on_perimeter(&self, dimension: Dimension) -> bool {
        dimension.contains(*self)
            && (self.row == 0
                || self.row == dimension.max_row()
                || self.col == 0
                || self.col == dimension.max_col())
    }
}

impl From<(i64, i64)> for Cell {
    fn from((row, col): (i64, i64)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Dimension {
    pub const DEFAULT: Self = Self { rows: 10, cols: 30 };

    /// Create dimension, rejecting empty mazes
    pub fn new(rows: i64, cols: i64) -> Result<Self, ConfigError> {
        if rows < 1 || cols < 1 {
            return Err(ConfigError::InvalidDimension { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> i64 {
        self.rows
    }

    pub fn cols(&self) -> i64 {
        self.cols
    }

    fn max_row(&self) -> i64 {
        self.rows - 1
    }

    fn max_col(&self) -> i64 {
        self.cols - 1
    }

    /// Top-left corner, the canonical entrance
    pub fn first_cell(&self) -> Cell {
        Cell::new(0, 0)
    }

    /// Bottom-right corner, the canonical exit
    pub fn last_cell(&self) -> Cell {
        Cell::new(self.max_row(), self.max_col())
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.rows).contains(&cell.row) && (0..self.cols).contains(&cell.col)
    }
}

impl TryFrom<(i64, i64)> for Dimension {
    type Error = ConfigError;

    fn try_from((rows, cols): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(rows, cols)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Distances from a coordinate to the near (0) and far (max) wall of one axis
///
/// Coordinates beyond the far wall are clamped onto it; the distance to the
/// far wall is then the overshoot.
fn wall_distances(coord: i64, max: i64) -> (i64, i64, i64) {
    let coord = coord.max(0);
    if coord < max {
        (coord, coord, max - coord)
    } else {
        (max, max, coord - max)
    }
}

/// Move a candidate cell onto the nearest outer wall of the maze
///
/// Negative coordinates are clamped to zero and coordinates past the far
/// edge onto the far edge. Then the axis that is closer to one of its own
/// walls is snapped onto that wall; the other axis keeps its value. On a tie
/// the column is snapped.
///
/// A cell on the perimeter may still move to the opposite wall of the axis
/// that gets snapped, if that wall is nearer.
///
/// # Examples
/// ```
/// use maze_config::{normalize, Cell, Dimension};
///
/// let dimension = Dimension::new(10, 30).unwrap();
/// assert_eq!(normalize(Cell::new(-5, 5), dimension), Cell::new(0, 5));
/// assert_eq!(normalize(Cell::new(12, 5), dimension), Cell::new(9, 5));
/// ```
pub fn normalize(cell: Cell, dimension: Dimension) -> Cell {
    let (row, north, south) = wall_distances(cell.row, dimension.max_row());
    let (col, west, east) = wall_distances(cell.col, dimension.max_col());

    let vertical = north.min(south);
    let horizontal = west.min(east);

    if vertical < horizontal {
        let row = if south < north { dimension.max_row() } else { 0 };
        Cell::new(row, col)
    } else {
        let col = if east < west { dimension.max_col() } else { 0 };
        Cell::new(row, col)
    }
}
