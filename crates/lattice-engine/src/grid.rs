//! Grid state and Moore-neighborhood counting.
//!
//! The [`Grid`] is a finite rectangular lattice of [`CellState`] values with
//! fixed dimensions. Cells are addressed by [`Cell`] coordinates with a
//! bottom-left origin: row 0 of an input matrix maps to the top row of the
//! coordinate space (`y = height - 1 - row`), preserving the visual
//! convention of text patterns.
//!
//! Storage is a flat row-major `Vec<CellState>`, so every in-range coordinate
//! has exactly one slot by construction and no out-of-range coordinate can
//! ever carry state.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Relative offsets of the 8 Moore-neighborhood cells.
const MOORE_OFFSETS: [(i64, i64); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

/// The state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// The cell is alive.
    Alive,
    /// The cell is dead.
    Dead,
}

impl CellState {
    /// Return `true` for [`CellState::Alive`].
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}

/// Coordinates of a single cell, bottom-left origin.
///
/// `0 <= x < width`, `0 <= y < height`. Orders lexicographically so cell
/// sets can live in [`BTreeSet`]s with deterministic iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Horizontal coordinate, 0 at the left edge.
    pub x: usize,
    /// Vertical coordinate, 0 at the bottom edge.
    pub y: usize,
}

impl Cell {
    /// Create a cell coordinate.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Boundary topology used when enumerating neighbors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryMode {
    /// Grid edges are hard limits; off-grid neighbors do not exist.
    #[default]
    Traditional,
    /// Grid edges wrap around, making the grid topologically a torus.
    Toroidal,
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Traditional => write!(f, "traditional"),
            Self::Toroidal => write!(f, "toroidal"),
        }
    }
}

/// A finite rectangular lattice of cells.
///
/// Dimensions are fixed at construction and immutable for the grid's
/// lifetime. The only mutation path is [`Grid::set`], used by the engine
/// when applying a full generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Cell states in row-major order (`index = y * width + x`).
    cells: Vec<CellState>,
}

impl Grid {
    /// Build a grid from a 2D matrix of 0/1 values.
    ///
    /// `matrix[row][col] == 1` maps to an alive cell at
    /// `(col, height - 1 - row)`; every other value maps to a dead cell.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyMatrix`] if the matrix has no rows or no
    /// columns, and [`EngineError::RaggedMatrix`] if rows differ in length.
    pub fn from_matrix(matrix: &[Vec<u8>]) -> Result<Self, EngineError> {
        let height = matrix.len();
        let width = matrix.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(EngineError::EmptyMatrix);
        }

        let mut cells = vec![CellState::Dead; width.saturating_mul(height)];
        for (row, values) in matrix.iter().enumerate() {
            if values.len() != width {
                return Err(EngineError::RaggedMatrix {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            // Row 0 of the matrix is the top row of the coordinate space.
            let y = height.saturating_sub(1).saturating_sub(row);
            for (x, value) in values.iter().enumerate() {
                if *value == 1 {
                    let index = y.saturating_mul(width).saturating_add(x);
                    if let Some(slot) = cells.get_mut(index) {
                        *slot = CellState::Alive;
                    }
                }
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (`width * height`).
    pub const fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether the coordinate lies inside the grid.
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// The state of a cell, or `None` if the coordinate is out of range.
    pub fn state(&self, cell: Cell) -> Option<CellState> {
        self.cells.get(self.index(cell)?).copied()
    }

    /// Whether the cell is inside the grid and alive.
    pub fn is_alive(&self, cell: Cell) -> bool {
        self.state(cell) == Some(CellState::Alive)
    }

    /// Set the state of a cell.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if the coordinate is out of range.
    pub fn set(&mut self, cell: Cell, state: CellState) -> Result<(), EngineError> {
        let index = self.index(cell).ok_or(EngineError::OutOfBounds(cell))?;
        let slot = self
            .cells
            .get_mut(index)
            .ok_or(EngineError::OutOfBounds(cell))?;
        *slot = state;
        Ok(())
    }

    /// Iterate over every coordinate in the grid.
    pub fn coordinates(&self) -> impl Iterator<Item = Cell> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }

    /// The set of currently alive cells.
    pub fn alive_cells(&self) -> BTreeSet<Cell> {
        self.coordinates().filter(|&c| self.is_alive(c)).collect()
    }

    /// The set of currently dead cells.
    pub fn dead_cells(&self) -> BTreeSet<Cell> {
        self.coordinates().filter(|&c| !self.is_alive(c)).collect()
    }

    /// Number of currently alive cells.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_alive()).count()
    }

    /// Count the alive cells in the Moore neighborhood of `cell`.
    ///
    /// In [`BoundaryMode::Traditional`] mode, neighbor coordinates outside
    /// the grid are absent and contribute nothing. In
    /// [`BoundaryMode::Toroidal`] mode, both axes wrap via modulo
    /// arithmetic, so all 8 neighbors always exist (on degenerate grids a
    /// wrapped neighbor may be the cell itself).
    ///
    /// Pure query: reads only the current generation, never mutates.
    pub fn alive_neighbor_count(&self, cell: Cell, boundary: BoundaryMode) -> u8 {
        MOORE_OFFSETS
            .iter()
            .filter_map(|&offset| self.neighbor(cell, offset, boundary))
            .filter(|&n| self.is_alive(n))
            .fold(0_u8, |count, _| count.saturating_add(1))
    }

    /// Resolve one neighbor offset under the given boundary topology.
    ///
    /// Returns `None` when the neighbor does not exist (off-grid in
    /// traditional mode, or on arithmetic failure for degenerate inputs).
    fn neighbor(&self, cell: Cell, (dx, dy): (i64, i64), boundary: BoundaryMode) -> Option<Cell> {
        let x = i64::try_from(cell.x).ok()?;
        let y = i64::try_from(cell.y).ok()?;
        let width = i64::try_from(self.width).ok()?;
        let height = i64::try_from(self.height).ok()?;

        let (nx, ny) = match boundary {
            BoundaryMode::Traditional => {
                let nx = x.checked_add(dx)?;
                let ny = y.checked_add(dy)?;
                if nx < 0 || nx >= width || ny < 0 || ny >= height {
                    return None;
                }
                (nx, ny)
            }
            BoundaryMode::Toroidal => {
                let nx = x.checked_add(dx)?.checked_rem_euclid(width)?;
                let ny = y.checked_add(dy)?.checked_rem_euclid(height)?;
                (nx, ny)
            }
        };

        Some(Cell::new(
            usize::try_from(nx).ok()?,
            usize::try_from(ny).ok()?,
        ))
    }

    /// Row-major storage index for a coordinate, or `None` if out of range.
    fn index(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        cell.y.checked_mul(self.width)?.checked_add(cell.x)
    }
}
