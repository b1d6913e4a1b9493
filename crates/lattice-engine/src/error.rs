//! Error types for the `lattice-engine` crate.
//!
//! Construction from malformed input is the only user-facing failure class.
//! A broken generation partition is a defect-class failure: the engine makes
//! it unreachable by deriving deltas from the grid itself, and surfaces it
//! as an error only so that a buggy caller of [`apply_delta`] cannot corrupt
//! the grid silently.
//!
//! [`apply_delta`]: crate::automaton::Automaton::apply_delta

use crate::grid::Cell;

/// Errors that can occur during engine construction or generation application.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The input matrix has no rows, or rows with no columns.
    #[error("initial matrix is empty")]
    EmptyMatrix,

    /// The input matrix is not rectangular.
    #[error("matrix row {row} has {actual} columns, expected {expected}")]
    RaggedMatrix {
        /// Zero-based index of the offending row.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        actual: usize,
    },

    /// A generation delta referenced a cell outside the grid.
    #[error("cell {0} is outside the grid")]
    OutOfBounds(Cell),

    /// A generation delta does not partition the full cell set.
    #[error(
        "generation delta is not a partition: {alive} alive + {dead} dead cells \
         over a grid of {expected}"
    )]
    BrokenPartition {
        /// Number of cells in the alive half of the delta.
        alive: usize,
        /// Number of cells in the dead half of the delta.
        dead: usize,
        /// Total number of cells in the grid.
        expected: usize,
    },
}
