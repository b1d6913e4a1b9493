//! Rule parameters and the per-cell transition function.
//!
//! The classic Conway rule is the default (`underpopulation = 2`,
//! `overpopulation = 3`, `rebirth = 3`), but every threshold is
//! configurable, which is enough to express the B/S-style variants the
//! simulation supports.

use serde::{Deserialize, Serialize};

use crate::grid::{BoundaryMode, CellState};

/// Immutable rule configuration for a simulation run.
///
/// An alive cell dies when its alive-neighbor count falls below
/// `underpopulation` or rises above `overpopulation` (both inclusive
/// thresholds for survival). A dead cell becomes alive when the count is
/// exactly `rebirth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleParameters {
    /// Minimum alive-neighbor count (inclusive) for an alive cell to survive.
    pub underpopulation: u8,
    /// Maximum alive-neighbor count (inclusive) for an alive cell to survive.
    pub overpopulation: u8,
    /// Exact alive-neighbor count that births a dead cell.
    pub rebirth: u8,
    /// Boundary topology used for neighbor counting.
    pub boundary: BoundaryMode,
}

impl RuleParameters {
    /// The classic Conway rule (B3/S23) with traditional boundaries.
    pub const fn conway() -> Self {
        Self {
            underpopulation: 2,
            overpopulation: 3,
            rebirth: 3,
            boundary: BoundaryMode::Traditional,
        }
    }

    /// Same thresholds, toroidal boundaries.
    pub const fn with_boundary(self, boundary: BoundaryMode) -> Self {
        Self { boundary, ..self }
    }

    /// The next state of a single cell given its alive-neighbor count.
    ///
    /// Pure function of the current state and the count; the caller supplies
    /// the count from a frozen snapshot of the current generation.
    pub const fn next_state(self, current: CellState, alive_neighbors: u8) -> CellState {
        match current {
            CellState::Dead => {
                if alive_neighbors == self.rebirth {
                    CellState::Alive
                } else {
                    CellState::Dead
                }
            }
            CellState::Alive => {
                if alive_neighbors < self.underpopulation || alive_neighbors > self.overpopulation {
                    CellState::Dead
                } else {
                    CellState::Alive
                }
            }
        }
    }
}

impl Default for RuleParameters {
    fn default() -> Self {
        Self::conway()
    }
}
