//! The automaton engine: generation stepping and the driving run loop.
//!
//! [`Automaton`] owns the grid state. One step is split into a pure query,
//! [`Automaton::next_generation`], which reads a frozen snapshot of the
//! current generation and returns the full next-generation partition, and an
//! atomic mutation, [`Automaton::apply_delta`]. Generation N+1 is therefore
//! always a pure function of generation N as a whole, never of a partially
//! updated mix of old and new cells.
//!
//! [`Automaton::run`] drives the loop with three stop policies:
//!
//! - `Iterations` -- run the full iteration budget (early exit only on
//!   extinction).
//! - `SteadyState` -- stop when the proposed next generation equals the
//!   current one.
//! - `Period` -- stop when the proposed next generation reproduces the
//!   *initial* configuration (a return-to-start detector, not general cycle
//!   detection).
//!
//! Period detection and steady-state detection use different baselines on
//! purpose; unifying them would change observable stop iterations.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::EngineError;
use crate::grid::{Cell, CellState, Grid};
use crate::recorder::Recorder;
use crate::rule::RuleParameters;

/// When the run loop terminates before exhausting its iteration budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StopPolicy {
    /// Stop only after the requested number of iterations.
    Iterations,
    /// Stop as soon as a generation equals its successor.
    SteadyState,
    /// Stop as soon as the initial configuration reappears.
    Period,
}

impl fmt::Display for StopPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iterations => write!(f, "iterations"),
            Self::SteadyState => write!(f, "steady-state"),
            Self::Period => write!(f, "period"),
        }
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndReason {
    /// The iteration budget was exhausted.
    IterationLimit,
    /// Every cell died; the empty generation was reported once.
    Extinction,
    /// The proposed next generation equaled the current one.
    SteadyState,
    /// The proposed next generation reproduced the initial configuration.
    PeriodDetected,
}

/// Outcome of one invocation of [`Automaton::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Smallest detected period length, or 0 if none was detected within
    /// the iteration budget (regardless of stop policy).
    pub period: u64,
    /// Number of generations reported to the recorder.
    pub generations: u64,
    /// Why the run ended.
    pub end: EndReason,
}

/// The disjoint alive/dead partition produced by one generation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationDelta {
    /// Cells alive in the next generation.
    pub alive: BTreeSet<Cell>,
    /// Cells dead in the next generation.
    pub dead: BTreeSet<Cell>,
}

/// The automaton engine owning the grid state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    grid: Grid,
}

impl Automaton {
    /// Build an engine from a 2D matrix of 0/1 values.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyMatrix`] or [`EngineError::RaggedMatrix`]
    /// for malformed input; see [`Grid::from_matrix`].
    pub fn from_matrix(matrix: &[Vec<u8>]) -> Result<Self, EngineError> {
        Ok(Self {
            grid: Grid::from_matrix(matrix)?,
        })
    }

    /// The current grid state.
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Compute the full next-generation partition under `rule`.
    ///
    /// Pure query: reads only the current generation and mutates nothing.
    /// The returned sets are disjoint and together cover every cell.
    pub fn next_generation(&self, rule: RuleParameters) -> GenerationDelta {
        let mut alive = BTreeSet::new();
        let mut dead = BTreeSet::new();
        for cell in self.grid.coordinates() {
            let current = if self.grid.is_alive(cell) {
                CellState::Alive
            } else {
                CellState::Dead
            };
            let neighbors = self.grid.alive_neighbor_count(cell, rule.boundary);
            match rule.next_state(current, neighbors) {
                CellState::Alive => {
                    alive.insert(cell);
                }
                CellState::Dead => {
                    dead.insert(cell);
                }
            }
        }
        GenerationDelta { alive, dead }
    }

    /// Apply a generation delta atomically.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::BrokenPartition`] if the delta does not cover
    /// every cell exactly once, or [`EngineError::OutOfBounds`] if it names
    /// a cell outside the grid. Deltas produced by
    /// [`Automaton::next_generation`] always satisfy both conditions.
    pub fn apply_delta(&mut self, delta: &GenerationDelta) -> Result<(), EngineError> {
        let covered = delta.alive.len().checked_add(delta.dead.len());
        if covered != Some(self.grid.cell_count()) || !delta.alive.is_disjoint(&delta.dead) {
            return Err(EngineError::BrokenPartition {
                alive: delta.alive.len(),
                dead: delta.dead.len(),
                expected: self.grid.cell_count(),
            });
        }
        for &cell in &delta.alive {
            self.grid.set(cell, CellState::Alive)?;
        }
        for &cell in &delta.dead {
            self.grid.set(cell, CellState::Dead)?;
        }
        Ok(())
    }

    /// Run up to `generations` iterations under `rule` and `stop`.
    ///
    /// Each iteration reports the current generation to `recorder` first,
    /// then checks extinction, then computes the next generation and runs
    /// period and steady-state detection on the proposal before applying it.
    /// Period detection compares the proposal against the initial alive set;
    /// steady-state detection compares it against the current alive set.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineError`] from delta application; unreachable for
    /// deltas the engine computes itself.
    pub fn run(
        &mut self,
        generations: u64,
        stop: StopPolicy,
        rule: RuleParameters,
        recorder: &mut dyn Recorder,
    ) -> Result<SimulationReport, EngineError> {
        let initial_alive = self.grid.alive_cells();
        let mut period: u64 = 0;
        let mut period_found = false;
        let mut reported: u64 = 0;
        let mut end = EndReason::IterationLimit;

        info!(
            width = self.grid.width(),
            height = self.grid.height(),
            generations,
            stop = %stop,
            boundary = %rule.boundary,
            "simulation starting"
        );

        for index in 0..generations {
            let alive = self.grid.alive_cells();
            let dead = self.grid.dead_cells();
            recorder.on_generation(index, &alive, &dead, stop);
            reported = reported.saturating_add(1);

            // The extinct generation is still reported exactly once.
            if alive.is_empty() {
                info!(generation = index, "population extinct");
                end = EndReason::Extinction;
                break;
            }

            let delta = self.next_generation(rule);

            if !period_found && delta.alive == initial_alive {
                period = index.saturating_add(1);
                period_found = true;
                if stop == StopPolicy::Period {
                    info!(period, generation = index, "initial configuration reproduced");
                    end = EndReason::PeriodDetected;
                    break;
                }
            }

            if stop == StopPolicy::SteadyState && delta.alive == alive {
                info!(generation = index, "steady state reached");
                end = EndReason::SteadyState;
                break;
            }

            self.apply_delta(&delta)?;
            debug!(
                generation = index,
                alive = delta.alive.len(),
                "generation applied"
            );
        }

        let report = SimulationReport {
            period,
            generations: reported,
            end,
        };
        info!(
            period = report.period,
            generations = report.generations,
            end = ?report.end,
            "simulation finished"
        );
        Ok(report)
    }
}
