//! Automaton engine for the Lattice simulation.
//!
//! Simulates Conway's Game of Life and rule-parameterized variants over a
//! finite rectangular grid, producing a sequence of discrete generations
//! from an initial 0/1 matrix. Neighbor counting supports traditional
//! (hard-edge) and toroidal (wrapping) boundary topologies, and the run
//! loop detects extinction, steady states, and return-to-start periods.
//!
//! # Modules
//!
//! - [`automaton`] -- The engine: pure generation stepping, atomic delta
//!   application, and the driving run loop with stop policies.
//! - [`error`] -- [`EngineError`] for construction and application failures.
//! - [`grid`] -- Grid state, cell coordinates, and Moore-neighborhood
//!   counting under both boundary modes.
//! - [`pattern`] -- Text-pattern parsing with configurable glyphs and
//!   seeded random soups.
//! - [`recorder`] -- The [`Recorder`] seam the run loop reports each
//!   generation through.
//! - [`rule`] -- [`RuleParameters`] and the per-cell transition function.

pub mod automaton;
pub mod error;
pub mod grid;
pub mod pattern;
pub mod recorder;
pub mod rule;

// Re-export primary types at crate root.
pub use automaton::{Automaton, EndReason, GenerationDelta, SimulationReport, StopPolicy};
pub use error::EngineError;
pub use grid::{BoundaryMode, Cell, CellState, Grid};
pub use pattern::{PatternError, PatternGlyphs};
pub use recorder::{NoOpRecorder, Recorder};
pub use rule::RuleParameters;
