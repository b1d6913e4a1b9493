//! The recorder seam between the engine and presentation collaborators.
//!
//! The run loop invokes the recorder exactly once per iteration, before any
//! state mutation for that iteration. The recorder's return value cannot
//! influence simulation logic; implementations that perform I/O are expected
//! to log failures and carry on.

use std::collections::BTreeSet;

use crate::automaton::StopPolicy;
use crate::grid::Cell;

/// Per-generation observer invoked by [`Automaton::run`].
///
/// [`Automaton::run`]: crate::automaton::Automaton::run
pub trait Recorder {
    /// Called once per loop iteration with the generation about to be stepped.
    ///
    /// `alive` and `dead` partition the full cell set; `index` is the
    /// zero-based iteration number; `stop` is the active stop policy, passed
    /// through for labeling only.
    fn on_generation(
        &mut self,
        index: u64,
        alive: &BTreeSet<Cell>,
        dead: &BTreeSet<Cell>,
        stop: StopPolicy,
    );
}

/// A recorder that does nothing. Useful for tests and headless runs.
pub struct NoOpRecorder;

impl Recorder for NoOpRecorder {
    fn on_generation(
        &mut self,
        _index: u64,
        _alive: &BTreeSet<Cell>,
        _dead: &BTreeSet<Cell>,
        _stop: StopPolicy,
    ) {
    }
}
