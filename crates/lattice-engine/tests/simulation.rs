//! End-to-end runs on well-known patterns.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::BTreeSet;

use lattice_engine::{
    Automaton, BoundaryMode, Cell, EndReason, NoOpRecorder, Recorder, RuleParameters, StopPolicy,
};

/// Records the alive-cell count of every reported generation.
struct CountRecorder {
    alive_counts: Vec<usize>,
    first_alive: Option<BTreeSet<Cell>>,
}

impl CountRecorder {
    const fn new() -> Self {
        Self {
            alive_counts: Vec::new(),
            first_alive: None,
        }
    }
}

impl Recorder for CountRecorder {
    fn on_generation(
        &mut self,
        _index: u64,
        alive: &BTreeSet<Cell>,
        dead: &BTreeSet<Cell>,
        _stop: StopPolicy,
    ) {
        // Every report must carry a full partition of the grid.
        assert!(alive.is_disjoint(dead));
        self.alive_counts.push(alive.len());
        if self.first_alive.is_none() {
            self.first_alive = Some(alive.clone());
        }
    }
}

fn blinker() -> Automaton {
    let matrix = vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]];
    Automaton::from_matrix(&matrix).expect("valid blinker matrix")
}

fn block() -> Automaton {
    let matrix = vec![
        vec![0, 0, 0, 0],
        vec![0, 1, 1, 0],
        vec![0, 1, 1, 0],
        vec![0, 0, 0, 0],
    ];
    Automaton::from_matrix(&matrix).expect("valid block matrix")
}

fn tub() -> Automaton {
    let matrix = vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]];
    Automaton::from_matrix(&matrix).expect("valid tub matrix")
}

fn toad() -> Automaton {
    let matrix = vec![
        vec![0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0],
        vec![0, 0, 1, 1, 1, 0],
        vec![0, 1, 1, 1, 0, 0],
        vec![0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0],
    ];
    Automaton::from_matrix(&matrix).expect("valid toad matrix")
}

#[test]
fn blinker_period_policy_stops_at_period_two() {
    let mut engine = blinker();
    let report = engine
        .run(
            10,
            StopPolicy::Period,
            RuleParameters::conway(),
            &mut NoOpRecorder,
        )
        .expect("run succeeds");
    assert_eq!(report.period, 2);
    assert_eq!(report.generations, 2);
    assert_eq!(report.end, EndReason::PeriodDetected);
}

#[test]
fn toad_period_policy_stops_at_period_two() {
    let mut engine = toad();
    let report = engine
        .run(
            10,
            StopPolicy::Period,
            RuleParameters::conway(),
            &mut NoOpRecorder,
        )
        .expect("run succeeds");
    assert_eq!(report.period, 2);
    assert_eq!(report.end, EndReason::PeriodDetected);
}

#[test]
fn iterations_policy_never_stops_early() {
    let mut engine = blinker();
    let mut recorder = CountRecorder::new();
    let report = engine
        .run(
            7,
            StopPolicy::Iterations,
            RuleParameters::conway(),
            &mut recorder,
        )
        .expect("run succeeds");
    // Period is still detected and reported, but the loop runs the full
    // budget: exactly 7 report calls.
    assert_eq!(report.period, 2);
    assert_eq!(report.generations, 7);
    assert_eq!(report.end, EndReason::IterationLimit);
    assert_eq!(recorder.alive_counts.len(), 7);
}

#[test]
fn block_steady_state_stops_at_first_iteration() {
    let mut engine = block();
    let mut recorder = CountRecorder::new();
    let report = engine
        .run(
            100,
            StopPolicy::SteadyState,
            RuleParameters::conway(),
            &mut recorder,
        )
        .expect("run succeeds");
    // A still life equals its own successor, which also happens to equal
    // the initial state, so the detected period is 1.
    assert_eq!(report.generations, 1);
    assert_eq!(report.period, 1);
    assert_eq!(report.end, EndReason::SteadyState);
    assert_eq!(recorder.alive_counts, vec![4]);
}

#[test]
fn tub_is_unchanged_after_any_number_of_steps() {
    let mut engine = tub();
    let initial = engine.grid().alive_cells();
    let report = engine
        .run(
            5,
            StopPolicy::Iterations,
            RuleParameters::conway(),
            &mut NoOpRecorder,
        )
        .expect("run succeeds");
    assert_eq!(report.generations, 5);
    assert_eq!(engine.grid().alive_cells(), initial);
}

#[test]
fn lone_cell_goes_extinct_and_reports_empty_generation_once() {
    let matrix = vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]];
    let mut engine = Automaton::from_matrix(&matrix).expect("valid matrix");
    let mut recorder = CountRecorder::new();
    let report = engine
        .run(
            10,
            StopPolicy::Iterations,
            RuleParameters::conway(),
            &mut recorder,
        )
        .expect("run succeeds");
    // Generation 0 (one cell) and generation 1 (extinct) are each reported
    // exactly once; the loop then terminates.
    assert_eq!(recorder.alive_counts, vec![1, 0]);
    assert_eq!(report.generations, 2);
    assert_eq!(report.end, EndReason::Extinction);
    assert_eq!(report.period, 0);
}

#[test]
fn full_toroidal_grid_dies_of_overpopulation() {
    let matrix = vec![vec![1, 1, 1], vec![1, 1, 1], vec![1, 1, 1]];
    let mut engine = Automaton::from_matrix(&matrix).expect("valid matrix");
    let rule = RuleParameters::conway().with_boundary(BoundaryMode::Toroidal);
    let mut recorder = CountRecorder::new();
    let report = engine
        .run(5, StopPolicy::Iterations, rule, &mut recorder)
        .expect("run succeeds");
    // Every cell sees all 8 wrapped neighbors alive, so the whole grid dies
    // in one step.
    assert_eq!(recorder.alive_counts, vec![9, 0]);
    assert_eq!(report.end, EndReason::Extinction);
}

#[test]
fn recorder_sees_the_initial_generation_first() {
    let mut engine = blinker();
    let initial = engine.grid().alive_cells();
    let mut recorder = CountRecorder::new();
    let _report = engine
        .run(
            3,
            StopPolicy::Iterations,
            RuleParameters::conway(),
            &mut recorder,
        )
        .expect("run succeeds");
    assert_eq!(recorder.first_alive, Some(initial));
}
