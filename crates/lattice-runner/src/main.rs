//! Simulation runner binary for Lattice.
//!
//! Wires together configuration loading, the automaton engine, and the
//! text-frame recorder, then runs the simulation to completion and logs
//! the report.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `lattice-config.yaml` (defaults when absent)
//! 2. Initialize structured logging (tracing)
//! 3. Load the initial pattern (file or seeded random soup)
//! 4. Construct the automaton
//! 5. Run the simulation with the frame recorder
//! 6. Log the report, optionally writing it as JSON

mod config;
mod error;
mod frames;

use std::path::Path;

use lattice_engine::{Automaton, SimulationReport, pattern};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::RunnerConfig;
use crate::error::RunnerError;
use crate::frames::FrameRecorder;

/// Application entry point for the runner.
///
/// # Errors
///
/// Returns an error if configuration, pattern loading, or the run fails.
fn main() -> Result<(), RunnerError> {
    // 1. Load configuration.
    let config = load_config()?;

    // 2. Initialize structured logging. RUST_LOG overrides the config level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("lattice-runner starting");
    info!(
        generations = config.run.generations,
        stop = %config.run.stop,
        boundary = %config.rule.boundary,
        underpopulation = config.rule.underpopulation,
        overpopulation = config.rule.overpopulation,
        rebirth = config.rule.rebirth,
        "Configuration loaded"
    );

    // 3. Load the initial pattern.
    let matrix = load_matrix(&config)?;
    let alive_seed: usize = matrix
        .iter()
        .map(|row| row.iter().filter(|&&v| v == 1).count())
        .sum();
    info!(
        rows = matrix.len(),
        columns = matrix.first().map_or(0, Vec::len),
        alive = alive_seed,
        "Pattern loaded"
    );

    // 4. Construct the automaton.
    let mut engine = Automaton::from_matrix(&matrix)?;
    info!(
        width = engine.grid().width(),
        height = engine.grid().height(),
        "Automaton constructed"
    );

    // 5. Run the simulation with the frame recorder.
    let mut recorder = FrameRecorder::new(
        engine.grid().width(),
        engine.grid().height(),
        config.output.glyphs(),
        config.output.frames_dir.clone(),
    )?;

    let report = engine.run(
        config.run.generations,
        config.run.stop,
        config.rule.to_parameters(),
        &mut recorder,
    )?;

    // 6. Log the report.
    info!(
        period = report.period,
        generations = report.generations,
        end = ?report.end,
        frames_written = recorder.frames_written(),
        "Run complete"
    );

    if let Some(ref path) = config.output.report_path {
        write_report(path, &report)?;
        info!(path = %path.display(), "Run report written");
    }

    Ok(())
}

/// Load the runner configuration from `lattice-config.yaml`.
///
/// Looks for the config file relative to the current working directory and
/// falls back to defaults when it is absent.
fn load_config() -> Result<RunnerConfig, RunnerError> {
    let config_path = Path::new("lattice-config.yaml");
    if config_path.exists() {
        Ok(RunnerConfig::from_file(config_path)?)
    } else {
        Ok(RunnerConfig::default())
    }
}

/// Obtain the initial 0/1 matrix from the configured pattern source.
///
/// A pattern file takes precedence; otherwise a seeded random soup is
/// generated.
fn load_matrix(config: &RunnerConfig) -> Result<Vec<Vec<u8>>, RunnerError> {
    if let Some(ref path) = config.pattern.path {
        return Ok(pattern::load(path, config.pattern.glyphs())?);
    }
    if let Some(ref soup) = config.pattern.random {
        info!(
            width = soup.width,
            height = soup.height,
            density = soup.density,
            seed = soup.seed,
            "Generating random soup"
        );
        return Ok(pattern::random(
            soup.width,
            soup.height,
            soup.density,
            soup.seed,
        ));
    }
    Err(RunnerError::MissingPattern)
}

/// Serialize the run report as pretty JSON to the given path.
fn write_report(path: &Path, report: &SimulationReport) -> Result<(), RunnerError> {
    let json = serde_json::to_string_pretty(report).map_err(|e| RunnerError::Report {
        message: format!("{e}"),
    })?;
    std::fs::write(path, json).map_err(|e| RunnerError::Report {
        message: format!("{e}"),
    })?;
    Ok(())
}
