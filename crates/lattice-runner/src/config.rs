//! Configuration loading and typed config structures for the runner.
//!
//! The canonical configuration lives in `lattice-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure, and provides a loader that reads and validates the file. Every
//! field has a default, so a missing file or a partial file still yields a
//! usable configuration.

use std::path::{Path, PathBuf};

use lattice_engine::{BoundaryMode, PatternGlyphs, RuleParameters, StopPolicy};
use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level runner configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RunnerConfig {
    /// Initial pattern source.
    #[serde(default)]
    pub pattern: PatternConfig,

    /// Transition-rule thresholds and boundary topology.
    #[serde(default)]
    pub rule: RuleConfig,

    /// Run length and stop policy.
    #[serde(default)]
    pub run: RunConfig,

    /// Frame and report output.
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RunnerConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yml::from_str(&contents)?)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Initial pattern configuration.
///
/// A file path takes precedence over a random soup; at least one of the two
/// must be set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PatternConfig {
    /// Path to a text pattern file.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Glyph marking an alive cell in the pattern file.
    #[serde(default = "default_alive_glyph")]
    pub alive_glyph: char,

    /// Glyph marking a dead cell in the pattern file.
    #[serde(default = "default_dead_glyph")]
    pub dead_glyph: char,

    /// Seeded random soup, used when no path is set.
    #[serde(default)]
    pub random: Option<RandomPatternConfig>,
}

impl PatternConfig {
    /// The configured glyph pair.
    pub const fn glyphs(&self) -> PatternGlyphs {
        PatternGlyphs {
            alive: self.alive_glyph,
            dead: self.dead_glyph,
        }
    }
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            path: None,
            alive_glyph: default_alive_glyph(),
            dead_glyph: default_dead_glyph(),
            random: None,
        }
    }
}

/// Seeded random soup parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RandomPatternConfig {
    /// Grid width in cells.
    #[serde(default = "default_soup_width")]
    pub width: usize,

    /// Grid height in cells.
    #[serde(default = "default_soup_height")]
    pub height: usize,

    /// Probability of each cell starting alive.
    #[serde(default = "default_soup_density")]
    pub density: f64,

    /// Random seed for reproducibility.
    #[serde(default = "default_soup_seed")]
    pub seed: u64,
}

impl Default for RandomPatternConfig {
    fn default() -> Self {
        Self {
            width: default_soup_width(),
            height: default_soup_height(),
            density: default_soup_density(),
            seed: default_soup_seed(),
        }
    }
}

/// Transition-rule configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleConfig {
    /// Minimum alive-neighbor count (inclusive) for survival.
    #[serde(default = "default_underpopulation")]
    pub underpopulation: u8,

    /// Maximum alive-neighbor count (inclusive) for survival.
    #[serde(default = "default_overpopulation")]
    pub overpopulation: u8,

    /// Exact alive-neighbor count that births a dead cell.
    #[serde(default = "default_rebirth")]
    pub rebirth: u8,

    /// Boundary topology.
    #[serde(default)]
    pub boundary: BoundaryMode,
}

impl RuleConfig {
    /// Convert to the engine's rule parameters.
    pub const fn to_parameters(&self) -> RuleParameters {
        RuleParameters {
            underpopulation: self.underpopulation,
            overpopulation: self.overpopulation,
            rebirth: self.rebirth,
            boundary: self.boundary,
        }
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            underpopulation: default_underpopulation(),
            overpopulation: default_overpopulation(),
            rebirth: default_rebirth(),
            boundary: BoundaryMode::Traditional,
        }
    }
}

/// Run length and stop policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Maximum number of generations to simulate.
    #[serde(default = "default_generations")]
    pub generations: u64,

    /// Stop policy for the run.
    #[serde(default = "default_stop_policy")]
    pub stop: StopPolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            generations: default_generations(),
            stop: default_stop_policy(),
        }
    }
}

/// Frame and report output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Directory for per-generation text frames; `null` disables frames.
    #[serde(default = "default_frames_dir")]
    pub frames_dir: Option<PathBuf>,

    /// Glyph used for alive cells in rendered frames.
    #[serde(default = "default_alive_glyph")]
    pub alive_glyph: char,

    /// Glyph used for dead cells in rendered frames.
    #[serde(default = "default_dead_glyph")]
    pub dead_glyph: char,

    /// Optional path for the final JSON run report.
    #[serde(default)]
    pub report_path: Option<PathBuf>,
}

impl OutputConfig {
    /// The configured rendering glyph pair.
    pub const fn glyphs(&self) -> PatternGlyphs {
        PatternGlyphs {
            alive: self.alive_glyph,
            dead: self.dead_glyph,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            frames_dir: default_frames_dir(),
            alive_glyph: default_alive_glyph(),
            dead_glyph: default_dead_glyph(),
            report_path: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

const fn default_alive_glyph() -> char {
    'o'
}

const fn default_dead_glyph() -> char {
    '.'
}

const fn default_soup_width() -> usize {
    32
}

const fn default_soup_height() -> usize {
    32
}

const fn default_soup_density() -> f64 {
    0.35
}

const fn default_soup_seed() -> u64 {
    42
}

const fn default_underpopulation() -> u8 {
    2
}

const fn default_overpopulation() -> u8 {
    3
}

const fn default_rebirth() -> u8 {
    3
}

const fn default_generations() -> u64 {
    100
}

const fn default_stop_policy() -> StopPolicy {
    StopPolicy::Iterations
}

fn default_frames_dir() -> Option<PathBuf> {
    Some(PathBuf::from("frames"))
}

fn default_log_level() -> String {
    String::from("info")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_yields_defaults() {
        let config = RunnerConfig::parse("{}").unwrap();
        assert_eq!(config, RunnerConfig::default());
        assert_eq!(config.rule.to_parameters(), RuleParameters::conway());
        assert_eq!(config.run.generations, 100);
        assert_eq!(config.run.stop, StopPolicy::Iterations);
    }

    #[test]
    fn partial_yaml_fills_remaining_defaults() {
        let yaml = "
rule:
  rebirth: 2
  boundary: toroidal
run:
  stop: steady-state
";
        let config = RunnerConfig::parse(yaml).unwrap();
        assert_eq!(config.rule.rebirth, 2);
        assert_eq!(config.rule.underpopulation, 2);
        assert_eq!(config.rule.boundary, BoundaryMode::Toroidal);
        assert_eq!(config.run.stop, StopPolicy::SteadyState);
        assert_eq!(config.run.generations, 100);
    }

    #[test]
    fn pattern_section_parses() {
        let yaml = "
pattern:
  path: patterns/glider.txt
  alive_glyph: \"#\"
  dead_glyph: \" \"
";
        let config = RunnerConfig::parse(yaml).unwrap();
        assert_eq!(
            config.pattern.path.as_deref(),
            Some(Path::new("patterns/glider.txt"))
        );
        assert_eq!(config.pattern.glyphs().alive, '#');
        assert_eq!(config.pattern.glyphs().dead, ' ');
    }

    #[test]
    fn random_soup_section_parses() {
        let yaml = "
pattern:
  random:
    width: 16
    height: 8
    density: 0.5
    seed: 7
";
        let config = RunnerConfig::parse(yaml).unwrap();
        let soup = config.pattern.random.unwrap();
        assert_eq!(soup.width, 16);
        assert_eq!(soup.height, 8);
        assert_eq!(soup.seed, 7);
    }

    #[test]
    fn unknown_stop_policy_rejected() {
        let result = RunnerConfig::parse("run:\n  stop: forever\n");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_boundary_rejected() {
        let result = RunnerConfig::parse("rule:\n  boundary: spherical\n");
        assert!(result.is_err());
    }

    #[test]
    fn frames_can_be_disabled() {
        let config = RunnerConfig::parse("output:\n  frames_dir: null\n").unwrap();
        assert_eq!(config.output.frames_dir, None);
    }
}
