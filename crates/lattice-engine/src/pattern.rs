//! Initial-pattern loading: symbolic text grids and seeded random soups.
//!
//! A pattern file is a rectangle of glyphs, one row per line, with
//! configurable alive/dead symbols (defaults `o` and `.`). Parsing is a pure
//! text-to-matrix transform; the engine itself only ever sees the resulting
//! 0/1 matrix.

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Alive/dead glyph pair for parsing and rendering text patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PatternGlyphs {
    /// Glyph marking an alive cell.
    pub alive: char,
    /// Glyph marking a dead cell.
    pub dead: char,
}

impl Default for PatternGlyphs {
    fn default() -> Self {
        Self {
            alive: 'o',
            dead: '.',
        }
    }
}

/// Errors that can occur while loading a pattern.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The pattern text contained no rows or no columns.
    #[error("pattern is empty")]
    Empty,

    /// A row's glyph count differs from the first row's.
    #[error("pattern row {row} has {actual} glyphs, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Glyph count of the first row.
        expected: usize,
        /// Glyph count of the offending row.
        actual: usize,
    },

    /// A glyph matched neither the alive nor the dead symbol.
    #[error("unknown glyph {glyph:?} at row {row}, column {column}")]
    UnknownGlyph {
        /// Zero-based row of the glyph.
        row: usize,
        /// Zero-based column of the glyph.
        column: usize,
        /// The offending character.
        glyph: char,
    },

    /// The pattern file could not be read.
    #[error("failed to read pattern file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

/// Parse a symbolic text grid into a 0/1 matrix.
///
/// Row 0 of the result is the first line of text (the top row of the visual
/// pattern). A single trailing newline is tolerated.
///
/// # Errors
///
/// Returns [`PatternError::Empty`] for empty input,
/// [`PatternError::RaggedRow`] when lines differ in length, and
/// [`PatternError::UnknownGlyph`] for any character outside the glyph pair.
pub fn parse(text: &str, glyphs: PatternGlyphs) -> Result<Vec<Vec<u8>>, PatternError> {
    let trimmed = text.strip_suffix('\n').unwrap_or(text);
    if trimmed.is_empty() {
        return Err(PatternError::Empty);
    }

    let mut matrix: Vec<Vec<u8>> = Vec::new();
    let mut expected: Option<usize> = None;
    for (row, line) in trimmed.split('\n').enumerate() {
        let mut values = Vec::new();
        for (column, glyph) in line.chars().enumerate() {
            if glyph == glyphs.alive {
                values.push(1);
            } else if glyph == glyphs.dead {
                values.push(0);
            } else {
                return Err(PatternError::UnknownGlyph { row, column, glyph });
            }
        }

        match expected {
            None => {
                if values.is_empty() {
                    return Err(PatternError::Empty);
                }
                expected = Some(values.len());
            }
            Some(width) if values.len() != width => {
                return Err(PatternError::RaggedRow {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            Some(_) => {}
        }
        matrix.push(values);
    }

    Ok(matrix)
}

/// Read and parse a pattern file.
///
/// # Errors
///
/// Returns [`PatternError::Io`] if the file cannot be read, plus any error
/// [`parse`] can produce.
pub fn load(path: &Path, glyphs: PatternGlyphs) -> Result<Vec<Vec<u8>>, PatternError> {
    let text = std::fs::read_to_string(path)?;
    parse(&text, glyphs)
}

/// Generate a seeded random 0/1 matrix ("soup").
///
/// Each cell is alive with probability `density` (clamped to `[0, 1]`).
/// The same seed always yields the same matrix.
pub fn random(width: usize, height: usize, density: f64, seed: u64) -> Vec<Vec<u8>> {
    let density = density.clamp(0.0, 1.0);
    let mut rng = StdRng::seed_from_u64(seed);
    (0..height)
        .map(|_| {
            (0..width)
                .map(|_| u8::from(rng.random_bool(density)))
                .collect()
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_glyphs() {
        let matrix = parse(".o.\nooo\n.o.", PatternGlyphs::default()).unwrap();
        assert_eq!(
            matrix,
            vec![vec![0, 1, 0], vec![1, 1, 1], vec![0, 1, 0]]
        );
    }

    #[test]
    fn parse_tolerates_single_trailing_newline() {
        let matrix = parse("oo\noo\n", PatternGlyphs::default()).unwrap();
        assert_eq!(matrix.len(), 2);
    }

    #[test]
    fn parse_custom_glyphs() {
        let glyphs = PatternGlyphs {
            alive: 'a',
            dead: 'd',
        };
        let matrix = parse("ad\nda", glyphs).unwrap();
        assert_eq!(matrix, vec![vec![1, 0], vec![0, 1]]);
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(matches!(
            parse("", PatternGlyphs::default()),
            Err(PatternError::Empty)
        ));
        assert!(matches!(
            parse("\n", PatternGlyphs::default()),
            Err(PatternError::Empty)
        ));
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let result = parse("ooo\noo", PatternGlyphs::default());
        assert!(matches!(
            result,
            Err(PatternError::RaggedRow {
                row: 1,
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn parse_rejects_unknown_glyph() {
        let result = parse(".o\n.x", PatternGlyphs::default());
        assert!(matches!(
            result,
            Err(PatternError::UnknownGlyph {
                row: 1,
                column: 1,
                glyph: 'x'
            })
        ));
    }

    #[test]
    fn random_density_extremes() {
        let all_dead = random(4, 3, 0.0, 7);
        assert!(all_dead.iter().flatten().all(|&v| v == 0));

        let all_alive = random(4, 3, 1.0, 7);
        assert!(all_alive.iter().flatten().all(|&v| v == 1));
    }

    #[test]
    fn random_is_deterministic_per_seed() {
        assert_eq!(random(8, 8, 0.4, 123), random(8, 8, 0.4, 123));
        assert_eq!(random(8, 8, 0.4, 123).len(), 8);
    }
}
