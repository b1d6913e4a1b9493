//! Text-frame recorder: one rendered grid per generation.
//!
//! The analog of the original per-generation picture dump. Each reported
//! generation is rendered as a glyph rectangle (top row first, matching the
//! pattern-file convention) and written to `gen_NNNN.txt` in the frames
//! directory. Recorder I/O failures are logged and never abort the
//! simulation.

use std::collections::BTreeSet;
use std::path::PathBuf;

use lattice_engine::{Cell, PatternGlyphs, Recorder, StopPolicy};
use tracing::{debug, warn};

use crate::error::RunnerError;

/// Renders generations as text frames and writes them to disk.
#[derive(Debug)]
pub struct FrameRecorder {
    /// Grid width in cells.
    width: usize,
    /// Grid height in cells.
    height: usize,
    /// Rendering glyphs.
    glyphs: PatternGlyphs,
    /// Destination directory; `None` disables writing.
    frames_dir: Option<PathBuf>,
    /// Number of frames successfully written.
    frames_written: u64,
}

impl FrameRecorder {
    /// Create a recorder for a grid of the given dimensions.
    ///
    /// Creates the frames directory if one is configured.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::FramesDir`] if the directory cannot be created.
    pub fn new(
        width: usize,
        height: usize,
        glyphs: PatternGlyphs,
        frames_dir: Option<PathBuf>,
    ) -> Result<Self, RunnerError> {
        if let Some(ref dir) = frames_dir {
            std::fs::create_dir_all(dir).map_err(|source| RunnerError::FramesDir { source })?;
        }
        Ok(Self {
            width,
            height,
            glyphs,
            frames_dir,
            frames_written: 0,
        })
    }

    /// Number of frames written so far.
    pub const fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Render one generation as a glyph rectangle, top row first.
    fn render(&self, alive: &BTreeSet<Cell>) -> String {
        let mut frame = String::with_capacity(
            self.width
                .saturating_add(1)
                .saturating_mul(self.height),
        );
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                if alive.contains(&Cell::new(x, y)) {
                    frame.push(self.glyphs.alive);
                } else {
                    frame.push(self.glyphs.dead);
                }
            }
            frame.push('\n');
        }
        frame
    }
}

impl Recorder for FrameRecorder {
    fn on_generation(
        &mut self,
        index: u64,
        alive: &BTreeSet<Cell>,
        _dead: &BTreeSet<Cell>,
        stop: StopPolicy,
    ) {
        debug!(generation = index, alive = alive.len(), stop = %stop, "generation reported");
        let Some(ref dir) = self.frames_dir else {
            return;
        };
        let frame = self.render(alive);
        let path = dir.join(format!("gen_{index:04}.txt"));
        match std::fs::write(&path, frame) {
            Ok(()) => {
                self.frames_written = self.frames_written.saturating_add(1);
            }
            Err(error) => {
                warn!(generation = index, path = %path.display(), %error, "failed to write frame");
            }
        }
    }
}
