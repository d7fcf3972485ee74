//! Diagnostic dump of live pulses.
//!
//! Off unless a path is configured. Each write replaces the file with one line
//! per live pulse; the simulation is only read.

use crate::error::{IoError, Result};
use neurobit_core::{Pulse, Simulation};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct DebugLog {
    path: PathBuf,
}

impl DebugLog {
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Builds a log from an optional configured path.
    #[must_use]
    pub fn from_setting(path: Option<&str>) -> Option<Self> {
        path.map(Self::new)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrites the log with the current live pulses.
    pub fn write(&self, sim: &Simulation) -> Result<()> {
        let file = File::create(&self.path)
            .map_err(|e| IoError::FileSystem(e).with_context(format!("creating {:?}", self.path)))?;
        let mut out = BufWriter::new(file);
        for pulse in sim.pulses() {
            writeln!(out, "{}", format_line(pulse))?;
        }
        out.flush()?;
        Ok(())
    }
}

/// One log line: `ID:<uuid> PAT:<bits> MASK:<bits> TTL:<n> POS:(r, c)`.
#[must_use]
pub fn format_line(pulse: &Pulse) -> String {
    let unit = pulse.unit();
    format!(
        "ID:{} PAT:{:08b} MASK:{:08b} TTL:{} POS:{}",
        unit.id(),
        unit.pattern(),
        unit.mask(),
        pulse.remaining_life(),
        pulse.position()
    )
}
