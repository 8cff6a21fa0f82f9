//! Data source configuration

use std::path::{Path, PathBuf};
use vaxtrack_diagnostics::{Result, VaxError};

/// Environment variable naming the data directory
pub const DATA_DIR_ENV: &str = "VAXTRACK_DATA_DIR";

/// Data directory used when nothing else is configured
pub const DEFAULT_DATA_DIR: &str = "resources";

/// Bottle order files inside a data directory, one per manufacturer
pub const BOTTLE_FILES: [&str; 3] = ["Antiqua.source", "SolarBuddhica.source", "Zerpfy.source"];

/// Administration file inside a data directory
pub const ADMINISTRATION_FILE: &str = "vaccinations.source";

/// Where the bottle and administration records are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSources {
    /// Bottle files, loaded in order
    pub bottle_files: Vec<PathBuf>,
    pub administration_file: PathBuf,
}

impl Default for DataSources {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DATA_DIR)
    }
}

impl DataSources {
    /// The standard file layout inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            bottle_files: BOTTLE_FILES.iter().map(|f| dir.join(f)).collect(),
            administration_file: dir.join(ADMINISTRATION_FILE),
        }
    }

    /// Replace the bottle files; an empty list keeps the current ones
    pub fn with_bottle_files(mut self, files: Vec<PathBuf>) -> Self {
        if !files.is_empty() {
            self.bottle_files = files;
        }
        self
    }

    pub fn with_administration_file(mut self, file: PathBuf) -> Self {
        self.administration_file = file;
        self
    }

    /// Check that every configured file exists
    pub fn validate(&self) -> Result<()> {
        let mut missing = self
            .bottle_files
            .iter()
            .chain(std::iter::once(&self.administration_file))
            .filter(|path| !path.is_file())
            .map(|path| VaxError::config(format!("data file not found: {}", path.display())))
            .collect::<Vec<_>>();

        match missing.len() {
            0 => Ok(()),
            1 => Err(missing.remove(0)),
            _ => Err(VaxError::Multiple(missing)),
        }
    }
}
