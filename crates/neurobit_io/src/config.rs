//! Loading `AppConfig` from disk.

use crate::error::{IoError, Result};
use neurobit_core::config::AppConfig;
use std::path::Path;

/// Reads and validates the configuration at `path`.
///
/// A missing file yields the defaults. A file that exists but does not parse
/// or validate is an error: a bad maze layout must stop setup rather than be
/// silently replaced.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::info!(path = ?path, "No config file, using defaults");
        return Ok(AppConfig::default());
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| IoError::FileSystem(e).with_context(format!("reading {:?}", path)))?;
    AppConfig::from_toml(&content).map_err(|e| IoError::config(format!("{:?}: {:#}", path, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_file_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[maze]\nrows = 8\ncols = 8\n\n[pulse]\nttl = 20").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.maze.rows, 8);
        assert_eq!(config.pulse.ttl, 20);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[maze]\nrows = 1").unwrap();
        assert!(matches!(load_config(file.path()), Err(IoError::Config(_))));
    }
}
