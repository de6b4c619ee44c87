//! Settings file: table location and output preferences.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Decimal places used when printing a weight.
pub const DEFAULT_PRECISION: usize = 3;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Periodic table file; the bundled table is used when unset.
    #[serde(default)]
    pub table_path: Option<PathBuf>,

    #[serde(default = "default_precision")]
    pub precision: usize,

    #[serde(default)]
    pub json: bool,
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_path: None,
            precision: DEFAULT_PRECISION,
            json: false,
        }
    }
}

impl Config {
    /// Loads config from `path`, or the standard OS location
    /// (e.g. ~/.config/molwt/settings.json) when no path is given.
    /// Any problem falls back to defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::get_path(),
        };
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(cfg) => {
                log::debug!("config loaded from {}", path.display());
                cfg
            }
            Err(msg) => {
                log::warn!("{msg}; using defaults");
                Self::default()
            }
        }
    }

    fn load_from(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("error opening config {}: {}", path.display(), e))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| format!("error parsing config {}: {}", path.display(), e))
    }

    fn get_path() -> PathBuf {
        if let Some(proj) = ProjectDirs::from("org", "molwt", "molwt") {
            proj.config_dir().join("settings.json")
        } else {
            PathBuf::from("settings.json")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = Config::load(Some(Path::new("/nonexistent/settings.json")));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(file, r#"{{"table_path": "/data/pt.csv"}}"#).unwrap();
        file.flush().unwrap();

        let cfg = Config::load(Some(file.path()));
        assert_eq!(cfg.table_path, Some(PathBuf::from("/data/pt.csv")));
        assert_eq!(cfg.precision, DEFAULT_PRECISION);
        assert!(!cfg.json);
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(file, "{{ not json").unwrap();
        file.flush().unwrap();

        assert_eq!(Config::load(Some(file.path())), Config::default());
    }
}
