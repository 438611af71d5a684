//! Search settings read from a TOML file. Every key is optional:
//!
//! ```toml
//! engine = "dijkstra"
//! connectivity = "four"
//! metric = "manhattan"
//! max-reconstruction-depth = 10000
//! verbosity = "verbose"
//! ```

use crate::{
    grid::{Connectivity, DistanceMetric},
    search::{SearchEngineName, Verbosity},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SearchConfig {
    pub engine: SearchEngineName,
    pub connectivity: Connectivity,
    pub metric: DistanceMetric,
    /// Bound on path reconstruction, defaults to the number of nodes in the
    /// graph.
    pub max_reconstruction_depth: Option<usize>,
    pub verbosity: Verbosity,
}

impl SearchConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_config_uses_defaults() {
        let config = SearchConfig::from_text("").unwrap();
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.engine, SearchEngineName::AStar);
        assert_eq!(config.connectivity, Connectivity::Eight);
        assert_eq!(config.metric, DistanceMetric::Octile);
        assert_eq!(config.max_reconstruction_depth, None);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            engine = "gbfs"
            connectivity = "four"
            metric = "manhattan"
            max-reconstruction-depth = 64
            verbosity = "silent"
            "#
        )
        .unwrap();
        let config = SearchConfig::from_path(file.path()).unwrap();
        assert_eq!(
            config,
            SearchConfig {
                engine: SearchEngineName::GreedyBestFirst,
                connectivity: Connectivity::Four,
                metric: DistanceMetric::Manhattan,
                max_reconstruction_depth: Some(64),
                verbosity: Verbosity::Silent,
            }
        );
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(matches!(
            SearchConfig::from_text(r#"engine = "ida""#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SearchConfig::from_text("heuristic = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SearchConfig::from_path(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
