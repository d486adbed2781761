//! Config file loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Default config path: `<config dir>/greetly/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("greetly").join("config.toml"))
}

/// Load the config from `path`.
///
/// A missing file yields the defaults. Any other failure is an error, so a
/// broken file never silently turns into default behavior.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(err) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: err,
            })
        }
    };
    toml::from_str(&raw).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        source: err,
    })
}
