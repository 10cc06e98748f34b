//! Configuration loading
//!
//! Planner and cohesion settings live in one TOML file. An explicitly named
//! file must exist and parse; the implicit `modmap.toml` in the working
//! directory is best-effort and falls back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::cohesion::CohesionConfig;
use crate::core::errors::{Error, Result};
use crate::priority::planner::PlannerConfig;

/// File consulted in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "modmap.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModmapConfig {
    pub planner: PlannerConfig,
    pub cohesion: CohesionConfig,
}

impl ModmapConfig {
    pub fn validate(&self) -> Result<()> {
        self.planner.validate()?;
        self.cohesion.validate()
    }

    /// Load and validate configuration.
    ///
    /// With `explicit`, the file must be readable and well-formed. Without
    /// it, a `modmap.toml` in the working directory is used when present
    /// and defaults apply otherwise. Validation errors are fatal either way.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::from_path(path)?,
            None => {
                try_load_from_path(Path::new(DEFAULT_CONFIG_FILE)).unwrap_or_else(|| {
                    log::debug!("No {DEFAULT_CONFIG_FILE} found. Using default config.");
                    Self::default()
                })
            }
        };
        config.validate()?;
        Ok(config)
    }

    fn from_path(path: &Path) -> Result<Self> {
        let contents = read_config_file(path).map_err(|e| {
            Error::Configuration(format!("failed to read {}: {e}", path.display()))
        })?;
        toml::from_str(&contents).map_err(|e| {
            Error::Configuration(format!("failed to parse {}: {e}", path.display()))
        })
    }
}

fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

fn try_load_from_path(path: &Path) -> Option<ModmapConfig> {
    let contents = match read_config_file(path) {
        Ok(contents) => contents,
        Err(e) => {
            // "Not found" is the normal case here, not worth a warning
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {}", path.display(), e);
            }
            return None;
        }
    };

    match toml::from_str::<ModmapConfig>(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("Failed to parse {}: {e}. Using defaults.", path.display());
            None
        }
    }
}
