//! Loading [`ServiceConfig`] from TOML files and the environment.

use std::path::Path;

use tracing::{debug, trace};

use super::ServiceConfig;
use crate::error::{ColorError, Result};

/// Override color.
pub const ENV_COLOR: &str = "COLOR";
/// Reserved latency knob.
pub const ENV_LATENCY: &str = "LATENCY";
/// Reserved error-rate knob.
pub const ENV_ERROR_RATE: &str = "ERROR_RATE";

impl ServiceConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ColorError::ConfigParse(e.to_string()))
    }

    /// Read and parse a TOML config file.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading config file");

        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ColorError::ConfigNotFound {
                    path: path.display().to_string(),
                }
            } else {
                ColorError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| ColorError::ConfigParse(format!("{}: {e}", path.display())))
    }

    /// Apply environment overrides using `lookup` to read variables.
    ///
    /// A variable that is present replaces the current value, even when it
    /// is empty (`COLOR=` clears a file-configured override).
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(color) = lookup(ENV_COLOR) {
            trace!(color = %color, "COLOR from environment");
            self.color = color;
        }
        if let Some(latency) = lookup(ENV_LATENCY) {
            self.latency = Some(latency);
        }
        if let Some(error_rate) = lookup(ENV_ERROR_RATE) {
            self.error_rate = Some(error_rate);
        }
    }

    /// Defaults overlaid with `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.apply_env_with(lookup);
        config
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Full load: optional file, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_file(path)?,
            None => Self::default(),
        };
        config.apply_env_with(|key| std::env::var(key).ok());
        Ok(config)
    }
}
