//! Configuration for the corpus builder.
//!
//! This module defines where fixtures are written. It provides:
//! 1. **Defaults:** The conventional `tests/` output directory.
//! 2. **Structure:** `FixtureConfig`, deserializable from JSON with per-field defaults.
//! 3. **Resolution:** Loading from an optional JSON file plus an environment override.
//!
//! The builder takes no command-line arguments; the environment is the only outer surface.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::{FixtureError, Result};

/// Default configuration constants.
mod defaults {
    /// Directory, relative to the working directory, that receives the fixture files.
    pub const OUTPUT_DIR: &str = "tests";
}

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV: &str = "RV32_FIXTURES_CONFIG";

/// Environment variable overriding [`FixtureConfig::output_dir`].
pub const OUTPUT_DIR_ENV: &str = "RV32_FIXTURES_DIR";

/// Corpus builder configuration.
///
/// ```json
/// { "output_dir": "build/fixtures" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureConfig {
    /// Directory that receives `<name>_input.txt` and `<name>_expected.txt` per test case.
    /// Created if missing.
    #[serde(default = "FixtureConfig::default_output_dir")]
    pub output_dir: PathBuf,
}

impl FixtureConfig {
    fn default_output_dir() -> PathBuf {
        PathBuf::from(defaults::OUTPUT_DIR)
    }

    /// Creates a configuration writing to `output_dir`.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Deserializes a configuration from a JSON document.
    ///
    /// Missing fields take their defaults; unknown fields are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolves the configuration from the process environment.
    ///
    /// Reads the JSON file named by [`CONFIG_ENV`] when set, then applies
    /// [`OUTPUT_DIR_ENV`] on top of it.
    pub fn from_env() -> Result<Self> {
        let config_file = env::var_os(CONFIG_ENV).map(PathBuf::from);
        let output_dir = env::var_os(OUTPUT_DIR_ENV).map(PathBuf::from);
        Self::resolve(config_file.as_deref(), output_dir)
    }

    /// Resolves the configuration from explicit sources.
    ///
    /// # Arguments
    ///
    /// * `config_file` - Optional JSON configuration file; defaults are used when `None`.
    /// * `output_dir` - Optional output directory that takes precedence over the file.
    ///
    /// # Returns
    ///
    /// The merged configuration, or an error if the file cannot be read or parsed.
    pub fn resolve(config_file: Option<&Path>, output_dir: Option<PathBuf>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                let json =
                    fs::read_to_string(path).map_err(|source| FixtureError::io(path, source))?;
                Self::from_json(&json)?
            }
            None => Self::default(),
        };

        if let Some(dir) = output_dir {
            config.output_dir = dir;
        }

        Ok(config)
    }
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            output_dir: Self::default_output_dir(),
        }
    }
}
