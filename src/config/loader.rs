//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading report
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ReportError, ReportResult};

use super::types::ReportConfig;

/// Loads and provides access to report configuration.
///
/// # Example
///
/// ```no_run
/// use labour_report::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./report.yaml")?;
/// println!("Rounding to {} places", loader.config().decimal_places);
/// # Ok::<(), labour_report::error::ReportError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ReportConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it is not valid YAML for [`ReportConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReportError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|message| ReportError::ConfigParseError {
            path: path_str.clone(),
            message,
        })?;

        debug!(path = %path_str, ?config, "Loaded report configuration");
        Ok(Self { config })
    }

    /// Loads from `path` when given, otherwise uses the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> ReportResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn parse(content: &str) -> Result<ReportConfig, String> {
        // An empty file deserializes as YAML null rather than a mapping.
        if content.trim().is_empty() {
            return Ok(ReportConfig::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ReportConfig {
        self.config
    }
}
