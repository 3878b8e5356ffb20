//! Configuration for the command-line tool
//!
//! Settings are read from an optional TOML file:
//!
//! ```toml
//! default_srs = "EPSG:32631"
//! pad_percent = 5.0
//! output_precision = 3
//! ```

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;

use crate::coordinate::SpatialReference;
use crate::errors::{ExtentError, ExtentResult};

/// Tool settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtentConfig {
    /// Reference assigned to inputs that carry none
    pub default_srs: Option<String>,
    /// Padding applied to computed extents, in percent of their amplitude
    pub pad_percent: f64,
    /// Digits after the decimal point when printing bounds
    pub output_precision: usize,
}

impl Default for ExtentConfig {
    fn default() -> Self {
        ExtentConfig {
            default_srs: None,
            pad_percent: 0.0,
            output_precision: 6,
        }
    }
}

impl ExtentConfig {
    /// Parse settings from TOML text
    pub fn from_str(content: &str) -> ExtentResult<Self> {
        let config: ExtentConfig = toml::from_str(content)
            .map_err(|e| ExtentError::GenericError(format!("Failed to parse configuration: {}", e)))?;

        // fail early on an unusable reference
        config.default_srs()?;
        Ok(config)
    }

    /// Load settings from a file
    ///
    /// No path, or a path to a file that does not exist, gives the defaults.
    pub fn load(path: Option<&Path>) -> ExtentResult<Self> {
        let path = match path {
            Some(path) => path,
            None => return Ok(ExtentConfig::default()),
        };

        debug!("Loading configuration from {}", path.display());
        match fs::read_to_string(path) {
            Ok(content) => Self::from_str(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("Configuration file {} not found, using defaults", path.display());
                Ok(ExtentConfig::default())
            },
            Err(e) => Err(ExtentError::IoError(e)),
        }
    }

    /// Parsed default spatial reference
    pub fn default_srs(&self) -> ExtentResult<Option<SpatialReference>> {
        self.default_srs.as_deref().map(SpatialReference::parse).transpose()
    }
}
