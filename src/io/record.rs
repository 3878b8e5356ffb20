//! Flat bbox records for reuse across pipeline runs
//!
//! A record is stored as a TOML table with the keys `xmin`, `xmax`, `ymin`,
//! `ymax` and, when the box has one, `srs`, always written in that order:
//!
//! ```toml
//! xmin = 650000.0
//! xmax = 660000.0
//! ymin = 4840000.0
//! ymax = 4850000.0
//! srs = "EPSG:32631"
//! ```

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::coordinate::{Bbox, SpatialReference};
use crate::errors::{ExtentError, ExtentResult};

/// Serializable form of a `Bbox`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BboxRecord {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srs: Option<String>,
}

impl From<&Bbox> for BboxRecord {
    fn from(bbox: &Bbox) -> Self {
        let (xmin, xmax, ymin, ymax) = bbox.to_extents();
        BboxRecord {
            xmin,
            xmax,
            ymin,
            ymax,
            srs: bbox.srs().map(SpatialReference::identifier),
        }
    }
}

impl TryFrom<BboxRecord> for Bbox {
    type Error = ExtentError;

    fn try_from(record: BboxRecord) -> Result<Self, Self::Error> {
        let srs = record.srs.as_deref().map(SpatialReference::parse).transpose()?;
        Bbox::new(record.xmin, record.xmax, record.ymin, record.ymax, srs)
    }
}

impl Bbox {
    /// Flat record of this box
    pub fn to_record(&self) -> BboxRecord {
        BboxRecord::from(self)
    }

    /// Rebuild a box from a record, validating its bounds
    pub fn from_record(record: BboxRecord) -> ExtentResult<Self> {
        Bbox::try_from(record)
    }

    /// Serialize this box as a TOML record
    pub fn to_toml_string(&self) -> ExtentResult<String> {
        toml::to_string(&self.to_record())
            .map_err(|e| ExtentError::InvalidRecord(format!("Failed to serialize record: {}", e)))
    }

    /// Parse a box from a TOML record
    pub fn from_toml_str(content: &str) -> ExtentResult<Self> {
        let record: BboxRecord = toml::from_str(content)
            .map_err(|e| ExtentError::InvalidRecord(e.to_string()))?;
        Bbox::from_record(record)
    }
}

/// Write a bbox record to a file
pub fn save_bbox<P: AsRef<Path>>(bbox: &Bbox, path: P) -> ExtentResult<()> {
    let path = path.as_ref();
    fs::write(path, bbox.to_toml_string()?)?;
    info!("Saved bbox {} to {}", bbox, path.display());
    Ok(())
}

/// Read a bbox record from a file
pub fn load_bbox<P: AsRef<Path>>(path: P) -> ExtentResult<Bbox> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let bbox = Bbox::from_toml_str(&content)
        .map_err(|e| match e {
            ExtentError::InvalidRecord(msg) => ExtentError::InvalidRecord(format!("{}: {}", path.display(), msg)),
            other => other,
        })?;
    debug!("Loaded bbox {} from {}", bbox, path.display());
    Ok(bbox)
}
