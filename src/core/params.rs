use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::ResampleFilter;

/// Run parameters suitable for config files
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IconParams {
    pub filter: ResampleFilter,
    /// Keep aspect ratio and center on a transparent square instead of stretching
    pub pad: bool,
    /// Write an `icons.json` sidecar into each destination
    pub manifest: bool,
}

impl IconParams {
    /// Load parameters from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        let params: IconParams = serde_json::from_str(&text).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        debug!("Loaded parameters from {:?}: {:?}", path, params);
        Ok(params)
    }
}
