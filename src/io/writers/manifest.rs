use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::{ResampleFilter, SourceImage, icon_file_name};

pub const MANIFEST_FILE_NAME: &str = "icons.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub size: u32,
    pub file: String,
}

/// Sidecar describing the icon set written into one destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconManifest {
    pub generator: String,
    pub generated_at: String,
    pub source: String,
    pub source_width: u32,
    pub source_height: u32,
    pub filter: ResampleFilter,
    pub padded: bool,
    pub icons: Vec<ManifestEntry>,
}

impl IconManifest {
    pub fn new(source: &SourceImage, sizes: &[u32], filter: ResampleFilter, padded: bool) -> Self {
        Self {
            generator: format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            source: source.path.display().to_string(),
            source_width: source.width,
            source_height: source.height,
            filter,
            padded,
            icons: sizes
                .iter()
                .map(|&size| ManifestEntry {
                    size,
                    file: icon_file_name(size),
                })
                .collect(),
        }
    }
}

/// Write `manifest` as pretty JSON into `dir`, returning the sidecar path.
pub fn write_manifest(dir: &Path, manifest: &IconManifest) -> std::io::Result<PathBuf> {
    let sidecar_path = dir.join(MANIFEST_FILE_NAME);
    let json_string = serde_json::to_string_pretty(manifest)?;
    std::fs::write(&sidecar_path, json_string)?;
    info!("Manifest written: {:?}", sidecar_path);
    Ok(sidecar_path)
}
