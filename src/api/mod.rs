//! High-level library API: generate the icon set from a source image into the
//! source and dist asset directories, render it in memory, or roll back a
//! partially written set. Prefer these entrypoints over the `core` primitives.
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::params::IconParams;
use crate::core::processing::prepare::prepare_destinations;
use crate::core::processing::save::{render_variants, save_icon_set};
use crate::error::{Error, Result};
use crate::io::load_source;
use crate::types::{ICON_SIZES, IconReport, ResizedVariant};

/// Resample `source` to every size in `ICON_SIZES` and write
/// `icon<size>.png` into both `src_dir` and `dist_dir`.
///
/// Both directories are created first. If the source cannot be loaded nothing
/// is written. A write failure aborts the run with `Error::PartialWrite`,
/// leaving earlier icons on disk; see [`rollback`].
pub fn generate_icons(
    source: &Path,
    src_dir: &Path,
    dist_dir: &Path,
    params: &IconParams,
) -> Result<IconReport> {
    let destinations = [src_dir, dist_dir];
    prepare_destinations(&destinations)?;

    let image = load_source(source)?;
    let report = save_icon_set(&image, &ICON_SIZES, &destinations, params)?;

    info!(
        "Icon set complete: {} file(s) from {:?}",
        report.outputs.len(),
        source
    );
    Ok(report)
}

/// Decode `source` and render every size in `ICON_SIZES` in memory.
pub fn render_icons_to_buffer(source: &Path, params: &IconParams) -> Result<Vec<ResizedVariant>> {
    let image = load_source(source)?;
    render_variants(&image, &ICON_SIZES, params)
}

/// Remove files left behind by a failed run. Files that are already gone are
/// skipped. Returns how many files were removed.
pub fn rollback(paths: &[PathBuf]) -> Result<usize> {
    let mut removed = 0;
    for path in paths {
        match std::fs::remove_file(path) {
            Ok(()) => {
                info!("Rolled back {:?}", path);
                removed += 1;
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Nothing to roll back at {:?}", path);
            }
            Err(e) => return Err(Error::from(e)),
        }
    }
    Ok(removed)
}
