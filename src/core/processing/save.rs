use std::path::Path;

use tracing::{info, warn};

use crate::core::params::IconParams;
use crate::core::processing::resize::resize_to_square;
use crate::error::{Error, Result};
use crate::io::writers::manifest::{IconManifest, MANIFEST_FILE_NAME, write_manifest};
use crate::io::writers::png::write_icon_png;
use crate::types::{IconReport, ResizedVariant, SavedIcon, SourceImage};

/// Render every size in `sizes` without touching disk.
pub fn render_variants(
    source: &SourceImage,
    sizes: &[u32],
    params: &IconParams,
) -> Result<Vec<ResizedVariant>> {
    sizes
        .iter()
        .map(|&size| resize_to_square(source, size, params.filter, params.pad))
        .collect()
}

/// Resample `source` once per size and write each variant into every
/// destination, in order. The first failure stops the loop; files written
/// before it are reported through `Error::PartialWrite` or `Error::Manifest`.
pub fn save_icon_set(
    source: &SourceImage,
    sizes: &[u32],
    destinations: &[&Path],
    params: &IconParams,
) -> Result<IconReport> {
    let mut report = IconReport::default();

    for &size in sizes {
        let variant = resize_to_square(source, size, params.filter, params.pad)?;
        let file_name = variant.file_name();

        for dir in destinations {
            let output = dir.join(&file_name);
            if let Err(source) = write_icon_png(&output, &variant) {
                warn!("Write failed for {:?} after {} icon(s)", output, report.outputs.len());
                return Err(Error::PartialWrite {
                    path: output,
                    written: report.outputs.into_iter().map(|icon| icon.path).collect(),
                    source,
                });
            }
            info!("Saved {:?}", output);
            report.outputs.push(SavedIcon { size, path: output });
        }
    }

    if params.manifest {
        let manifest = IconManifest::new(source, sizes, params.filter, params.pad);
        for dir in destinations {
            match write_manifest(dir, &manifest) {
                Ok(path) => report.manifests.push(path),
                Err(source) => {
                    let path = dir.join(MANIFEST_FILE_NAME);
                    warn!("Manifest write failed for {:?}", path);
                    let written = report
                        .outputs
                        .into_iter()
                        .map(|icon| icon.path)
                        .chain(report.manifests)
                        .collect();
                    return Err(Error::Manifest {
                        path,
                        written,
                        source,
                    });
                }
            }
        }
    }

    Ok(report)
}
