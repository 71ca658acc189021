use std::path::Path;

use image::ImageReader;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::SourceImage;

/// Decode `path` into an RGBA8 `SourceImage`.
///
/// The format is sniffed from the file contents, so a mislabeled extension
/// still decodes. A path that does not exist fails with `SourceMissing`
/// before any decoding is attempted.
pub fn load_source(path: &Path) -> Result<SourceImage> {
    if !path.exists() {
        return Err(Error::SourceMissing {
            path: path.to_path_buf(),
        });
    }

    let decode_err = |source: image::ImageError| Error::Decode {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?;
    debug!("Detected format for {:?}: {:?}", path, reader.format());

    let decoded = reader.decode().map_err(decode_err)?;
    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();
    info!("Loaded source {:?} ({}x{})", path, width, height);

    Ok(SourceImage {
        path: path.to_path_buf(),
        width,
        height,
        rgba: rgba.into_raw(),
    })
}
