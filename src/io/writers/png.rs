use std::path::Path;

use image::{ImageBuffer, ImageFormat, Rgba};

use crate::types::ResizedVariant;

/// Encode `variant` as PNG at `output`, replacing any existing file.
pub fn write_icon_png(output: &Path, variant: &ResizedVariant) -> image::ImageResult<()> {
    let img = ImageBuffer::<Rgba<u8>, &[u8]>::from_raw(
        variant.size,
        variant.size,
        variant.rgba.as_slice(),
    )
    .ok_or_else(|| {
        image::ImageError::Parameter(image::error::ParameterError::from_kind(
            image::error::ParameterErrorKind::DimensionMismatch,
        ))
    })?;
    img.save_with_format(output, ImageFormat::Png)
}
