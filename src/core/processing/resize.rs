use fast_image_resize::{PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::{debug, info};

use crate::core::processing::padding::add_padding_to_square;
use crate::error::{Error, Result};
use crate::types::{RGBA_CHANNELS, ResampleFilter, ResizedVariant, SourceImage};

/// Dimensions that fit `original` inside a `target x target` box, long side first.
pub fn calculate_fit_dimensions(original_cols: u32, original_rows: u32, target: u32) -> (u32, u32) {
    let long_side = original_cols.max(original_rows);
    let short_side = original_cols.min(original_rows);

    let scale_factor = target as f64 / long_side as f64;
    let new_short_side = ((short_side as f64 * scale_factor).round() as u32).clamp(1, target.max(1));

    if original_cols >= original_rows {
        (target, new_short_side)
    } else {
        (new_short_side, target)
    }
}

pub fn resize_rgba_image(
    data: &[u8],
    original_cols: u32,
    original_rows: u32,
    target_cols: u32,
    target_rows: u32,
    filter: ResampleFilter,
) -> Result<Vec<u8>> {
    if original_cols == 0 || original_rows == 0 || target_cols == 0 || target_rows == 0 {
        return Err(Error::resize(format!(
            "cannot resize {}x{} to {}x{}",
            original_cols, original_rows, target_cols, target_rows
        )));
    }

    let resize_alg = match filter.convolution() {
        Some(filter_type) => ResizeAlg::Convolution(filter_type),
        None => ResizeAlg::Nearest,
    };
    let resize_options = ResizeOptions::new().resize_alg(resize_alg);
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols,
        original_rows,
        data.to_vec(),
        PixelType::U8x4,
    )
    .map_err(Error::resize)?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    Ok(dst_image.into_vec())
}

/// Produce the `size x size` variant of `source`.
///
/// Without `pad` the source is stretched to a square. With `pad` the long side
/// is fitted to `size` and the result is centered on a transparent canvas.
pub fn resize_to_square(
    source: &SourceImage,
    size: u32,
    filter: ResampleFilter,
    pad: bool,
) -> Result<ResizedVariant> {
    let (target_cols, target_rows) = if pad {
        calculate_fit_dimensions(source.width, source.height, size)
    } else {
        (size, size)
    };

    info!(
        "Resizing {}x{} -> {}x{} ({})",
        source.width, source.height, target_cols, target_rows, filter
    );

    let resized = resize_rgba_image(
        &source.rgba,
        source.width,
        source.height,
        target_cols,
        target_rows,
        filter,
    )?;

    let rgba = if target_cols != size || target_rows != size {
        add_padding_to_square(&resized, target_cols, target_rows, size)?
    } else {
        resized
    };
    debug!("Variant {} ready ({} bytes)", size, rgba.len());
    debug_assert_eq!(rgba.len(), (size * size) as usize * RGBA_CHANNELS);

    Ok(ResizedVariant { size, rgba })
}
