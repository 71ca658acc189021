use tracing::debug;

use crate::error::{Error, Result};
use crate::types::RGBA_CHANNELS;

/// Center an RGBA8 raster on a transparent `side x side` canvas.
pub fn add_padding_to_square(data: &[u8], cols: u32, rows: u32, side: u32) -> Result<Vec<u8>> {
    if cols > side || rows > side {
        return Err(Error::InvalidArgument {
            arg: "side",
            value: format!("{} < {}x{}", side, cols, rows),
        });
    }
    let (cols, rows, side) = (cols as usize, rows as usize, side as usize);
    if data.len() != cols * rows * RGBA_CHANNELS {
        return Err(Error::resize(format!(
            "buffer of {} bytes does not match {}x{} RGBA",
            data.len(),
            cols,
            rows
        )));
    }

    let pad_cols = (side - cols) / 2;
    let pad_rows = (side - rows) / 2;
    debug!(
        "Adding padding: cols={}, rows={}, pad_cols={}, pad_rows={}",
        cols, rows, pad_cols, pad_rows
    );

    let row_bytes = cols * RGBA_CHANNELS;
    let mut padded = vec![0u8; side * side * RGBA_CHANNELS];
    // Copy per row using slice copies
    for row in 0..rows {
        let src_offset = row * row_bytes;
        let dst_offset = ((row + pad_rows) * side + pad_cols) * RGBA_CHANNELS;
        padded[dst_offset..dst_offset + row_bytes]
            .copy_from_slice(&data[src_offset..src_offset + row_bytes]);
    }
    Ok(padded)
}
