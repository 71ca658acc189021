//! I/O layer: decoding the source image and writing icon PNGs plus the
//! optional `icons.json` manifest sidecar.
pub mod reader;
pub use reader::load_source;

pub mod writers;
