//! Shared types used across iconprep: the fixed icon size set, the resampling
//! filter selector, and the in-memory image records passed between stages.
use std::path::PathBuf;

use clap::ValueEnum;
use fast_image_resize::FilterType;
use serde::{Deserialize, Serialize};

/// Pixel side lengths emitted for every run, in emission order.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Bytes per RGBA8 pixel.
pub const RGBA_CHANNELS: usize = 4;

/// File name for an icon of the given side length.
pub fn icon_file_name(size: u32) -> String {
    format!("icon{}.png", size)
}

#[derive(Copy, Clone, PartialEq, Eq, Default, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    #[default]
    Lanczos3,
    CatmullRom,
    Mitchell,
    Bilinear,
    Nearest,
}

impl ResampleFilter {
    /// Convolution filter for this selector, `None` for nearest-neighbour.
    pub fn convolution(self) -> Option<FilterType> {
        match self {
            ResampleFilter::Lanczos3 => Some(FilterType::Lanczos3),
            ResampleFilter::CatmullRom => Some(FilterType::CatmullRom),
            ResampleFilter::Mitchell => Some(FilterType::Mitchell),
            ResampleFilter::Bilinear => Some(FilterType::Bilinear),
            ResampleFilter::Nearest => None,
        }
    }
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResampleFilter::Lanczos3 => "lanczos3",
            ResampleFilter::CatmullRom => "catmull-rom",
            ResampleFilter::Mitchell => "mitchell",
            ResampleFilter::Bilinear => "bilinear",
            ResampleFilter::Nearest => "nearest",
        };
        write!(f, "{}", s)
    }
}

/// Decoded source raster, always RGBA8.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// One square, resampled copy of the source.
#[derive(Debug, Clone)]
pub struct ResizedVariant {
    pub size: u32,
    pub rgba: Vec<u8>,
}

impl ResizedVariant {
    pub fn file_name(&self) -> String {
        icon_file_name(self.size)
    }
}

/// A single icon persisted to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedIcon {
    pub size: u32,
    pub path: PathBuf,
}

/// Outcome of a successful run. `outputs` is in save order.
#[derive(Debug, Clone, Default)]
pub struct IconReport {
    pub outputs: Vec<SavedIcon>,
    pub manifests: Vec<PathBuf>,
}
