use clap::Parser;
use std::path::PathBuf;

use iconprep::ResampleFilter;

#[derive(Parser, Debug)]
#[command(name = "iconprep", version, about = "Resize one image into the 16/48/128 icon set")]
pub struct CliArgs {
    /// Source image to resample
    #[arg(short, long)]
    pub input: PathBuf,

    /// Source-tree icon directory (created if missing)
    #[arg(long)]
    pub src_dir: PathBuf,

    /// Build-output icon directory (created if missing)
    #[arg(long)]
    pub dist_dir: PathBuf,

    /// JSON file with run parameters; explicit flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Resampling filter (lanczos3, catmull-rom, mitchell, bilinear, nearest)
    #[arg(long, value_enum)]
    pub filter: Option<ResampleFilter>,

    /// Keep the aspect ratio and center on a transparent square instead of stretching
    #[arg(long, default_value_t = false)]
    pub pad: bool,

    /// Write an icons.json manifest into each destination
    #[arg(long, default_value_t = false)]
    pub manifest: bool,

    /// Delete icons written by this run if a later write fails
    #[arg(long, default_value_t = false)]
    pub rollback: bool,

    /// Enable logging (stderr)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
