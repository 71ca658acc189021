//! Crate-level error type and `Result` alias.
//! Separates a failed source (nothing written) from a failed write (some icons
//! may already be on disk) so callers can decide between retrying and rolling back.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("source image not found: {}", path.display())]
    SourceMissing { path: PathBuf },

    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot create directory {}: {source}", path.display())]
    PrepareDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("cannot write {} ({} file(s) already written): {source}", path.display(), written.len())]
    PartialWrite {
        path: PathBuf,
        written: Vec<PathBuf>,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot write manifest {} ({} file(s) already written): {source}", path.display(), written.len())]
    Manifest {
        path: PathBuf,
        written: Vec<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot load parameters from {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }

    /// True when the run failed before any icon was written.
    pub fn is_source_error(&self) -> bool {
        matches!(self, Error::SourceMissing { .. } | Error::Decode { .. })
    }

    /// Files saved during the run that failed, in save order.
    pub fn written_paths(&self) -> &[PathBuf] {
        match self {
            Error::PartialWrite { written, .. } | Error::Manifest { written, .. } => written,
            _ => &[],
        }
    }
}
