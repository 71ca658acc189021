use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};

/// Make sure every destination directory exists, creating parents as needed.
/// Existing directories are left as they are.
pub fn prepare_destinations(destinations: &[&Path]) -> Result<()> {
    for dir in destinations {
        if dir.is_dir() {
            debug!("Destination exists: {:?}", dir);
            continue;
        }
        fs::create_dir_all(dir).map_err(|source| Error::PrepareDir {
            path: dir.to_path_buf(),
            source,
        })?;
        info!("Created destination directory: {:?}", dir);
    }
    Ok(())
}
