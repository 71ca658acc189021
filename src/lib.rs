#![doc = r#"
iconprep — resample one source image into a fixed icon size set.

Every run decodes a single source image, resamples it with a Lanczos filter to
16×16, 48×48 and 128×128 pixels, and writes `icon16.png`, `icon48.png` and
`icon128.png` into two asset directories (typically the extension's `src/icons`
and `dist/icons`). Destination directories are created when missing and
existing icons are overwritten.

Quick start
-----------
```rust,no_run
use std::path::Path;
use iconprep::{generate_icons, IconParams};

fn main() -> iconprep::Result<()> {
    let report = generate_icons(
        Path::new("artwork/logo.png"),
        Path::new("web-scraper/src/icons"),
        Path::new("web-scraper/dist/icons"),
        &IconParams::default(),
    )?;
    for icon in &report.outputs {
        println!("Saved {}", icon.path.display());
    }
    Ok(())
}
```

Render in memory
----------------
```rust,no_run
use std::path::Path;
use iconprep::{render_icons_to_buffer, IconParams, ResampleFilter};

fn main() -> iconprep::Result<()> {
    let params = IconParams { filter: ResampleFilter::CatmullRom, pad: true, manifest: false };
    for variant in render_icons_to_buffer(Path::new("artwork/logo.png"), &params)? {
        assert_eq!(variant.rgba.len(), (variant.size * variant.size * 4) as usize);
    }
    Ok(())
}
```

Error handling
--------------
A source that is missing or undecodable fails before anything is written. A
write failure reports the icons that were already saved so callers can roll
them back.

```rust,no_run
use std::path::Path;
use iconprep::{generate_icons, rollback, Error, IconParams};

fn main() {
    let run = generate_icons(
        Path::new("logo.png"),
        Path::new("src/icons"),
        Path::new("dist/icons"),
        &IconParams::default(),
    );
    match run {
        Ok(_) => {}
        Err(e) if e.is_source_error() => eprintln!("nothing written: {e}"),
        Err(e @ Error::PartialWrite { .. }) => {
            let _ = rollback(e.written_paths());
            eprintln!("rolled back: {e}");
        }
        Err(other) => eprintln!("{other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`types`] — the icon size set, filters and image records.
- [`io`] — source decoding and PNG/manifest writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::IconParams;
pub use error::{Error, Result};
pub use types::{
    ICON_SIZES, IconReport, ResampleFilter, ResizedVariant, SavedIcon, SourceImage, icon_file_name,
};

pub use io::load_source;
pub use io::writers::manifest::{IconManifest, MANIFEST_FILE_NAME};

pub use api::{generate_icons, render_icons_to_buffer, rollback};
