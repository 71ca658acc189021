use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use image::{GenericImageView, ImageFormat, Rgba, RgbaImage};
use iconprep::{Error, ICON_SIZES, IconParams, MANIFEST_FILE_NAME, generate_icons, rollback};

fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 255 / width) as u8, (y * 255 / height) as u8, 128, 255])
    })
}

fn file_names(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

fn expected_names() -> BTreeSet<String> {
    ["icon16.png", "icon48.png", "icon128.png"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[test]
fn square_source_fills_both_destinations() {
    let root = tempfile::tempdir().unwrap();
    let source = root.path().join("logo.png");
    gradient(512, 512).save(&source).unwrap();
    let src = root.path().join("web-scraper/src/icons");
    let dist = root.path().join("web-scraper/dist/icons");

    let report = generate_icons(&source, &src, &dist, &IconParams::default()).unwrap();
    assert_eq!(report.outputs.len(), ICON_SIZES.len() * 2);

    for dir in [&src, &dist] {
        assert_eq!(file_names(dir), expected_names());
        for size in ICON_SIZES {
            let path = dir.join(format!("icon{}.png", size));
            let bytes = fs::read(&path).unwrap();
            assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
            let img = image::open(&path).unwrap();
            assert_eq!(img.dimensions(), (size, size));
        }
    }
}

#[test]
fn non_square_source_is_stretched_to_square() {
    let root = tempfile::tempdir().unwrap();
    let source = root.path().join("banner.png");
    gradient(300, 120).save(&source).unwrap();
    let src = root.path().join("src");
    let dist = root.path().join("dist");

    generate_icons(&source, &src, &dist, &IconParams::default()).unwrap();

    let img = image::open(src.join("icon48.png")).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (48, 48));
    // Stretching leaves no transparent border
    assert_eq!(img.get_pixel(24, 0)[3], 255);
}

#[test]
fn padding_keeps_aspect_ratio() {
    let root = tempfile::tempdir().unwrap();
    let source = root.path().join("banner.png");
    gradient(400, 100).save(&source).unwrap();
    let src = root.path().join("src");
    let dist = root.path().join("dist");
    let params = IconParams {
        pad: true,
        ..IconParams::default()
    };

    generate_icons(&source, &src, &dist, &params).unwrap();

    let img = image::open(dist.join("icon128.png")).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (128, 128));
    assert_eq!(img.get_pixel(64, 0)[3], 0);
    assert_eq!(img.get_pixel(64, 127)[3], 0);
    assert_eq!(img.get_pixel(64, 64)[3], 255);
}

#[test]
fn second_run_overwrites_without_leftovers() {
    let root = tempfile::tempdir().unwrap();
    let source = root.path().join("logo.png");
    gradient(256, 256).save(&source).unwrap();
    let src = root.path().join("src");
    let dist = root.path().join("dist");

    generate_icons(&source, &src, &dist, &IconParams::default()).unwrap();
    let first = fs::read(src.join("icon128.png")).unwrap();
    generate_icons(&source, &src, &dist, &IconParams::default()).unwrap();
    let second = fs::read(src.join("icon128.png")).unwrap();

    assert_eq!(first, second);
    assert_eq!(file_names(&src), expected_names());
    assert_eq!(file_names(&dist), expected_names());
}

#[test]
fn missing_source_writes_nothing() {
    let root = tempfile::tempdir().unwrap();
    let src = root.path().join("src");
    let dist = root.path().join("dist");

    let err = generate_icons(
        &root.path().join("missing.png"),
        &src,
        &dist,
        &IconParams::default(),
    )
    .unwrap_err();

    assert!(matches!(err, Error::SourceMissing { .. }));
    assert!(err.is_source_error());
    assert!(file_names(&src).is_empty());
    assert!(file_names(&dist).is_empty());
}

#[test]
fn zero_byte_source_leaves_existing_files_alone() {
    let root = tempfile::tempdir().unwrap();
    let source = root.path().join("corrupt.png");
    fs::write(&source, b"").unwrap();
    let src = root.path().join("src");
    let dist = root.path().join("dist");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("README"), b"keep").unwrap();

    let err = generate_icons(&source, &src, &dist, &IconParams::default()).unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
    assert_eq!(
        file_names(&src),
        BTreeSet::from(["README".to_string()])
    );
    assert!(file_names(&dist).is_empty());
}

#[test]
fn partial_write_can_be_rolled_back() {
    let root = tempfile::tempdir().unwrap();
    let source = root.path().join("logo.png");
    gradient(64, 64).save(&source).unwrap();
    let src = root.path().join("src");
    let dist = root.path().join("dist");
    fs::create_dir_all(src.join("icon128.png")).unwrap();

    let err = generate_icons(&source, &src, &dist, &IconParams::default()).unwrap_err();
    let written = err.written_paths().to_vec();
    assert!(matches!(err, Error::PartialWrite { .. }));
    assert_eq!(written.len(), 4);

    assert_eq!(rollback(&written).unwrap(), 4);
    assert_eq!(file_names(&src), BTreeSet::from(["icon128.png".to_string()]));
    assert!(file_names(&dist).is_empty());
}

#[test]
fn manifest_is_written_next_to_icons() {
    let root = tempfile::tempdir().unwrap();
    let source = root.path().join("logo.png");
    gradient(128, 128).save(&source).unwrap();
    let src = root.path().join("src");
    let dist = root.path().join("dist");
    let params = IconParams {
        manifest: true,
        ..IconParams::default()
    };

    let report = generate_icons(&source, &src, &dist, &params).unwrap();
    assert_eq!(report.manifests, vec![src.join(MANIFEST_FILE_NAME), dist.join(MANIFEST_FILE_NAME)]);

    let manifest: iconprep::IconManifest =
        serde_json::from_str(&fs::read_to_string(dist.join(MANIFEST_FILE_NAME)).unwrap()).unwrap();
    let sizes: Vec<u32> = manifest.icons.iter().map(|e| e.size).collect();
    assert_eq!(sizes, ICON_SIZES);
    assert_eq!((manifest.source_width, manifest.source_height), (128, 128));
}

#[test]
fn in_memory_render_touches_no_disk() {
    let root = tempfile::tempdir().unwrap();
    let source = root.path().join("logo.png");
    gradient(90, 60).save(&source).unwrap();

    let variants = iconprep::render_icons_to_buffer(&source, &IconParams::default()).unwrap();
    let sizes: Vec<u32> = variants.iter().map(|v| v.size).collect();
    assert_eq!(sizes, ICON_SIZES);
    assert_eq!(variants[1].file_name(), "icon48.png");
    assert_eq!(file_names(root.path()), BTreeSet::from(["logo.png".to_string()]));
}
