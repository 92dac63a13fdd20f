use image::imageops::FilterType;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::task;
use xxhash_rust::xxh3::xxh3_64;

use crate::state::data::MediaFile;

/// Size of generated thumbnails (square bounding box)
const THUMBNAIL_SIZE: u32 = 256;

/// Get the thumbnail cache directory
/// Returns ~/.cache/media-browser/thumbnails on Linux
pub fn get_thumbnail_cache_dir() -> PathBuf {
    let mut path = dirs_next::cache_dir()
        .or_else(dirs_next::home_dir)
        .expect("Could not determine cache directory");

    path.push("media-browser");
    path.push("thumbnails");

    // Ensure the directory exists
    fs::create_dir_all(&path).expect("Failed to create thumbnail cache directory");

    path
}

/// Cache path for an image's thumbnail inside `cache_dir`.
///
/// Keyed by an xxh3 hash of the source path, so the same file maps to the
/// same thumbnail across runs. The std hasher is seeded per process and
/// would produce a different key every launch.
fn thumbnail_path_in(cache_dir: &Path, image_path: &Path) -> PathBuf {
    let key = xxh3_64(image_path.to_string_lossy().as_bytes());
    cache_dir.join(format!("{key:016x}.jpg"))
}

/// Generate a thumbnail for an image file, writing into `cache_dir`.
/// Returns the thumbnail path, or None if decoding or saving failed.
/// An already-cached thumbnail is returned as-is.
fn generate_into(cache_dir: &Path, image_path: &Path) -> Option<PathBuf> {
    let thumb_path = thumbnail_path_in(cache_dir, image_path);
    if thumb_path.exists() {
        return Some(thumb_path);
    }

    let img = image::open(image_path).ok()?;
    let thumb = img.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3);

    // JPEG output cannot carry an alpha channel (PNG/GIF sources may)
    thumb.to_rgb8().save(&thumb_path).ok()?;

    println!("📸 Generated thumbnail: {}", thumb_path.display());
    Some(thumb_path)
}

/// Generate thumbnails for a scan's image list on a blocking thread.
///
/// Returns (source path, thumbnail path) pairs for the images that could
/// be thumbnailed. Failures are per-file: one broken image never blocks
/// the rest.
pub async fn generate_all(images: Vec<MediaFile>) -> Vec<(PathBuf, PathBuf)> {
    let result = task::spawn_blocking(move || {
        let cache_dir = get_thumbnail_cache_dir();
        images
            .iter()
            .filter_map(|file| {
                generate_into(&cache_dir, &file.path).map(|thumb| (file.path.clone(), thumb))
            })
            .collect()
    })
    .await;

    match result {
        Ok(pairs) => pairs,
        Err(e) => {
            eprintln!("⚠️  Thumbnail task failed: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Write a small valid PNG to scan against
    fn write_test_png(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let img = image::RgbaImage::from_pixel(16, 16, image::Rgba([200, 40, 40, 255]));
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_generate_writes_jpeg_into_cache() {
        let src = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();
        let png = write_test_png(src.path(), "photo.png");

        let thumb = generate_into(cache.path(), &png).unwrap();
        assert!(thumb.exists());
        assert_eq!(thumb.extension().unwrap(), "jpg");
        assert_eq!(thumb.parent().unwrap(), cache.path());
    }

    #[test]
    fn test_generate_is_stable_across_calls() {
        let src = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();
        let png = write_test_png(src.path(), "photo.png");

        let first = generate_into(cache.path(), &png).unwrap();
        let second = generate_into(cache.path(), &png).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_fails_gracefully_on_non_image() {
        let src = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();
        let bogus = src.path().join("fake.jpg");
        fs::write(&bogus, b"not an image at all").unwrap();

        assert!(generate_into(cache.path(), &bogus).is_none());
    }

    #[test]
    fn test_distinct_sources_get_distinct_keys() {
        let cache = Path::new("/tmp/cache");
        let a = thumbnail_path_in(cache, Path::new("/media/a.png"));
        let b = thumbnail_path_in(cache, Path::new("/media/b.png"));
        assert_ne!(a, b);
    }
}
