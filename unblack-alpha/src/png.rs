//! PNG loading and in-place saving

use std::io::Cursor;
use std::path::Path;

use image::io::Reader;
use image::{ImageError, ImageFormat, RgbaImage};

use crate::error::{AlphaError, Result};
use crate::key::{key_image, KeyStats};

/// Open an image and convert it to 8-bit RGBA.
///
/// The format is sniffed from the file contents, not the extension, so a
/// mislabelled file still loads if its real format is supported.
pub fn load_rgba(path: impl AsRef<Path>) -> Result<RgbaImage> {
    let path = path.as_ref();
    let load_err = |source: ImageError| AlphaError::Load {
        path: path.to_path_buf(),
        source,
    };

    let img = Reader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| load_err(ImageError::IoError(e)))?
        .decode()
        .map_err(load_err)?;

    Ok(img.into_rgba8())
}

/// Encode `img` as PNG and write it to `path`.
///
/// Encoding happens in memory first; `path` is only opened once there are
/// bytes to write.
pub fn save_png(img: &RgbaImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(|source| AlphaError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    std::fs::write(path, buf.into_inner()).map_err(|source| AlphaError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the image at `path`, key out its black background and overwrite
/// the file as PNG. No backup of the original is kept.
pub fn remove_black_background(path: impl AsRef<Path>) -> Result<KeyStats> {
    let path = path.as_ref();

    let mut img = load_rgba(path)?;
    let (width, height) = img.dimensions();
    let stats = key_image(&mut img);

    log::debug!(
        "{}: {}x{}, {} visible, {} cleared, {} below noise floor",
        path.display(),
        width,
        height,
        stats.visible,
        stats.cleared,
        stats.noise
    );

    save_png(&img, path)?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba};
    use tempfile::TempDir;

    #[test]
    fn test_red_and_noise_pixels() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("glow.png");

        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([5, 5, 5]));
        img.save(&path).unwrap();

        remove_black_background(&path).unwrap();

        let out = image::open(&path).unwrap().into_rgba8();
        assert_eq!(out.dimensions(), (2, 1));
        assert_eq!(out.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(out.get_pixel(1, 0), &Rgba([5, 5, 5, 0]));
    }

    #[test]
    fn test_single_black_pixel() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("black.png");
        RgbImage::from_pixel(1, 1, Rgb([0, 0, 0])).save(&path).unwrap();

        let stats = remove_black_background(&path).unwrap();

        assert_eq!(stats.cleared, 1);
        let out = image::open(&path).unwrap().into_rgba8();
        assert_eq!(out.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_dimensions_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wide.png");
        RgbaImage::from_pixel(13, 5, Rgba([30, 60, 90, 255]))
            .save(&path)
            .unwrap();

        remove_black_background(&path).unwrap();

        let out = image::open(&path).unwrap().into_rgba8();
        assert_eq!(out.dimensions(), (13, 5));
        assert!(out.pixels().all(|p| *p == Rgba([30, 60, 90, 90])));
    }

    #[test]
    fn test_undecodable_file_left_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = remove_black_background(&path).unwrap_err();

        assert!(matches!(err, AlphaError::Load { .. }));
        assert!(err.to_string().contains("broken.png"));
        assert_eq!(std::fs::read(&path).unwrap(), b"definitely not a png");
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.png");

        let err = load_rgba(&path).unwrap_err();

        assert!(matches!(err, AlphaError::Load { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_content_sniffed_not_extension() {
        let dir = TempDir::new().unwrap();
        let bmp = dir.path().join("real.bmp");
        let path = dir.path().join("mislabelled.png");
        RgbImage::from_pixel(2, 2, Rgb([100, 0, 0])).save(&bmp).unwrap();
        std::fs::rename(&bmp, &path).unwrap();

        remove_black_background(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let out = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
            .unwrap()
            .into_rgba8();
        assert_eq!(out.get_pixel(1, 1), &Rgba([100, 0, 0, 100]));
    }

    #[test]
    fn test_write_failure_reports_path() {
        let dir = TempDir::new().unwrap();
        let img = RgbaImage::from_pixel(1, 1, Rgba([50, 50, 50, 50]));

        // A directory cannot be overwritten as a file
        let err = save_png(&img, dir.path()).unwrap_err();

        assert!(matches!(err, AlphaError::Write { .. }));
        assert!(err.to_string().contains(&dir.path().display().to_string()));
        assert!(dir.path().is_dir());
    }

    #[test]
    fn test_write_into_missing_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("locked").join("icon.png");
        let img = RgbaImage::new(1, 1);

        let err = save_png(&img, &path).unwrap_err();

        assert!(matches!(err, AlphaError::Write { .. }));
        assert!(!path.exists());
    }
}
