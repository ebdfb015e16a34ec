//! Image decode, resample, and encode.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (GIF, JPEG, PNG) | `image::ImageReader` (pure Rust decoders) |
//! | Resample | `image::imageops::resize` with `CatmullRom` over RGBA |
//! | Encode | PNG, always, regardless of input format |
//!
//! A failed encode removes the partial destination file before returning —
//! a run must never leave truncated PNGs behind for a later run to choke on.

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Load and decode an image from disk.
pub fn load(path: &Path) -> Result<DynamicImage, ImagingError> {
    ImageReader::open(path)?
        .decode()
        .map_err(|source| ImagingError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

/// Resample to exactly `width` × `height` with the Catmull-Rom cubic filter.
///
/// The source is flattened to RGBA first so alpha composites over the
/// destination instead of being resampled per-channel in a paletted space.
pub fn resize(image: &DynamicImage, width: u32, height: u32) -> RgbaImage {
    image::imageops::resize(&image.to_rgba8(), width, height, FilterType::CatmullRom)
}

/// Encode as PNG at `path`, creating parent directories as needed.
///
/// On any failure after creation the partial file is deleted.
pub fn write_png(path: &Path, image: &RgbaImage) -> Result<(), ImagingError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let result = encode_png(path, image);
    if result.is_err() {
        let _ = fs::remove_file(path);
    }
    result
}

fn encode_png(path: &Path, image: &RgbaImage) -> Result<(), ImagingError> {
    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    image
        .write_to(&mut writer, ImageFormat::Png)
        .map_err(|source| ImagingError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush()?;
    Ok(())
}

/// Copy the original bytes to `dest` untouched, creating parent directories.
///
/// A failed copy removes whatever partial destination `fs::copy` produced.
pub fn copy_verbatim(source: &Path, dest: &Path) -> Result<(), ImagingError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    if let Err(e) = fs::copy(source, dest) {
        let _ = fs::remove_file(dest);
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    fn write_test_png(path: &Path, width: u32, height: u32) {
        let img = RgbaImage::from_pixel(width, height, Rgba([120, 80, 40, 255]));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        img.save(path).unwrap();
    }

    #[test]
    fn load_reads_dimensions() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a/img.png");
        write_test_png(&path, 200, 400);
        let img = load(&path).unwrap();
        assert_eq!((img.width(), img.height()), (200, 400));
    }

    #[test]
    fn load_garbage_is_decode_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("not-an-image.png");
        fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(load(&path), Err(ImagingError::Decode { .. })));
    }

    #[test]
    fn load_missing_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = load(&tmp.path().join("missing.png"));
        assert!(matches!(result, Err(ImagingError::Io(_))));
    }

    #[test]
    fn resize_hits_exact_target() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            200,
            200,
            Rgba([10, 20, 30, 255]),
        ));
        let out = resize(&img, 140, 140);
        assert_eq!((out.width(), out.height()), (140, 140));
    }

    #[test]
    fn write_png_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("deep/nested/out.png");
        let img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        write_png(&dest, &img).unwrap();
        assert!(dest.exists());
        // Round-trips as a valid PNG
        assert_eq!(load(&dest).unwrap().width(), 4);
    }

    #[test]
    fn write_png_under_file_parent_fails_cleanly() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, b"file, not dir").unwrap();
        let dest = blocker.join("out.png");
        let img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        assert!(write_png(&dest, &img).is_err());
        assert!(!dest.exists());
    }

    #[test]
    fn copy_verbatim_preserves_bytes() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.gif");
        fs::write(&src, b"GIF89a fake bytes").unwrap();
        let dest = tmp.path().join("out/dir/src.gif");
        copy_verbatim(&src, &dest).unwrap();
        assert_eq!(fs::read(&dest).unwrap(), b"GIF89a fake bytes");
    }

    #[test]
    fn copy_verbatim_missing_source_errors() {
        let tmp = TempDir::new().unwrap();
        let result = copy_verbatim(&tmp.path().join("missing"), &tmp.path().join("out"));
        assert!(matches!(result, Err(ImagingError::Io(_))));
    }
}
