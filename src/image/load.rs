//! Image loading utilities.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;

use crate::error::{Error, Result};

use super::{ColorMode, SourceImage};

/// Load an image from disk and classify how it stores transparency.
///
/// The file is read once. The color mode comes from the raw PNG header, so
/// palette images and their `tRNS` key are seen before the decoder expands
/// them.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a decodable PNG.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<SourceImage> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let pixels = image::load_from_memory_with_format(&bytes, ImageFormat::Png).map_err(|source| {
        Error::Decode {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let mode = png_color_mode(&bytes).map_err(|source| Error::PngHeader {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        "Loaded {} ({}x{}, {mode:?})",
        path.display(),
        pixels.width(),
        pixels.height()
    );

    Ok(SourceImage { mode, pixels })
}

/// Read the color mode recorded in a PNG's `IHDR` and `tRNS` chunks.
fn png_color_mode(bytes: &[u8]) -> std::result::Result<ColorMode, png::DecodingError> {
    let reader = png::Decoder::new(Cursor::new(bytes)).read_info()?;
    let info = reader.info();

    let mode = match info.color_type {
        png::ColorType::Grayscale => ColorMode::Gray,
        png::ColorType::GrayscaleAlpha => ColorMode::GrayAlpha,
        png::ColorType::Rgb => ColorMode::Rgb,
        png::ColorType::Rgba => ColorMode::Rgba,
        png::ColorType::Indexed => ColorMode::Indexed {
            transparency_key: info.trns.is_some(),
        },
    };

    Ok(mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Transparency;

    fn encode(color: png::ColorType, data: &[u8], palette: &[u8], trns: Option<&[u8]>) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, 1, 1);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            if !palette.is_empty() {
                encoder.set_palette(palette.to_vec());
            }
            if let Some(trns) = trns {
                encoder.set_trns(trns.to_vec());
            }
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        buf
    }

    #[test]
    fn test_header_modes() {
        let rgba = encode(png::ColorType::Rgba, &[1, 2, 3, 4], &[], None);
        let gray_alpha = encode(png::ColorType::GrayscaleAlpha, &[9, 0], &[], None);
        let rgb = encode(png::ColorType::Rgb, &[1, 2, 3], &[], None);

        assert_eq!(png_color_mode(&rgba).unwrap(), ColorMode::Rgba);
        assert_eq!(png_color_mode(&gray_alpha).unwrap(), ColorMode::GrayAlpha);
        assert_eq!(png_color_mode(&rgb).unwrap(), ColorMode::Rgb);
    }

    #[test]
    fn test_palette_with_key() {
        let keyed = encode(png::ColorType::Indexed, &[0], &[10, 20, 30], Some(&[0][..]));
        let plain = encode(png::ColorType::Indexed, &[0], &[10, 20, 30], None);

        let keyed = png_color_mode(&keyed).unwrap();
        assert_eq!(keyed.transparency(), Transparency::PaletteKey);
        assert_eq!(
            png_color_mode(&plain).unwrap(),
            ColorMode::Indexed {
                transparency_key: false
            }
        );
    }

    #[test]
    fn test_load_garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"definitely not an image").unwrap();

        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }), "got {err:?}");
    }

    #[test]
    fn test_load_truncated_png_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("truncated.png");
        let full = encode(png::ColorType::Rgba, &[1, 2, 3, 4], &[], None);
        fs::write(&path, &full[..full.len() / 2]).unwrap();

        let err = load_image(&path).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Decode);
    }

    #[test]
    fn test_load_missing_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image(dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
