//! Image saving utilities.

use std::fs;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, ImageResult, RgbImage};

use crate::error::{Error, Result};

/// PNG compression effort used when rewriting a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    /// Fastest encoding, larger files.
    Fast,
    /// Encoder default.
    Default,
    /// Smallest files.
    #[default]
    Best,
}

impl From<Compression> for CompressionType {
    fn from(value: Compression) -> Self {
        match value {
            Compression::Fast => Self::Fast,
            Compression::Default => Self::Default,
            Compression::Best => Self::Best,
        }
    }
}

/// Encode an opaque canvas and overwrite the file at `path`.
///
/// The whole PNG is encoded in memory before the file is opened, so an
/// encoding failure leaves the original bytes in place.
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written.
pub fn save_png<P: AsRef<Path>>(canvas: &RgbImage, path: P, compression: Compression) -> Result<()> {
    let path = path.as_ref();

    let encoded = encode_png(canvas, compression).map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, &encoded).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Wrote {} bytes to {}", encoded.len(), path.display());

    Ok(())
}

/// Encode an RGB canvas as an 8-bit truecolor PNG.
///
/// # Errors
///
/// Returns an error if the encoder rejects the buffer.
pub fn encode_png(canvas: &RgbImage, compression: Compression) -> ImageResult<Vec<u8>> {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut buf, compression.into(), FilterType::Adaptive);
    encoder.write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(buf)
}
