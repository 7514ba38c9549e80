//! Image loading, classification, and saving utilities.

mod load;
mod save;

pub use load::load_image;
pub use save::{encode_png, save_png, Compression};

use image::DynamicImage;

/// Color mode of a source image, as stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Grayscale without alpha.
    Gray,
    /// Grayscale with a per-pixel alpha channel.
    GrayAlpha,
    /// Truecolor without alpha.
    Rgb,
    /// Truecolor with a per-pixel alpha channel.
    Rgba,
    /// Palette-indexed, optionally with a `tRNS` transparency key.
    Indexed { transparency_key: bool },
}

/// How an image carries transparency, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transparency {
    /// Fully opaque by construction.
    None,
    /// Continuous per-pixel alpha.
    AlphaChannel,
    /// Palette entries declared transparent.
    PaletteKey,
}

impl ColorMode {
    /// Classify the transparency carried by this mode.
    ///
    /// A transparency key only counts for palette images.
    #[must_use]
    pub const fn transparency(self) -> Transparency {
        match self {
            Self::Rgba | Self::GrayAlpha => Transparency::AlphaChannel,
            Self::Indexed {
                transparency_key: true,
            } => Transparency::PaletteKey,
            Self::Gray | Self::Rgb | Self::Indexed { .. } => Transparency::None,
        }
    }
}

/// A decoded image together with the mode it was stored in.
#[derive(Debug)]
pub struct SourceImage {
    mode: ColorMode,
    pixels: DynamicImage,
}

impl SourceImage {
    /// Decoded pixel data. Palette images are expanded to RGB(A).
    #[must_use]
    pub const fn pixels(&self) -> &DynamicImage {
        &self.pixels
    }

    /// Transparency classification of the stored mode.
    #[must_use]
    pub const fn transparency(&self) -> Transparency {
        self.mode.transparency()
    }
}
