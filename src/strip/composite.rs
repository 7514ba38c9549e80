//! Flattening transparent pixels onto an opaque canvas.

use image::{DynamicImage, Rgb, RgbImage, Rgba};

/// Background every transparent image is flattened onto.
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// How the source is laid over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mask {
    /// Weight each pixel by its alpha value.
    Alpha,
    /// Paste source colors as-is, ignoring alpha.
    None,
}

/// Allocate an opaque canvas filled with [`BACKGROUND`].
#[must_use]
pub fn white_canvas(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, BACKGROUND)
}

/// Composite `source` onto a fresh white canvas of the same size.
///
/// With [`Mask::Alpha`] every channel becomes
/// `src * a / 255 + 255 * (255 - a) / 255`, rounded to nearest. With
/// [`Mask::None`] the source color replaces the canvas outright.
#[must_use]
pub fn flatten(source: &DynamicImage, mask: Mask) -> RgbImage {
    let rgba = source.to_rgba8();
    let mut canvas = white_canvas(rgba.width(), rgba.height());

    for (dst, src) in canvas.pixels_mut().zip(rgba.pixels()) {
        let Rgba([r, g, b, a]) = *src;
        *dst = match mask {
            Mask::Alpha => {
                let Rgb([br, bg, bb]) = *dst;
                Rgb([blend(r, br, a), blend(g, bg, a), blend(b, bb, a)])
            }
            Mask::None => Rgb([r, g, b]),
        };
    }

    canvas
}

/// Blend one channel of `src` over `dst` with opacity `alpha`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn blend(src: u8, dst: u8, alpha: u8) -> u8 {
    let alpha = u32::from(alpha);
    let mixed = u32::from(src) * alpha + u32::from(dst) * (255 - alpha);
    // Safe: mixed <= 255 * 255, so the rounded quotient fits in u8
    ((mixed + 127) / 255) as u8
}
