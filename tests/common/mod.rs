//! Fixtures shared by the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

pub fn write_rgba(dir: &Path, name: &str, pixels: &[[u8; 4]], width: u32) -> PathBuf {
    let height = u32::try_from(pixels.len()).unwrap() / width;
    let mut img = RgbaImage::new(width, height);
    for (i, p) in pixels.iter().enumerate() {
        let i = u32::try_from(i).unwrap();
        img.put_pixel(i % width, i / width, Rgba(*p));
    }
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

pub fn write_rgb(dir: &Path, name: &str, color: [u8; 3], width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb(color)).save(&path).unwrap();
    path
}

/// One-pixel-per-entry palette image; `trns` marks palette alpha.
pub fn write_indexed(
    dir: &Path,
    name: &str,
    palette: &[[u8; 3]],
    trns: Option<&[u8]>,
    indices: &[u8],
) -> PathBuf {
    let path = dir.join(name);
    let file = fs::File::create(&path).unwrap();
    let width = u32::try_from(indices.len()).unwrap();

    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, 1);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(palette.concat());
    if let Some(trns) = trns {
        encoder.set_trns(trns.to_vec());
    }
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(indices).unwrap();
    writer.finish().unwrap();
    path
}

/// One-row 8-bit PNG of any color type, optionally with a `tRNS` chunk.
pub fn write_png(
    dir: &Path,
    name: &str,
    color: png::ColorType,
    data: &[u8],
    width: u32,
    trns: Option<&[u8]>,
) -> PathBuf {
    let path = dir.join(name);
    let file = fs::File::create(&path).unwrap();

    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, 1);
    encoder.set_color(color);
    encoder.set_depth(png::BitDepth::Eight);
    if let Some(trns) = trns {
        encoder.set_trns(trns.to_vec());
    }
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(data).unwrap();
    writer.finish().unwrap();
    path
}

pub fn open(path: &Path) -> DynamicImage {
    image::open(path).unwrap()
}
