//! Splash image generation
//!
//! The source image is decoded once, then cover-resized and center-cropped
//! into each required size. Output is always lossless PNG.

use std::fs;
use std::path::Path;

use image::imageops::FilterType;
use image::{ImageFormat, RgbaImage};

use crate::error::SplashError;
use crate::manifest::{Asset, Platform};

/// Source splash image, decoded once and shared by all crop operations
pub struct SourceImage {
    img: RgbaImage,
}

impl SourceImage {
    /// Decode the source splash from disk
    pub fn open(path: &str) -> Result<Self, SplashError> {
        let img = image::open(path)?.to_rgba8();
        Ok(Self { img })
    }

    /// Write a copy scaled to cover `width` x `height` and cropped, centered,
    /// to exactly that size.
    pub fn write_cropped(&self, dest: &Path, width: u32, height: u32) -> Result<(), SplashError> {
        let (src_w, src_h) = self.img.dimensions();
        let (cover_w, cover_h) = cover_size(src_w, src_h, width, height);
        let resized = image::imageops::resize(&self.img, cover_w, cover_h, FilterType::Lanczos3);
        let x = (cover_w - width) / 2;
        let y = (cover_h - height) / 2;
        let cropped = image::imageops::crop_imm(&resized, x, y, width, height).to_image();
        cropped.save_with_format(dest, ImageFormat::Png)?;
        Ok(())
    }
}

/// Smallest size that covers the target while keeping the source aspect ratio.
/// Rounding must never land below the crop window.
fn cover_size(src_w: u32, src_h: u32, dst_w: u32, dst_h: u32) -> (u32, u32) {
    let scale = f64::max(dst_w as f64 / src_w as f64, dst_h as f64 / src_h as f64);
    let w = (src_w as f64 * scale).round() as u32;
    let h = (src_h as f64 * scale).round() as u32;
    (w.max(dst_w), h.max(dst_h))
}

/// Generate one splash file for a platform.
///
/// The destination's parent directory is created first, which handles both
/// the flat iOS layout and the Android density subdirectories.
pub fn generate_asset(
    source: &SourceImage,
    platform: &Platform,
    asset: &Asset,
) -> Result<(), SplashError> {
    let dest = Path::new(&platform.splash_path).join(asset.name);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    source.write_cropped(&dest, asset.width, asset.height)
}
