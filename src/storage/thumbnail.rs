use std::path::Path;

use anyhow::Context;
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbImage};

use crate::core::data::pixel_image::PixelImage;

/// Largest size that fits inside `max_width` x `max_height` with the same
/// aspect ratio. Images are never enlarged.
#[must_use]
pub fn thumbnail_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    let scale = (f64::from(max_width) / f64::from(width))
        .min(f64::from(max_height) / f64::from(height))
        .min(1.0);

    let scaled = |side: u32| ((f64::from(side) * scale).round() as u32).max(1);
    (scaled(width), scaled(height))
}

pub fn create_thumbnail(
    image: &PixelImage,
    path: &Path,
    max_width: u32,
    max_height: u32,
) -> anyhow::Result<(u32, u32)> {
    let rgb = RgbImage::from_raw(image.width(), image.height(), image.buffer().clone())
        .context("pixel buffer does not match image dimensions")?;

    let (width, height) = thumbnail_dimensions(image.width(), image.height(), max_width, max_height);
    let thumbnail = imageops::resize(&rgb, width, height, FilterType::Lanczos3);

    thumbnail
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("writing thumbnail {}", path.display()))?;

    Ok((width, height))
}
