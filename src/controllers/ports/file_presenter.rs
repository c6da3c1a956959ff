use std::path::Path;

use crate::core::data::pixel_image::PixelImage;

/// Writes a finished image to disk in one particular format.
pub trait FilePresenterPort {
    /// File extension without the dot.
    fn extension(&self) -> &'static str;

    fn present(&self, image: &PixelImage, filepath: &Path) -> anyhow::Result<()>;
}
