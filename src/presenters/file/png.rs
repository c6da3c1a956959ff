use std::path::Path;

use anyhow::Context;
use image::{ColorType, ImageFormat};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_image::PixelImage;

#[derive(Debug, Default)]
pub struct PngFilePresenter {}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PngFilePresenter {
    fn extension(&self) -> &'static str {
        "png"
    }

    fn present(&self, image: &PixelImage, filepath: &Path) -> anyhow::Result<()> {
        image::save_buffer_with_format(
            filepath,
            image.buffer(),
            image.width(),
            image.height(),
            ColorType::Rgb8,
            ImageFormat::Png,
        )
        .with_context(|| format!("writing {}", filepath.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::data::point::Point;

    #[test]
    fn png_round_trips_through_the_image_crate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        let mut image = PixelImage::new(PixelRect::new(3, 2).unwrap());
        image.set_pixel(Point { x: 2, y: 1 }, Colour::rgb(200, 100, 50)).unwrap();

        PngFilePresenter::new().present(&image, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(2, 1).0, [200, 100, 50]);
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0]);
    }
}
