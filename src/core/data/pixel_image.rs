use thiserror::Error;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

const CHANNELS: usize = 3;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * CHANNELS
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelImageError {
    #[error("pixel {pixel:?} outside of image {pixel_rect:?}")]
    PixelOutsideBounds { pixel: Point, pixel_rect: PixelRect },
    #[error("pixel rect size {pixel_rect_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

pub type PixelImageData = Vec<u8>;

/// Packed 8-bit RGB pixels, row-major, row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelImage {
    pixel_rect: PixelRect,
    buffer: PixelImageData,
}

impl PixelImage {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            buffer: vec![0; pixel_rect_to_buffer_size(pixel_rect)],
        }
    }

    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelImageData,
    ) -> Result<Self, PixelImageError> {
        let buffer_size = pixel_rect_to_buffer_size(pixel_rect);

        if buffer_size != buffer.len() {
            return Err(PixelImageError::BoundsMismatch {
                pixel_rect_size: buffer_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixel_rect.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixel_rect.height()
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelImageData {
        &self.buffer
    }

    /// Raw bytes for bulk writers; the length is fixed by the pixel rect.
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn into_buffer(self) -> PixelImageData {
        self.buffer
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelImageError> {
        let index = self.byte_index(pixel)?;

        Ok(Colour::rgb(
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ))
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelImageError> {
        let index = self.byte_index(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    pub fn colours(&self) -> impl Iterator<Item = Colour> + '_ {
        self.buffer
            .chunks_exact(CHANNELS)
            .map(|rgb| Colour::rgb(rgb[0], rgb[1], rgb[2]))
    }

    fn byte_index(&self, pixel: Point) -> Result<usize, PixelImageError> {
        if !self.pixel_rect.contains_point(pixel) {
            return Err(PixelImageError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        Ok(self.pixel_rect.index_of(pixel) * CHANNELS)
    }
}
