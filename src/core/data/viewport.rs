use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::pixel_rect::PixelRect;

/// Width of the complex-plane window at zoom 1, the classic Mandelbrot view.
pub const BASE_SPAN: f64 = 4.0;

/// Maps an image onto the complex plane.
///
/// The horizontal span is `BASE_SPAN / zoom`; the vertical span follows the
/// image aspect ratio so pixels stay square. Row 0 is the top of the image and
/// the imaginary axis grows upwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    zoom: f64,
    pixel_rect: PixelRect,
}

impl Viewport {
    /// Callers validate `zoom > 0` beforehand (see `RenderRequest::validate`).
    #[must_use]
    pub fn new(center: Complex, zoom: f64, pixel_rect: PixelRect) -> Self {
        Self {
            center,
            zoom,
            pixel_rect,
        }
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn plane_width(&self) -> f64 {
        BASE_SPAN / self.zoom
    }

    #[must_use]
    pub fn plane_height(&self) -> f64 {
        self.plane_width() * f64::from(self.pixel_rect.height()) / f64::from(self.pixel_rect.width())
    }

    /// Plane distance between neighbouring pixels, identical on both axes.
    #[must_use]
    pub fn pixel_step(&self) -> f64 {
        self.plane_width() / f64::from(self.pixel_rect.width())
    }

    pub fn bounds(&self) -> Result<ComplexRect, ComplexRectError> {
        ComplexRect::centered(self.center, self.plane_width(), self.plane_height())
    }
}
