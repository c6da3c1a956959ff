use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelToComplexCoordsError {
    #[error(
        "point (x: {}, y: {}) is outside the {}x{} pixel grid",
        .point.x,
        .point.y,
        .pixel_rect.width(),
        .pixel_rect.height()
    )]
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

/// Maps a pixel to its sample point on the complex plane.
///
/// Both axes share `viewport.pixel_step()`. Columns grow towards positive
/// real, rows grow towards negative imaginary, and the pixel at
/// `(width / 2, height / 2)` lands exactly on the centre.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    viewport: &Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    let pixel_rect = viewport.pixel_rect();

    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let step = viewport.pixel_step();
    let center = viewport.center();
    let half_width = f64::from(pixel_rect.width()) / 2.0;
    let half_height = f64::from(pixel_rect.height()) / 2.0;

    let real = center.real + (f64::from(pixel_position.x) - half_width) * step;
    let imag = center.imag - (f64::from(pixel_position.y) - half_height) * step;

    Ok(Complex { real, imag })
}
