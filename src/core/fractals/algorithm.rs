use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::escape_grid::EscapeResult;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::EscapeLimits;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::{julia, mandelbrot};
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Which part of the recurrence varies per pixel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Orbit {
    /// The pixel is the additive constant; the orbit starts at 0.
    Mandelbrot,
    /// The pixel is the starting point; the additive constant is fixed.
    Julia { constant: Complex },
}

impl Orbit {
    #[must_use]
    pub fn kind(&self) -> FractalKind {
        match self {
            Self::Mandelbrot => FractalKind::Mandelbrot,
            Self::Julia { .. } => FractalKind::Julia,
        }
    }
}

/// Per-pixel escape-time evaluation over a viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTimeAlgorithm {
    viewport: Viewport,
    limits: EscapeLimits,
    orbit: Orbit,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, limits: EscapeLimits, orbit: Orbit) -> Self {
        Self {
            viewport,
            limits,
            orbit,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn limits(&self) -> EscapeLimits {
        self.limits
    }

    #[must_use]
    pub fn orbit(&self) -> Orbit {
        self.orbit
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = EscapeResult;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let point = pixel_to_complex_coords(pixel, &self.viewport)?;

        Ok(match self.orbit {
            Orbit::Mandelbrot => mandelbrot::algorithm::evaluate(point, self.limits),
            Orbit::Julia { constant } => julia::algorithm::evaluate(point, constant, self.limits),
        })
    }

    fn pixel_rect(&self) -> PixelRect {
        self.viewport.pixel_rect()
    }
}
