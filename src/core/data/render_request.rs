use serde::{Deserialize, Serialize};

use crate::core::actions::render::plan::RenderPlan;
use crate::core::colour_mapping::colouring::Colouring;
use crate::core::colour_mapping::factory::colour_map_factory;
use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport::Viewport;
use crate::core::errors::{ConfigurationError, RenderError};
use crate::core::fractals::algorithm::{EscapeTimeAlgorithm, Orbit};
use crate::core::fractals::escape_time::{DEFAULT_ESCAPE_RADIUS, EscapeLimits};
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::util::guards::{MEMORY_BUDGET_BYTES, check_memory_budget, check_precision};

/// Everything needed to render one image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    pub width: u32,
    pub height: u32,
    pub center: Complex,
    pub zoom: f64,
    pub max_iterations: u32,
    pub escape_radius: f64,
    /// Required for Julia renders, ignored for Mandelbrot.
    pub julia_constant: Option<Complex>,
    pub colour_scheme: ColourSchemeKind,
    pub colouring: Colouring,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            center: Complex::new(-0.5, 0.0),
            zoom: 1.0,
            max_iterations: 100,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            julia_constant: None,
            colour_scheme: ColourSchemeKind::default(),
            colouring: Colouring::default(),
        }
    }
}

impl RenderRequest {
    /// Checks every parameter and resolves the colour scheme before any
    /// allocation or iteration happens.
    pub fn validate(&self, kind: FractalKind) -> Result<RenderPlan, RenderError> {
        let pixel_rect = PixelRect::new(self.width, self.height).map_err(|_| {
            ConfigurationError::InvalidDimensions {
                width: self.width,
                height: self.height,
            }
        })?;

        if !self.zoom.is_finite() || self.zoom <= 0.0 {
            return Err(ConfigurationError::InvalidZoom(self.zoom).into());
        }

        if !self.center.is_finite() {
            return Err(ConfigurationError::NonFiniteCenter {
                real: self.center.real,
                imag: self.center.imag,
            }
            .into());
        }

        let limits = EscapeLimits::new(self.max_iterations, self.escape_radius)?;

        let orbit = match kind {
            FractalKind::Mandelbrot => Orbit::Mandelbrot,
            FractalKind::Julia => {
                let constant = self
                    .julia_constant
                    .ok_or(ConfigurationError::MissingJuliaConstant)?;
                if !constant.is_finite() {
                    return Err(ConfigurationError::MalformedComplex(constant.to_string()).into());
                }
                Orbit::Julia { constant }
            }
        };

        let viewport = Viewport::new(self.center, self.zoom, pixel_rect);
        check_precision(&viewport)?;
        check_memory_budget(self.width, self.height, MEMORY_BUDGET_BYTES)?;

        Ok(RenderPlan::new(
            EscapeTimeAlgorithm::new(viewport, limits, orbit),
            colour_map_factory(self.colour_scheme),
            self.colouring,
        ))
    }
}
