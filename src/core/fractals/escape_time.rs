//! The iterate-and-test loop shared by every escape-time fractal.

use std::f64::consts::LN_2;
use std::ops::ControlFlow;

use tracing::warn;

use crate::core::data::complex::Complex;
use crate::core::data::escape_grid::EscapeResult;
use crate::core::errors::ConfigurationError;

/// Below this radius `ln(ln|z|)` is not defined for every escaped orbit.
pub const MIN_ESCAPE_RADIUS: f64 = 2.0;

pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeLimits {
    max_iterations: u32,
    escape_radius: f64,
}

impl EscapeLimits {
    /// Radii in `(0, 2)` are raised to [`MIN_ESCAPE_RADIUS`].
    pub fn new(max_iterations: u32, escape_radius: f64) -> Result<Self, ConfigurationError> {
        if max_iterations == 0 {
            return Err(ConfigurationError::ZeroMaxIterations);
        }

        if !escape_radius.is_finite() || escape_radius <= 0.0 {
            return Err(ConfigurationError::InvalidEscapeRadius(escape_radius));
        }

        let escape_radius = if escape_radius < MIN_ESCAPE_RADIUS {
            warn!(
                requested = escape_radius,
                used = MIN_ESCAPE_RADIUS,
                "escape radius too small for smooth colouring, clamping"
            );
            MIN_ESCAPE_RADIUS
        } else {
            escape_radius
        };

        Ok(Self {
            max_iterations,
            escape_radius,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }
}

/// Iterates `z = z² + c` from `z0` until `|z|` exceeds the escape radius or the
/// iteration budget runs out.
///
/// Mandelbrot fixes `z0 = 0` and varies `c` per pixel; Julia fixes `c` and
/// varies `z0`.
#[must_use]
pub fn iterate_orbit(z0: Complex, c: Complex, limits: EscapeLimits) -> EscapeResult {
    let bailout = limits.escape_radius * limits.escape_radius;

    let orbit = (1..=limits.max_iterations).try_fold(z0, |z, iteration| {
        let next = z * z + c;

        if next.magnitude_squared() > bailout {
            ControlFlow::Break((iteration, next))
        } else {
            ControlFlow::Continue(next)
        }
    });

    match orbit {
        ControlFlow::Break((iteration, z)) => EscapeResult {
            iteration_count: iteration,
            smoothed_value: smoothed_iteration(iteration, z),
            escaped: true,
        },
        ControlFlow::Continue(_) => EscapeResult::interior(limits.max_iterations),
    }
}

// |z| > 2 here, so both logarithms are positive
fn smoothed_iteration(iteration: u32, z: Complex) -> f64 {
    let log_modulus = z.magnitude_squared().ln() / 2.0;
    let smoothed = f64::from(iteration) + 1.0 - log_modulus.ln() / LN_2;

    // an orbit that overflows on its first step has no usable modulus
    if smoothed.is_finite() {
        smoothed
    } else {
        f64::from(iteration)
    }
}
