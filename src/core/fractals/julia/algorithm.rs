use crate::core::data::complex::Complex;
use crate::core::data::escape_grid::EscapeResult;
use crate::core::fractals::escape_time::{EscapeLimits, iterate_orbit};

/// Escape time of the starting point `z0` under `z = z² + constant`.
#[must_use]
pub fn evaluate(z0: Complex, constant: Complex, limits: EscapeLimits) -> EscapeResult {
    iterate_orbit(z0, constant, limits)
}
