//! Checks run before a render allocates or iterates anything.

use std::mem::size_of;

use tracing::warn;

use crate::core::data::escape_grid::EscapeResult;
use crate::core::data::viewport::Viewport;
use crate::core::errors::RenderError;

/// Upper bound for the grid plus the image of a single render.
pub const MEMORY_BUDGET_BYTES: u64 = 2 * 1024 * 1024 * 1024;

/// Smallest pixel step, relative to the centre magnitude, that `f64` still resolves
/// into distinct sample points.
pub const MIN_RELATIVE_PIXEL_STEP: f64 = 64.0 * f64::EPSILON;

const BYTES_PER_PIXEL: u64 = size_of::<EscapeResult>() as u64 + 3;

#[must_use]
pub fn estimated_render_bytes(width: u32, height: u32) -> u64 {
    u64::from(width) * u64::from(height) * BYTES_PER_PIXEL
}

pub fn check_memory_budget(width: u32, height: u32, budget_bytes: u64) -> Result<(), RenderError> {
    let required_bytes = estimated_render_bytes(width, height);

    if required_bytes > budget_bytes {
        return Err(RenderError::Resource {
            width,
            height,
            required_bytes,
            budget_bytes,
        });
    }

    Ok(())
}

pub fn check_precision(viewport: &Viewport) -> Result<(), RenderError> {
    let center = viewport.center();
    let scale = 1.0_f64.max(center.real.abs()).max(center.imag.abs());
    let pixel_step = viewport.pixel_step();

    if pixel_step / scale < MIN_RELATIVE_PIXEL_STEP {
        warn!(zoom = viewport.zoom(), pixel_step, "zoom beyond f64 precision");
        return Err(RenderError::NumericPrecision {
            zoom: viewport.zoom(),
            pixel_step,
        });
    }

    Ok(())
}
