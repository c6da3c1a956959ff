//! Entry points of the engine: request in, pixels (and optionally the raw grid) out.

use std::time::Instant;

use tracing::debug;

use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::colourize::colourize::colourize;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon_cancelable,
};
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render::plan::RenderPlan;
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::pixel_image::PixelImage;
use crate::core::data::render_request::RenderRequest;
use crate::core::errors::RenderError;
use crate::core::fractals::fractal_kinds::FractalKind;

pub fn render(request: &RenderRequest, kind: FractalKind) -> Result<PixelImage, RenderError> {
    render_cancelable(request, kind, &NeverCancel)
}

/// Like [`render`], but aborts with [`RenderError::Cancelled`] once `cancel`
/// fires. No partial image is returned.
pub fn render_cancelable<C: CancelToken>(
    request: &RenderRequest,
    kind: FractalKind,
    cancel: &C,
) -> Result<PixelImage, RenderError> {
    let plan = request.validate(kind)?;
    let grid = evaluate_grid(&plan, cancel)?;

    Ok(colourize_plan(&plan, &grid))
}

/// Renders and also hands back the escape grid, e.g. for iteration statistics.
pub fn render_with_raw(
    request: &RenderRequest,
    kind: FractalKind,
) -> Result<(PixelImage, EscapeGrid), RenderError> {
    let plan = request.validate(kind)?;
    let grid = evaluate_grid(&plan, &NeverCancel)?;
    let image = colourize_plan(&plan, &grid);

    Ok((image, grid))
}

/// Evaluates the escape grid in parallel without colouring it.
pub fn render_grid(request: &RenderRequest, kind: FractalKind) -> Result<EscapeGrid, RenderError> {
    let plan = request.validate(kind)?;
    evaluate_grid(&plan, &NeverCancel)
}

/// Single-threaded reference evaluation of the escape grid.
pub fn render_grid_serial(
    request: &RenderRequest,
    kind: FractalKind,
) -> Result<EscapeGrid, RenderError> {
    let plan = request.validate(kind)?;
    let algorithm = plan.algorithm();
    let cells = generate_fractal_serial(algorithm)?;

    Ok(EscapeGrid::from_cells(
        algorithm.pixel_rect(),
        algorithm.limits().max_iterations(),
        cells,
    )?)
}

fn evaluate_grid<C: CancelToken>(plan: &RenderPlan, cancel: &C) -> Result<EscapeGrid, RenderError> {
    let algorithm = plan.algorithm();
    let pixel_rect = algorithm.pixel_rect();
    let started = Instant::now();

    debug!(
        kind = %algorithm.orbit().kind(),
        width = pixel_rect.width(),
        height = pixel_rect.height(),
        max_iterations = algorithm.limits().max_iterations(),
        zoom = algorithm.viewport().zoom(),
        "evaluating escape grid"
    );

    let cells = generate_fractal_parallel_rayon_cancelable(algorithm, cancel).map_err(|err| {
        match err {
            GenerateFractalError::Cancelled(_) => RenderError::Cancelled,
            GenerateFractalError::Algorithm(err) => RenderError::PixelMapping(err),
        }
    })?;

    let grid = EscapeGrid::from_cells(pixel_rect, algorithm.limits().max_iterations(), cells)?;
    let stats = grid.stats();

    debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        min_iterations = stats.min_iterations,
        max_iterations = stats.max_iterations,
        mean_iterations = stats.mean_iterations,
        escaped = stats.escaped_count,
        interior = stats.interior_count,
        "escape grid ready"
    );

    Ok(grid)
}

fn colourize_plan(plan: &RenderPlan, grid: &EscapeGrid) -> PixelImage {
    let started = Instant::now();
    let image = colourize(grid, plan.colour_map(), plan.colouring());

    debug!(
        scheme = plan.colour_map().display_name(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "colourized"
    );

    image
}
